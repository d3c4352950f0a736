//! Movement domain: buffered input state and edge detection.

/// One polled snapshot of the player's controls.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Horizontal axis (-1.0 = left, 1.0 = right).
    pub axis: f32,
    /// Whether the jump control is currently down.
    pub jump: bool,
}

impl InputSample {
    pub fn new(axis: f32, jump: bool) -> Self {
        Self { axis, jump }
    }
}

/// Transition of the jump control between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpEdge {
    Pressed,
    Released,
}

/// Turns a stream of held/not-held samples into press and release edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpEdgeDetector {
    held: bool,
}

impl JumpEdgeDetector {
    /// Feed the latest held state, returning the edge it produced, if any.
    pub fn feed(&mut self, held: bool) -> Option<JumpEdge> {
        let edge = match (self.held, held) {
            (false, true) => Some(JumpEdge::Pressed),
            (true, false) => Some(JumpEdge::Released),
            _ => None,
        };
        self.held = held;
        edge
    }
}

/// A jump press waiting to be consumed by the jump state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpPress {
    /// Simulation time of the press edge.
    pub at: f32,
}

impl JumpPress {
    /// Whether the press is still inside the buffer window at `now`.
    pub fn is_buffered(&self, now: f32, buffer_time: f32) -> bool {
        now - self.at <= buffer_time
    }
}

/// Input as captured between simulation steps.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Horizontal axis, clamped to [-1, 1].
    pub horizontal: f32,
    pub jump_held: bool,
    pub(crate) jump_request: Option<JumpPress>,
}

impl InputState {
    pub fn is_moving(&self) -> bool {
        self.horizontal != 0.0
    }

    /// Take the pending press, leaving nothing behind.
    pub(crate) fn take_jump_request(&mut self) -> Option<JumpPress> {
        self.jump_request.take()
    }
}
