//! Movement domain: the per-character locomotion core.
//!
//! [`Locomotion`] owns one character's tuning, buffered input and motion
//! state. Each fixed step runs, in order:
//! 1. gravity integration over the elapsed interval (using the scale picked last step)
//! 2. ground sensing, which refills jump charges on contact
//! 3. jump resolution (ground, coyote or air jump)
//! 4. horizontal acceleration toward the input's target speed
//! 5. gravity scale selection for the next interval
//! 6. vertical speed clamps
//!
//! The core never talks to a physics engine. Adapters feed it the body's
//! velocity with [`Locomotion::absorb_body_velocity`], a ground probe, and
//! copy [`Locomotion::velocity`] back after the step.

use bevy::prelude::*;

use crate::movement::config::{
    ConfigError, HELD_ASCENT_GRAVITY_SCALE, JumpBufferPolicy, MOVE_DEAD_ZONE, MotionConfig,
};
use crate::movement::input::{InputSample, InputState, JumpEdge, JumpEdgeDetector, JumpPress};

/// Answers "is the character standing on walkable ground right now".
pub trait GroundProbe {
    fn probe_ground(&self) -> bool;
}

impl GroundProbe for bool {
    fn probe_ground(&self) -> bool {
        *self
    }
}

/// Jump legality as seen from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum JumpPhase {
    #[default]
    GroundedReady,
    /// Airborne, no jump used, still inside the coyote window.
    CoyoteWindow,
    /// Airborne with air-jump charges left.
    AirborneSpent,
    /// No jump is possible until the character lands.
    Exhausted,
}

/// Which kind of jump a step performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum JumpKind {
    Ground,
    Coyote,
    Air,
}

/// Runtime motion state. Reset whenever the character is recreated.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    pub is_grounded: bool,
    /// `None` until the first ground contact.
    pub last_grounded_time: Option<f32>,
    pub current_jump_count: u32,
    pub velocity: Vec2,
    pub gravity_scale: f32,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            is_grounded: false,
            last_grounded_time: None,
            current_jump_count: 0,
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
        }
    }
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub jump: Option<JumpKind>,
    /// A pending press was discarded without jumping.
    pub dropped_jump: bool,
    pub landed: bool,
    pub left_ground: bool,
    /// Horizontal force the mover applied (0 while movement is locked).
    pub horizontal_force: f32,
    /// Gravity scale selected for the coming interval.
    pub gravity_scale: f32,
}

/// Read-only snapshot for animation, UI and audio collaborators.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Default)]
#[reflect(Component)]
pub struct LocomotionStatus {
    pub is_grounded: bool,
    pub is_moving: bool,
    pub current_jump_count: u32,
    pub horizontal_velocity: f32,
    pub vertical_velocity: f32,
    pub phase: JumpPhase,
    /// Horizontal force applied by the last step.
    pub horizontal_force: f32,
    pub gravity_scale: f32,
}

/// Locomotion core for one character.
#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    config: MotionConfig,
    input: InputState,
    state: MotionState,
    jump_edges: JumpEdgeDetector,
    can_move: bool,
    started_at: Option<f32>,
    last_step: Option<f32>,
    last_jump_time: Option<f32>,
}

impl Locomotion {
    /// Build a core from validated tuning.
    pub fn new(config: MotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            input: InputState::default(),
            state: MotionState::default(),
            jump_edges: JumpEdgeDetector::default(),
            can_move: true,
            started_at: None,
            last_step: None,
            last_jump_time: None,
        })
    }

    /// Replace the tuning. Invalid tuning is rejected and the old one kept.
    pub fn configure(&mut self, config: MotionConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    pub fn on_directional_input(&mut self, axis: f32) {
        self.input.horizontal = if axis.is_finite() {
            axis.clamp(-1.0, 1.0)
        } else {
            0.0
        };
    }

    /// Buffer a jump press made at `now`. Returns false while input is still warming up.
    pub fn on_jump_pressed(&mut self, now: f32) -> bool {
        if !self.accepts_jumps(now) {
            debug!("Jump press at {:.3} ignored during input warm-up", now);
            return false;
        }
        self.input.jump_held = true;
        self.input.jump_request = Some(JumpPress { at: now });
        true
    }

    /// Handle the jump release edge. Returns true when it cut a rising jump.
    pub fn on_jump_released(&mut self) -> bool {
        if !self.input.jump_held {
            return false;
        }
        self.input.jump_held = false;

        if self.state.velocity.y > 0.0 {
            self.state.velocity.y *= self.config.jump_cut_multiplier;
            return true;
        }
        false
    }

    /// Feed a polled input sample. Returns true when the vertical velocity changed.
    pub fn feed_input(&mut self, sample: InputSample, now: f32) -> bool {
        self.on_directional_input(sample.axis);
        match self.jump_edges.feed(sample.jump) {
            Some(JumpEdge::Pressed) => {
                self.on_jump_pressed(now);
                false
            }
            Some(JumpEdge::Released) => self.on_jump_released(),
            None => false,
        }
    }

    /// Lock or unlock horizontal control. Gravity and jumps keep running.
    pub fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    fn accepts_jumps(&self, now: f32) -> bool {
        if self.config.input_warmup <= 0.0 {
            return true;
        }
        self.started_at
            .is_some_and(|start| now - start >= self.config.input_warmup)
    }

    // ---------------------------------------------------------------------
    // Step
    // ---------------------------------------------------------------------

    /// Overwrite the logical velocity with the physics body's current one.
    pub fn absorb_body_velocity(&mut self, velocity: Vec2) {
        if velocity.is_finite() {
            self.state.velocity = velocity;
        }
    }

    /// Advance one fixed tick at simulation time `now`.
    pub fn step(&mut self, now: f32, probe: &impl GroundProbe) -> StepReport {
        let dt = self.last_step.map_or(0.0, |prev| (now - prev).max(0.0));
        self.last_step = Some(now);
        self.started_at.get_or_insert(now);

        self.state.velocity.y -= self.config.gravity * self.state.gravity_scale * dt;

        let mut report = StepReport::default();

        let was_grounded = self.state.is_grounded;
        self.sense_ground(now, probe.probe_ground());
        report.landed = !was_grounded && self.state.is_grounded;
        report.left_ground = was_grounded && !self.state.is_grounded;

        if let Some(press) = self.input.take_jump_request() {
            match self.legal_jump(now) {
                Some(kind) => {
                    self.jump(kind, now);
                    report.jump = Some(kind);
                }
                None => {
                    let keep = self.config.jump_buffer == JumpBufferPolicy::Windowed
                        && press.is_buffered(now, self.config.jump_buffer_time);
                    if keep {
                        self.input.jump_request = Some(press);
                    } else {
                        report.dropped_jump = true;
                    }
                }
            }
        }

        if self.can_move {
            report.horizontal_force = self.drive_horizontal(dt);
        }
        report.gravity_scale = self.shape_gravity();
        self.clamp_vertical();

        report
    }

    fn sense_ground(&mut self, now: f32, touching: bool) {
        self.state.is_grounded = touching;
        if touching {
            self.state.last_grounded_time = Some(now);
            self.state.current_jump_count = 0;
        }
    }

    fn within_coyote(&self, now: f32) -> bool {
        self.state
            .last_grounded_time
            .is_some_and(|t| now - t <= self.config.coyote_time)
    }

    /// The jump a press would produce at `now`, if any.
    fn legal_jump(&self, now: f32) -> Option<JumpKind> {
        if self.state.current_jump_count == 0 {
            if self.state.is_grounded {
                return Some(JumpKind::Ground);
            }
            if self.within_coyote(now) {
                return Some(JumpKind::Coyote);
            }
        }
        if self.config.double_jump_unlocked
            && self.state.current_jump_count < self.config.max_jump_count
        {
            return Some(JumpKind::Air);
        }
        None
    }

    fn jump(&mut self, kind: JumpKind, now: f32) {
        self.state.velocity.y = self.config.jump_force;
        self.state.current_jump_count = match kind {
            JumpKind::Ground | JumpKind::Coyote => 1,
            JumpKind::Air => self.state.current_jump_count + 1,
        };
        self.last_jump_time = Some(now);
    }

    fn drive_horizontal(&mut self, dt: f32) -> f32 {
        let target = self.input.horizontal * self.config.move_speed;
        let mut rate = if target.abs() > MOVE_DEAD_ZONE {
            self.config.acceleration
        } else {
            self.config.deceleration
        };
        if !self.state.is_grounded {
            rate *= self.config.air_control_factor;
        }

        let gap = target - self.state.velocity.x;
        let force = gap * rate;
        let delta = force * dt / self.config.body_mass;
        // Never carry past the target in one step.
        self.state.velocity.x += if delta.abs() > gap.abs() { gap } else { delta };
        force
    }

    fn shape_gravity(&mut self) -> f32 {
        let vy = self.state.velocity.y;
        let scale = if vy < 0.0 {
            self.config.fall_multiplier
        } else if vy > 0.0 {
            if self.input.jump_held {
                HELD_ASCENT_GRAVITY_SCALE
            } else {
                self.config.fall_multiplier
            }
        } else {
            1.0
        };
        self.state.gravity_scale = scale;
        scale
    }

    fn clamp_vertical(&mut self) {
        let vy = self.state.velocity.y;
        self.state.velocity.y = vy.min(self.config.jump_force).max(self.config.max_fall_speed);
    }

    // ---------------------------------------------------------------------
    // Observables
    // ---------------------------------------------------------------------

    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded
    }

    pub fn is_moving(&self) -> bool {
        self.input.is_moving()
    }

    pub fn current_jump_count(&self) -> u32 {
        self.state.current_jump_count
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn horizontal_velocity(&self) -> f32 {
        self.state.velocity.x
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.state.velocity.y
    }

    pub fn gravity_scale(&self) -> f32 {
        self.state.gravity_scale
    }

    pub fn has_pending_jump(&self) -> bool {
        self.input.jump_request.is_some()
    }

    pub fn last_jump_time(&self) -> Option<f32> {
        self.last_jump_time
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn jump_phase(&self, now: f32) -> JumpPhase {
        if self.state.is_grounded {
            return JumpPhase::GroundedReady;
        }
        match self.legal_jump(now) {
            Some(JumpKind::Coyote) | Some(JumpKind::Ground) => JumpPhase::CoyoteWindow,
            Some(JumpKind::Air) => JumpPhase::AirborneSpent,
            None => JumpPhase::Exhausted,
        }
    }

    pub fn status(&self, now: f32) -> LocomotionStatus {
        LocomotionStatus {
            is_grounded: self.state.is_grounded,
            is_moving: self.is_moving(),
            current_jump_count: self.state.current_jump_count,
            horizontal_velocity: self.state.velocity.x,
            vertical_velocity: self.state.velocity.y,
            phase: self.jump_phase(now),
            horizontal_force: 0.0,
            gravity_scale: self.state.gravity_scale,
        }
    }
}
