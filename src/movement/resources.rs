//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::movement::config::MotionConfig;
use crate::movement::input::InputSample;

/// World units per meter used by the demo room's pixel-sized colliders.
pub const PIXELS_PER_METER: f32 = 40.0;

/// Downward acceleration in the sandbox room, px/s².
pub const SANDBOX_GRAVITY: f32 = 2000.0;

/// Tuning applied to newly spawned characters.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub player: MotionConfig,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            player: MotionConfig::default()
                .scaled(PIXELS_PER_METER)
                .with_gravity(SANDBOX_GRAVITY),
        }
    }
}

/// Keys that drive the player.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            jump: vec![KeyCode::Space, KeyCode::KeyK],
        }
    }
}

impl InputBindings {
    /// Poll the keyboard into a sample.
    pub fn sample(&self, keyboard: &ButtonInput<KeyCode>) -> InputSample {
        let mut axis = 0.0;
        if keyboard.any_pressed(self.left.iter().copied()) {
            axis -= 1.0;
        }
        if keyboard.any_pressed(self.right.iter().copied()) {
            axis += 1.0;
        }
        InputSample::new(axis, keyboard.any_pressed(self.jump.iter().copied()))
    }
}
