//! Movement domain: platformer locomotion and its Bevy/avian2d bindings.

mod bootstrap;
mod components;
pub mod config;
mod dev;
mod events;
pub mod input;
pub mod locomotion;
mod resources;
mod systems;

pub use bootstrap::locomotion_bundle;
pub use components::{GameLayer, Ground, GroundContact, GroundSensor, Player, Wall};
pub use config::{ConfigError, JumpBufferPolicy, MotionConfig};
pub use events::{JumpedEvent, LandedEvent, LeftGroundEvent};
pub use input::{InputSample, JumpEdge, JumpEdgeDetector};
pub use locomotion::{
    GroundProbe, JumpKind, JumpPhase, Locomotion, LocomotionStatus, MotionState, StepReport,
};
pub use resources::{InputBindings, MovementTuning, PIXELS_PER_METER};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{detect_ground, read_input, step_locomotion};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<InputBindings>()
            .register_type::<LocomotionStatus>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_message::<LeftGroundEvent>()
            .add_systems(Startup, spawn_test_room)
            // Tuning is loaded during Startup
            .add_systems(PostStartup, spawn_player)
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, (detect_ground, step_locomotion).chain());
    }
}
