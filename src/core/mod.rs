//! Core domain: simulation clock setup and the demo camera.

mod resources;
mod systems;

pub use resources::SimSettings;

use bevy::prelude::*;

use crate::core::systems::{apply_sim_settings, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimSettings>()
            .add_systems(Startup, setup_camera)
            // Settings are loaded during Startup
            .add_systems(PostStartup, apply_sim_settings);
    }
}
