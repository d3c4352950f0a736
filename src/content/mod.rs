//! Content domain: data-driven motion tuning loaded from assets/data.

mod data;
mod loader;
#[cfg(test)]
mod tests;

pub use data::{MOTION_SCHEMA_VERSION, MotionFile};
pub use loader::{ContentLoadError, load_motion_file, parse_motion_json, parse_motion_ron};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::core::SimSettings;
use crate::movement::{MovementTuning, PIXELS_PER_METER};

/// Where content files are read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub motion: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            motion: PathBuf::from("assets/data/motion.ron"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .add_systems(Startup, load_motion_content);
    }
}

/// Load motion.ron into the tuning resources, keeping defaults on failure.
pub(crate) fn load_motion_content(
    paths: Res<ContentPaths>,
    mut tuning: ResMut<MovementTuning>,
    mut sim_settings: ResMut<SimSettings>,
) {
    match load_motion_file(&paths.motion) {
        Ok(file) => {
            info!(
                "Loaded motion tuning from {} (fixed_hz={})",
                paths.motion.display(),
                file.fixed_hz
            );
            tuning.player = file.player;
            sim_settings.fixed_hz = file.fixed_hz;
        }
        Err(e) => {
            warn!(
                "{}; using default tuning scaled to {} px/m",
                e, PIXELS_PER_METER
            );
        }
    }
}
