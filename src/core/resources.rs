//! Core domain: shared simulation settings.

use bevy::prelude::*;

/// Settings for the fixed simulation loop.
#[derive(Resource, Debug, Clone)]
pub struct SimSettings {
    /// Fixed steps per second.
    pub fixed_hz: f64,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self { fixed_hz: 50.0 }
    }
}
