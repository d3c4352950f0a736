//! Core domain: simulation setup systems.

use bevy::prelude::*;

use crate::core::resources::SimSettings;

/// Apply the loaded fixed rate to the fixed-step clock.
pub(crate) fn apply_sim_settings(settings: Res<SimSettings>, mut fixed: ResMut<Time<Fixed>>) {
    fixed.set_timestep_hz(settings.fixed_hz);
    info!("Fixed timestep set to {} Hz", settings.fixed_hz);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
