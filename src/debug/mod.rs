//! Debug tooling for tuning iteration.
//!
//! Features:
//! - F5 reloads assets/data/motion.ron into every locomotion core
//! - F3 toggles logging of jump phase transitions
//! - F2 locks or unlocks horizontal control of every locomotion core

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{
    reload_tuning, toggle_movement_lock, toggle_phase_trace, trace_phase_changes,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                reload_tuning,
                toggle_movement_lock,
                toggle_phase_trace,
                trace_phase_changes,
            ),
        );
    }
}
