//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether jump phase transitions are logged
    pub trace_phases: bool,
    /// Number of successful tuning reloads this session
    pub reloads: u32,
}
