//! Debug domain: hotkeys for tuning reloads and phase tracing.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::content::{ContentPaths, load_motion_file};
use crate::debug::state::DebugState;
use crate::movement::{JumpPhase, Locomotion, LocomotionStatus, MovementTuning};

/// F5: reload motion.ron and push it into every locomotion core.
pub(crate) fn reload_tuning(
    keyboard: Res<ButtonInput<KeyCode>>,
    paths: Res<ContentPaths>,
    mut debug_state: ResMut<DebugState>,
    mut tuning: ResMut<MovementTuning>,
    mut query: Query<(Entity, &mut Locomotion)>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }

    let file = match load_motion_file(&paths.motion) {
        Ok(file) => file,
        Err(e) => {
            warn!("Tuning reload skipped: {}", e);
            return;
        }
    };

    for (entity, mut locomotion) in &mut query {
        if let Err(e) = locomotion.configure(file.player.clone()) {
            error!("Entity {:?} kept its tuning: {}", entity, e);
        }
    }

    tuning.player = file.player;
    debug_state.reloads += 1;
    info!(
        "Reloaded tuning from {} (reload #{})",
        paths.motion.display(),
        debug_state.reloads
    );
}

/// F2: lock or unlock horizontal control. Jumps and gravity keep running.
pub(crate) fn toggle_movement_lock(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(Entity, &mut Locomotion)>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    for (entity, mut locomotion) in &mut query {
        let can_move = !locomotion.can_move();
        locomotion.set_can_move(can_move);
        info!(
            "Movement {} for {:?} (axis={:.1})",
            if can_move { "unlocked" } else { "locked" },
            entity,
            locomotion.input().horizontal
        );
    }
}

/// F3: toggle jump phase tracing
pub(crate) fn toggle_phase_trace(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.trace_phases = !debug_state.trace_phases;
        info!(
            "Jump phase tracing {}",
            if debug_state.trace_phases { "on" } else { "off" }
        );
    }
}

pub(crate) fn trace_phase_changes(
    debug_state: Res<DebugState>,
    mut last_phases: Local<HashMap<Entity, JumpPhase>>,
    query: Query<(Entity, &Locomotion, &LocomotionStatus)>,
) {
    if !debug_state.trace_phases {
        last_phases.clear();
        return;
    }

    for (entity, locomotion, status) in &query {
        let Some(previous) = last_phases.insert(entity, status.phase) else {
            continue;
        };
        if previous != status.phase {
            info!(
                "{:?}: {:?} -> {:?} (jumps={}, vy={:.2}, gravity x{}, pending={}, last_jump={:?}, last_grounded={:?})",
                entity,
                previous,
                status.phase,
                status.current_jump_count,
                status.vertical_velocity,
                locomotion.gravity_scale(),
                locomotion.has_pending_jump(),
                locomotion.last_jump_time(),
                locomotion.state().last_grounded_time
            );
        }
    }
}
