//! Movement domain: fixed-step locomotion update.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    GroundContact, JumpedEvent, LandedEvent, LeftGroundEvent, Locomotion, LocomotionStatus,
};

/// Run one locomotion step per character and hand the result to the body.
///
/// Runs in `FixedUpdate`, so `Time` is the fixed clock here.
pub(crate) fn step_locomotion(
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &mut Locomotion,
        &GroundContact,
        &mut LinearVelocity,
        &mut LocomotionStatus,
    )>,
    mut jumped_events: MessageWriter<JumpedEvent>,
    mut landed_events: MessageWriter<LandedEvent>,
    mut left_ground_events: MessageWriter<LeftGroundEvent>,
) {
    let now = time.elapsed_secs();

    for (entity, mut locomotion, contact, mut velocity, mut status) in &mut query {
        // Collisions may have changed the body since the last step
        locomotion.absorb_body_velocity(velocity.0);

        let report = locomotion.step(now, contact);
        velocity.0 = locomotion.velocity();
        *status = LocomotionStatus {
            horizontal_force: report.horizontal_force,
            ..locomotion.status(now)
        };

        if report.landed {
            debug!(
                "Landed: entity={:?}, jump_count reset to {}",
                entity,
                locomotion.current_jump_count()
            );
            landed_events.write(LandedEvent { entity });
        } else if report.left_ground {
            debug!("Left ground: entity={:?}", entity);
            left_ground_events.write(LeftGroundEvent { entity });
        }

        if let Some(kind) = report.jump {
            debug!(
                "{:?} jump: entity={:?}, jump_count={}",
                kind,
                entity,
                locomotion.current_jump_count()
            );
            jumped_events.write(JumpedEvent {
                entity,
                kind,
                jump_count: locomotion.current_jump_count(),
            });
        } else if report.dropped_jump {
            debug!(
                "Jump request dropped: entity={:?}, phase={:?}",
                entity, status.phase
            );
        }
    }
}
