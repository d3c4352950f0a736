//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::config::ConfigError;
use crate::movement::{
    GameLayer, GroundContact, GroundSensor, Locomotion, LocomotionStatus, MovementTuning, Player,
};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Components for a locomotion-driven body, validated up front.
pub fn locomotion_bundle(
    tuning: &MovementTuning,
    collider: Collider,
) -> Result<impl Bundle, ConfigError> {
    let locomotion = Locomotion::new(tuning.player.clone())?;
    let sensor = GroundSensor::from_collider(&collider)?;

    Ok((
        locomotion,
        sensor,
        GroundContact::default(),
        LocomotionStatus::default(),
        // Physics
        (
            RigidBody::Dynamic,
            collider,
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Locomotion integrates its own shaped gravity
            Friction::new(0.0),
        ),
    ))
}

/// Spawn the player once the tuning has been loaded.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let collider = Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y);
    let bundle = match locomotion_bundle(&tuning, collider) {
        Ok(bundle) => bundle,
        Err(e) => {
            error!("Cannot spawn player: {}", e);
            return;
        }
    };

    info!(
        "Spawning player: move_speed={}, jump_force={}, jumps={}, apex={:.1}, reach={:.1}",
        tuning.player.move_speed,
        tuning.player.jump_force,
        tuning.player.max_jump_count,
        tuning.player.single_jump_height(),
        tuning.player.max_reachable_height()
    );

    commands.spawn((
        Player,
        bundle,
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
    ));
}
