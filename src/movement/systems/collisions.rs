//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, GroundSensor, Locomotion};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &GroundSensor, &Locomotion, &mut GroundContact)>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, sensor, locomotion, mut contact) in &mut query {
        // Cast a short ray downward from the character's feet
        let origin = sensor.origin(transform.translation.truncate());
        let hit = spatial_query.cast_ray(
            origin,
            Dir2::NEG_Y,
            locomotion.config().ground_check_distance,
            true,
            &ground_filter,
        );

        contact.0 = hit.is_some();
    }
}
