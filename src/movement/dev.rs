//! Movement domain: test room for trying out the tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

/// Static slabs the test room is built from: (center, size, is_ground).
const ROOM_LAYOUT: [(Vec2, Vec2, bool); 6] = [
    // Floor
    (Vec2::new(0.0, -200.0), Vec2::new(800.0, 40.0), true),
    // Walls
    (Vec2::new(-420.0, 50.0), Vec2::new(40.0, 500.0), false),
    (Vec2::new(420.0, 50.0), Vec2::new(40.0, 500.0), false),
    // Platforms, rising toward the center
    (Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0), true),
    (Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0), true),
    (Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0), true),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    for (center, size, is_ground) in ROOM_LAYOUT {
        let mut slab = commands.spawn((
            Sprite {
                color: if is_ground { ground_color } else { wall_color },
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));

        if is_ground {
            slab.insert((Ground, ground_layers));
        } else {
            slab.insert((Wall, wall_layers));
        }
    }
}
