//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::config::ConfigError;
use crate::movement::locomotion::GroundProbe;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platforms). The only layer the ground probe sees.
    Ground,
    /// Blocking surfaces that never count as ground
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Where the downward ground probe starts, relative to the body's center.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct GroundSensor {
    /// Distance from the collider center to its bottom edge.
    pub foot_offset: f32,
}

impl GroundSensor {
    pub fn new(foot_offset: f32) -> Result<Self, ConfigError> {
        if !foot_offset.is_finite() || foot_offset <= 0.0 {
            return Err(ConfigError::DegenerateShape(format!(
                "foot offset {} is not a positive distance",
                foot_offset
            )));
        }
        Ok(Self { foot_offset })
    }

    /// Derive the foot offset from a rectangle or capsule collider.
    pub fn from_collider(collider: &Collider) -> Result<Self, ConfigError> {
        let shape = collider.shape_scaled();
        if let Some(cuboid) = shape.as_cuboid() {
            return Self::new(cuboid.half_extents.y);
        }
        if let Some(capsule) = shape.as_capsule() {
            return Self::new(capsule.half_height() + capsule.radius);
        }
        Err(ConfigError::DegenerateShape(
            "only rectangle and capsule colliders can host a ground probe".to_string(),
        ))
    }

    /// Ray origin at the bottom of the collider.
    pub fn origin(&self, center: Vec2) -> Vec2 {
        center - Vec2::new(0.0, self.foot_offset)
    }
}

/// Latest ground probe result, written before each locomotion step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundContact(pub bool);

impl GroundProbe for GroundContact {
    fn probe_ground(&self) -> bool {
        self.0
    }
}
