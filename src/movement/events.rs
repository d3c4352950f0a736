//! Movement domain: locomotion messages for animation and audio listeners.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::locomotion::JumpKind;

/// Event emitted when a character performs a jump
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub kind: JumpKind,
    pub jump_count: u32,
}

impl Message for JumpedEvent {}

/// Event emitted when a character touches ground after being airborne
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}

/// Event emitted when a character loses ground contact
#[derive(Debug)]
pub struct LeftGroundEvent {
    pub entity: Entity,
}

impl Message for LeftGroundEvent {}
