//! Movement domain: input sampling for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{InputBindings, Locomotion, Player};

/// Poll the keyboard and hand the sample to every player's locomotion core.
///
/// Press timestamps come from `Time<Fixed>` so they share a clock with the step.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    time: Res<Time<Fixed>>,
    mut query: Query<(&mut Locomotion, &mut LinearVelocity), With<Player>>,
) {
    let sample = bindings.sample(&keyboard);
    let now = time.elapsed_secs();

    for (mut locomotion, mut velocity) in &mut query {
        // Collisions since the last step decide whether there is still a rise to cut
        locomotion.absorb_body_velocity(velocity.0);

        // A release can cut a rising jump immediately
        if locomotion.feed_input(sample, now) {
            velocity.y = locomotion.vertical_velocity();
            debug!("Jump cut: vertical velocity now {:.2}", velocity.y);
        }
    }
}
