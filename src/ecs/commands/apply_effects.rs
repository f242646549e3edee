use bevy_ecs::world::World;

use crate::ecs::components::FloatingText;
use crate::model::{Color, WorldPos};

pub(crate) fn apply_spawn_floating_text(
    world: &mut World,
    position: WorldPos,
    color: Color,
    text: &str,
    duration: u32,
) {
    if duration == 0 {
        return;
    }
    world.spawn(FloatingText {
        position,
        color,
        text: text.to_string(),
        remaining: duration,
    });
}
