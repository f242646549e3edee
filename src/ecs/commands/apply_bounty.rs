use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::GivesBounty;

/// Toggle a unit's bounty. Units without one are ignored.
pub(crate) fn apply_set_bounty_enabled(world: &mut World, entity: Entity, enabled: bool) {
    if let Some(mut bounty) = world.get_mut::<GivesBounty>(entity) {
        bounty.set_enabled(enabled);
    }
}
