use std::collections::BTreeSet;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::SimEntity;
use crate::ecs::events::SimReactiveEvent;
use crate::ecs::relationships::{CarriedBy, Passengers};
use crate::model::ParticipantRole;

use super::applicator::ApplyCtx;

/// Kill a unit: set `SimEntity.end` to the current tick and dispatch
/// `EntityKilled`. Idempotent: killing an already-dead entity is a no-op.
///
/// A unit dying inside a live transport is taken out of its cargo at once.
/// Passengers of a dying transport die with it, credited to the same
/// attacker under the same event. They stay attached until the end of the
/// tick so the transport's displayed bounty still counts them.
pub(crate) fn apply_kill_entity(
    ctx: &mut ApplyCtx,
    world: &mut World,
    event_id: u64,
    victim: Entity,
    attacker: Option<Entity>,
    death_types: &BTreeSet<String>,
) {
    let Some(mut sim_entity) = world.get_mut::<SimEntity>(victim) else {
        tracing::warn!("KillEntity for unknown entity {victim:?}");
        return;
    };

    if sim_entity.end.is_some() {
        return;
    }

    sim_entity.end = Some(ctx.tick);

    let carrier = world.get::<CarriedBy>(victim).map(|c| c.0);
    let carrier_alive = carrier
        .and_then(|c| world.get::<SimEntity>(c))
        .is_some_and(SimEntity::is_alive);
    if carrier_alive {
        world.entity_mut(victim).remove::<CarriedBy>();
    }

    ctx.emit(SimReactiveEvent::EntityKilled {
        event_id,
        victim,
        attacker,
        death_types: death_types.clone(),
    });

    let passengers: Vec<Entity> = world
        .get::<Passengers>(victim)
        .map(|p| p.to_vec())
        .unwrap_or_default();
    for passenger in passengers {
        let alive = world
            .get::<SimEntity>(passenger)
            .is_some_and(SimEntity::is_alive);
        if !alive {
            continue;
        }
        ctx.record_participant(event_id, passenger, ParticipantRole::Victim);
        apply_kill_entity(ctx, world, event_id, passenger, attacker, death_types);
    }
}
