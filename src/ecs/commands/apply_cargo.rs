use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{Cargo, InWorld, SimEntity};
use crate::ecs::events::SimReactiveEvent;
use crate::ecs::relationships::{CarriedBy, Passengers};

use super::applicator::ApplyCtx;

/// Whether `candidate` is `transport` or one of the transports carrying it.
fn carries_transitively(world: &World, candidate: Entity, transport: Entity) -> bool {
    let mut current = Some(transport);
    // Bounded by the number of entities; a well-formed chain ends at the root.
    let mut steps = 0usize;
    while let Some(entity) = current {
        if entity == candidate {
            return true;
        }
        steps += 1;
        if steps > world.entities().len() as usize {
            return true;
        }
        current = world.get::<CarriedBy>(entity).map(|c| c.0);
    }
    false
}

fn is_dead(world: &World, entity: Entity) -> bool {
    world
        .get::<SimEntity>(entity)
        .is_some_and(|sim| !sim.is_alive())
}

/// Load `passenger` into `transport`'s cargo and take it out of the live world.
///
/// Refused when either side is dead, the transport has no cargo or is full,
/// or the load would make a unit contain itself. A passenger already carried
/// elsewhere must be unloaded first.
pub(crate) fn apply_load_passenger(
    ctx: &mut ApplyCtx,
    world: &mut World,
    event_id: u64,
    transport: Entity,
    passenger: Entity,
) {
    let Some(cargo) = world.get::<Cargo>(transport).copied() else {
        tracing::warn!("LoadPassenger into {transport:?}, which has no cargo");
        return;
    };
    if world.get_entity(passenger).is_err() {
        tracing::warn!("LoadPassenger of unknown entity {passenger:?}");
        return;
    }
    if is_dead(world, transport) || is_dead(world, passenger) {
        tracing::warn!("LoadPassenger of {passenger:?} into {transport:?} involves a dead unit");
        return;
    }
    if let Some(carrier) = world.get::<CarriedBy>(passenger) {
        tracing::warn!(
            "LoadPassenger of {passenger:?}, already carried by {:?}",
            carrier.0
        );
        return;
    }
    let loaded = world.get::<Passengers>(transport).map_or(0, |p| p.len());
    if loaded >= cargo.capacity {
        tracing::warn!("LoadPassenger into full transport {transport:?} ({loaded}/{})", cargo.capacity);
        return;
    }
    if carries_transitively(world, passenger, transport) {
        tracing::warn!("LoadPassenger of {passenger:?} into {transport:?} would nest it in itself");
        return;
    }

    world
        .entity_mut(passenger)
        .insert(CarriedBy(transport))
        .remove::<InWorld>();

    tracing::debug!(
        transport = ctx.sim_id(transport),
        passenger = ctx.sim_id(passenger),
        "passenger loaded"
    );
    ctx.emit(SimReactiveEvent::PassengerLoaded {
        event_id,
        transport,
        passenger,
    });
}

/// Unload `passenger` from `transport` back into the live world.
/// No-op if it is not a live passenger of that transport.
pub(crate) fn apply_unload_passenger(
    ctx: &mut ApplyCtx,
    world: &mut World,
    event_id: u64,
    transport: Entity,
    passenger: Entity,
) {
    let carried_by_transport = world
        .get::<CarriedBy>(passenger)
        .is_some_and(|c| c.0 == transport);
    if !carried_by_transport || is_dead(world, passenger) {
        return;
    }

    world
        .entity_mut(passenger)
        .remove::<CarriedBy>()
        .insert(InWorld);

    ctx.emit(SimReactiveEvent::PassengerUnloaded {
        event_id,
        transport,
        passenger,
    });
}
