use std::collections::BTreeSet;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

/// Reactive events emitted by the command applicator for cross-system reactions.
///
/// Each variant carries an `event_id` linking back to the EventLog entry that
/// caused it.
#[derive(Message, Clone, Debug)]
pub enum SimReactiveEvent {
    /// A unit died. Dispatched once per death to every reactor on the victim.
    EntityKilled {
        event_id: u64,
        victim: Entity,
        attacker: Option<Entity>,
        death_types: BTreeSet<String>,
    },
    PassengerLoaded {
        event_id: u64,
        transport: Entity,
        passenger: Entity,
    },
    PassengerUnloaded {
        event_id: u64,
        transport: Entity,
        passenger: Entity,
    },
}
