use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::clock::SimClock;
use crate::ecs::events::SimReactiveEvent;
use crate::ecs::resources::{EcsEvent, EcsIdGenerator, EventLog, SimEntityMap};
use crate::model::{EventParticipant, ParticipantRole};

use super::{SimCommand, SimCommandKind};
use super::apply_bounty;
use super::apply_cargo;
use super::apply_effects;
use super::apply_lifecycle;

/// Context passed to all `apply_*` sub-functions, providing mutable access
/// to the resources they need without requiring direct World access.
pub(crate) struct ApplyCtx {
    pub event_log: EventLog,
    pub id_gen: EcsIdGenerator,
    pub entity_map: SimEntityMap,
    pub tick: u64,
    pub reactive_events: Vec<SimReactiveEvent>,
}

impl ApplyCtx {
    /// Record an event entry in the log for a non-bookkeeping command.
    /// Returns the event_id (0 for bookkeeping commands that skip recording).
    pub(crate) fn record_event(&mut self, cmd: &SimCommand) -> u64 {
        if cmd.is_bookkeeping() {
            return 0;
        }

        let event_id = self.id_gen.0.next_id();

        self.event_log.events.push(EcsEvent {
            id: event_id,
            kind: cmd.event_kind.clone(),
            tick: self.tick,
            description: cmd.description.clone(),
            data: cmd.event_data.clone(),
        });

        for (entity, role) in &cmd.participants {
            if let Some(sim_id) = self.entity_map.get_sim(*entity) {
                self.event_log.participants.push(EventParticipant {
                    event_id,
                    entity_id: sim_id,
                    role: role.clone(),
                });
            }
        }

        event_id
    }

    /// Add a participant row to an already recorded event.
    pub(crate) fn record_participant(&mut self, event_id: u64, entity: Entity, role: ParticipantRole) {
        if event_id == 0 {
            return;
        }
        if let Some(sim_id) = self.entity_map.get_sim(entity) {
            self.event_log.participants.push(EventParticipant {
                event_id,
                entity_id: sim_id,
                role,
            });
        }
    }

    pub(crate) fn sim_id(&self, entity: Entity) -> u64 {
        self.entity_map.get_sim(entity).unwrap_or(0)
    }

    /// Queue a reactive event for emission after all commands are processed.
    pub(crate) fn emit(&mut self, event: SimReactiveEvent) {
        self.reactive_events.push(event);
    }
}

/// Exclusive system that drains all pending `SimCommand` messages in write
/// order, applies state changes, records the audit trail, and emits
/// `SimReactiveEvent` messages.
///
/// Runs in `SimPhase::PostUpdate`.
pub fn apply_sim_commands(world: &mut World) {
    let commands: Vec<SimCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<SimCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let tick = world.get_resource::<SimClock>().map_or(0, |clock| clock.tick);
    let mut ctx = ApplyCtx {
        event_log: world.remove_resource::<EventLog>().unwrap_or_default(),
        id_gen: world.remove_resource::<EcsIdGenerator>().unwrap_or_default(),
        entity_map: world.remove_resource::<SimEntityMap>().unwrap_or_default(),
        tick,
        reactive_events: Vec::new(),
    };

    for cmd in &commands {
        let event_id = ctx.record_event(cmd);

        match &cmd.kind {
            SimCommandKind::KillEntity {
                victim,
                attacker,
                death_types,
            } => {
                apply_lifecycle::apply_kill_entity(
                    &mut ctx,
                    world,
                    event_id,
                    *victim,
                    *attacker,
                    death_types,
                );
            }

            SimCommandKind::LoadPassenger {
                transport,
                passenger,
            } => {
                apply_cargo::apply_load_passenger(&mut ctx, world, event_id, *transport, *passenger);
            }
            SimCommandKind::UnloadPassenger {
                transport,
                passenger,
            } => {
                apply_cargo::apply_unload_passenger(
                    &mut ctx, world, event_id, *transport, *passenger,
                );
            }

            SimCommandKind::SetBountyEnabled { entity, enabled } => {
                apply_bounty::apply_set_bounty_enabled(world, *entity, *enabled);
            }

            SimCommandKind::SpawnFloatingText {
                position,
                color,
                text,
                duration,
            } => {
                apply_effects::apply_spawn_floating_text(world, *position, *color, text, *duration);
            }
        }
    }

    let reactive_events = std::mem::take(&mut ctx.reactive_events);
    if let Some(mut messages) = world.get_resource_mut::<Messages<SimReactiveEvent>>() {
        messages.write_batch(reactive_events);
    }

    // Put resources back
    world.insert_resource(ctx.event_log);
    world.insert_resource(ctx.id_gen);
    world.insert_resource(ctx.entity_map);
}
