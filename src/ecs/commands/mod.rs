pub mod applicator;
mod apply_bounty;
mod apply_cargo;
mod apply_effects;
mod apply_lifecycle;

use std::collections::BTreeSet;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::{Color, EventKind, ParticipantRole, WorldPos};

pub use applicator::apply_sim_commands;

/// A command describing an intended state change in the simulation.
///
/// Systems emit these via `MessageWriter<SimCommand>`. The centralized applicator
/// in `SimPhase::PostUpdate` processes them in write order: applies state
/// changes, records audit trail entries in `EventLog`, and emits
/// `SimReactiveEvent` messages. A command written during `SimPhase::Reactions`
/// is therefore applied at the next tick's safe point.
#[derive(Message, Clone, Debug)]
pub struct SimCommand {
    /// The state change to apply.
    pub kind: SimCommandKind,
    /// Human-readable description for the EventLog.
    pub description: String,
    /// What EventKind to record in the EventLog (ignored for bookkeeping commands).
    pub event_kind: EventKind,
    /// Entities involved and their roles.
    pub participants: Vec<(Entity, ParticipantRole)>,
    /// Structured metadata for the event's data field.
    pub event_data: serde_json::Value,
    /// If true, no event entry is recorded (only effects).
    bookkeeping: bool,
}

impl SimCommand {
    /// Create a command that records a full event in the log.
    pub fn new(
        kind: SimCommandKind,
        event_kind: EventKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            event_kind,
            participants: Vec::new(),
            event_data: serde_json::Value::Null,
            bookkeeping: false,
        }
    }

    /// Create a bookkeeping-only command (no event entry, only effects).
    pub fn bookkeeping(kind: SimCommandKind) -> Self {
        Self {
            kind,
            description: String::new(),
            event_kind: EventKind::Custom("bookkeeping".to_string()),
            participants: Vec::new(),
            event_data: serde_json::Value::Null,
            bookkeeping: true,
        }
    }

    /// Kill notification from combat: `victim` died, optionally at the hands
    /// of `attacker`, from damage tagged with `death_types`.
    pub fn kill<S: Into<String>>(
        victim: Entity,
        attacker: Option<Entity>,
        death_types: impl IntoIterator<Item = S>,
    ) -> Self {
        let death_types: BTreeSet<String> = death_types.into_iter().map(Into::into).collect();
        let data = serde_json::json!({ "death_types": &death_types });
        let mut cmd = Self::new(
            SimCommandKind::KillEntity {
                victim,
                attacker,
                death_types,
            },
            EventKind::Killed,
            "unit killed",
        )
        .with_participant(victim, ParticipantRole::Victim)
        .with_data(data);
        if let Some(attacker) = attacker {
            cmd = cmd.with_participant(attacker, ParticipantRole::Attacker);
        }
        cmd
    }

    pub fn load_passenger(transport: Entity, passenger: Entity) -> Self {
        Self::new(
            SimCommandKind::LoadPassenger {
                transport,
                passenger,
            },
            EventKind::PassengerLoaded,
            "passenger loaded",
        )
        .with_participant(transport, ParticipantRole::Transport)
        .with_participant(passenger, ParticipantRole::Passenger)
    }

    pub fn unload_passenger(transport: Entity, passenger: Entity) -> Self {
        Self::new(
            SimCommandKind::UnloadPassenger {
                transport,
                passenger,
            },
            EventKind::PassengerUnloaded,
            "passenger unloaded",
        )
        .with_participant(transport, ParticipantRole::Transport)
        .with_participant(passenger, ParticipantRole::Passenger)
    }

    /// External condition signal toggling a unit's bounty.
    pub fn set_bounty_enabled(entity: Entity, enabled: bool) -> Self {
        let (kind, description) = if enabled {
            (EventKind::BountyEnabled, "bounty enabled")
        } else {
            (EventKind::BountyDisabled, "bounty disabled")
        };
        Self::new(
            SimCommandKind::SetBountyEnabled { entity, enabled },
            kind,
            description,
        )
        .with_participant(entity, ParticipantRole::Subject)
    }

    /// Whether this command is bookkeeping-only (no event entry).
    pub fn is_bookkeeping(&self) -> bool {
        self.bookkeeping
    }

    /// Add a participant.
    pub fn with_participant(mut self, entity: Entity, role: ParticipantRole) -> Self {
        self.participants.push((entity, role));
        self
    }

    /// Set the event data.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.event_data = data;
        self
    }
}

/// All possible state-change intents.
#[derive(Clone, Debug)]
pub enum SimCommandKind {
    // -- Lifecycle --
    KillEntity {
        victim: Entity,
        attacker: Option<Entity>,
        death_types: BTreeSet<String>,
    },

    // -- Cargo --
    LoadPassenger {
        transport: Entity,
        passenger: Entity,
    },
    UnloadPassenger {
        transport: Entity,
        passenger: Entity,
    },

    // -- Bounty --
    SetBountyEnabled {
        entity: Entity,
        enabled: bool,
    },

    // -- Effects --
    SpawnFloatingText {
        position: WorldPos,
        color: Color,
        text: String,
        duration: u32,
    },
}
