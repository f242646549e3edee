use bevy_ecs::resource::Resource;

use crate::model::{BountyAward, EventKind, EventParticipant};

/// An event record stamped with the tick it was applied on.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EcsEvent {
    pub id: u64,
    pub kind: EventKind,
    pub tick: u64,
    pub description: String,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

/// Accumulates events, participants, and bounty awards between flushes.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<EcsEvent>,
    pub participants: Vec<EventParticipant>,
    pub awards: Vec<BountyAward>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.participants.clear();
        self.awards.clear();
    }

    /// Total cash credited to the owner with sim id `owner`.
    pub fn total_awarded_to(&self, owner: u64) -> i64 {
        self.awards
            .iter()
            .filter(|a| a.attacker_owner == owner)
            .map(|a| a.credited)
            .sum()
    }
}
