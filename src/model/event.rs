use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventKind {
    Killed,
    PassengerLoaded,
    PassengerUnloaded,
    BountyEnabled,
    BountyDisabled,
    Custom(String),
}

string_enum_open!(EventKind, "event kind", {
    Killed => "killed",
    PassengerLoaded => "passenger_loaded",
    PassengerUnloaded => "passenger_unloaded",
    BountyEnabled => "bounty_enabled",
    BountyDisabled => "bounty_disabled",
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ParticipantRole {
    Subject,
    Victim,
    Attacker,
    Transport,
    Passenger,
    Custom(String),
}

string_enum_open!(ParticipantRole, "participant role", {
    Subject => "subject",
    Victim => "victim",
    Attacker => "attacker",
    Transport => "transport",
    Passenger => "passenger",
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventParticipant {
    pub event_id: u64,
    pub entity_id: u64,
    pub role: ParticipantRole,
}
