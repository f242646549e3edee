use serde::{Deserialize, Serialize};

/// Audit record of one credited bounty. Entity references are sim ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BountyAward {
    /// Id of the kill event that paid out.
    pub event_id: u64,
    pub tick: u64,
    pub victim: u64,
    pub attacker_owner: u64,
    /// Amount added to the attacker owner's cash.
    pub credited: i64,
    /// Amount announced, including transported passengers.
    pub displayed: i64,
    /// Whether a floating text announcement was requested.
    pub shown: bool,
}
