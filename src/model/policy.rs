//! Load-time bounty configuration.
//!
//! A [`BountyPolicy`] belongs to a unit type and is shared read-only by every
//! instance of that type. [`PolicyRules`] maps unit type names to policies and
//! is the unit of loading: every policy is validated before it is handed out.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::condition::ConditionExpr;
use super::stance::Stance;

/// Errors raised while loading or validating bounty configuration.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("failed to read bounty rules: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse bounty rules: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bounty percentage must be non-negative, got {0}")]
    NegativePercentage(i32),
    #[error("bounty policy must accept at least one stance")]
    EmptyStances,
    #[error("invalid condition expression: {0:?}")]
    InvalidCondition(String),
    #[error("policy for {unit_type:?}: {source}")]
    InvalidPolicy {
        unit_type: String,
        #[source]
        source: Box<PolicyError>,
    },
}

/// When killed, a unit with this policy pays the attacking owner a share of its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BountyPolicy {
    /// Percentage of the unit's sell value that is paid out.
    pub percentage: i32,
    /// Stances the attacking owner must hold toward the victim's owner.
    pub valid_stances: BTreeSet<Stance>,
    /// Whether to announce the bounty with floating text.
    pub show_bounty: bool,
    /// Death types that qualify. Empty accepts every death type.
    pub death_types: BTreeSet<String>,
    /// Condition that must hold for the bounty to be active.
    pub requires_condition: Option<ConditionExpr>,
}

impl Default for BountyPolicy {
    fn default() -> Self {
        Self {
            percentage: 10,
            valid_stances: BTreeSet::from([Stance::Neutral, Stance::Enemy]),
            show_bounty: true,
            death_types: BTreeSet::new(),
            requires_condition: None,
        }
    }
}

impl BountyPolicy {
    /// Parse and validate a single policy.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.percentage < 0 {
            return Err(PolicyError::NegativePercentage(self.percentage));
        }
        if self.valid_stances.is_empty() {
            return Err(PolicyError::EmptyStances);
        }
        Ok(())
    }

    pub fn accepts_stance(&self, stance: Stance) -> bool {
        self.valid_stances.contains(&stance)
    }

    /// Empty `death_types` accepts anything; otherwise the sets must overlap.
    pub fn accepts_death_types(&self, death_types: &BTreeSet<String>) -> bool {
        self.death_types.is_empty() || !self.death_types.is_disjoint(death_types)
    }
}

/// Validated bounty policies keyed by unit type name.
#[derive(Debug, Clone, Default)]
pub struct PolicyRules {
    policies: BTreeMap<String, Arc<BountyPolicy>>,
}

impl PolicyRules {
    /// Parse a JSON object of `{ "unit_type": { ...policy... } }`.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let raw: BTreeMap<String, BountyPolicy> = serde_json::from_str(json)?;
        let mut policies = BTreeMap::new();
        for (unit_type, policy) in raw {
            if let Err(e) = policy.validate() {
                return Err(PolicyError::InvalidPolicy {
                    unit_type,
                    source: Box::new(e),
                });
            }
            policies.insert(unit_type, Arc::new(policy));
        }
        Ok(Self { policies })
    }

    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Shared handle to the policy for `unit_type`, if it gives a bounty.
    pub fn get(&self, unit_type: &str) -> Option<Arc<BountyPolicy>> {
        self.policies.get(unit_type).cloned()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let policy = BountyPolicy::from_json("{}").unwrap();
        assert_eq!(policy, BountyPolicy::default());
        assert_eq!(policy.percentage, 10);
        assert!(policy.accepts_stance(Stance::Enemy));
        assert!(policy.accepts_stance(Stance::Neutral));
        assert!(!policy.accepts_stance(Stance::Ally));
        assert!(policy.show_bounty);
        assert!(policy.requires_condition.is_none());
    }

    #[test]
    fn full_policy_parses() {
        let json = r#"{
            "percentage": 25,
            "valid_stances": ["enemy"],
            "show_bounty": false,
            "death_types": ["explosion", "fire"],
            "requires_condition": "!disguised"
        }"#;
        let policy = BountyPolicy::from_json(json).unwrap();
        assert_eq!(policy.percentage, 25);
        assert_eq!(policy.valid_stances, BTreeSet::from([Stance::Enemy]));
        assert!(!policy.show_bounty);
        assert_eq!(policy.death_types.len(), 2);
        assert_eq!(
            policy.requires_condition,
            Some(ConditionExpr::parse("!disguised").unwrap())
        );
    }

    #[test]
    fn negative_percentage_rejected() {
        let err = BountyPolicy::from_json(r#"{"percentage": -5}"#).unwrap_err();
        assert!(matches!(err, PolicyError::NegativePercentage(-5)));
    }

    #[test]
    fn empty_stances_rejected() {
        let err = BountyPolicy::from_json(r#"{"valid_stances": []}"#).unwrap_err();
        assert!(matches!(err, PolicyError::EmptyStances));
    }

    #[test]
    fn unknown_field_rejected() {
        let err = BountyPolicy::from_json(r#"{"percent": 5}"#).unwrap_err();
        assert!(matches!(err, PolicyError::Parse(_)));
    }

    #[test]
    fn empty_death_types_accept_everything() {
        let policy = BountyPolicy::default();
        assert!(policy.accepts_death_types(&BTreeSet::new()));
        assert!(policy.accepts_death_types(&BTreeSet::from(["fire".to_string()])));
    }

    #[test]
    fn death_types_must_overlap() {
        let policy = BountyPolicy {
            death_types: BTreeSet::from(["explosion".to_string()]),
            ..BountyPolicy::default()
        };
        assert!(!policy.accepts_death_types(&BTreeSet::from(["fire".to_string()])));
        assert!(!policy.accepts_death_types(&BTreeSet::new()));
        assert!(policy.accepts_death_types(&BTreeSet::from([
            "fire".to_string(),
            "explosion".to_string(),
        ])));
    }

    #[test]
    fn rules_share_one_policy_per_type() {
        let rules = PolicyRules::from_json(
            r#"{ "apc": { "percentage": 20 }, "rifleman": {} }"#,
        )
        .unwrap();
        assert_eq!(rules.len(), 2);
        let a = rules.get("apc").unwrap();
        let b = rules.get("apc").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.percentage, 20);
        assert!(rules.get("harvester").is_none());
    }

    #[test]
    fn rules_report_offending_unit_type() {
        let err = PolicyRules::from_json(r#"{ "tank": { "percentage": -1 } }"#).unwrap_err();
        match err {
            PolicyError::InvalidPolicy { unit_type, source } => {
                assert_eq!(unit_type, "tank");
                assert!(matches!(*source, PolicyError::NegativePercentage(-1)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rules_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bounties.json");
        std::fs::write(&path, r#"{ "jeep": { "show_bounty": false } }"#).unwrap();
        let rules = PolicyRules::load(&path).unwrap();
        assert!(!rules.get("jeep").unwrap().show_bounty);

        let missing = PolicyRules::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, PolicyError::Io(_)));
    }
}
