//! Condition tokens granted to entities by external systems (upgrades,
//! veterancy, disguise, ...). Traits whose policy names a required condition
//! are enabled and disabled from these grants.

use std::collections::BTreeMap;

use bevy_ecs::component::Component;

/// Condition tokens currently granted to an entity, with grant counts.
///
/// A token stays granted until every grant has been revoked.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantedConditions {
    grants: BTreeMap<String, u32>,
}

impl GrantedConditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&mut self, token: impl Into<String>) {
        *self.grants.entry(token.into()).or_insert(0) += 1;
    }

    /// Revoke one grant of `token`. Returns false if it was not granted.
    pub fn revoke(&mut self, token: &str) -> bool {
        let Some(count) = self.grants.get_mut(token) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.grants.remove(token);
        }
        true
    }

    pub fn is_granted(&self, token: &str) -> bool {
        self.grants.contains_key(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_granted_until_every_grant_revoked() {
        let mut conditions = GrantedConditions::new();
        conditions.grant("veteran");
        conditions.grant("veteran");
        assert!(conditions.is_granted("veteran"));

        assert!(conditions.revoke("veteran"));
        assert!(conditions.is_granted("veteran"));
        assert!(conditions.revoke("veteran"));
        assert!(!conditions.is_granted("veteran"));
    }

    #[test]
    fn revoking_unknown_token_is_noop() {
        let mut conditions = GrantedConditions::new();
        assert!(!conditions.revoke("cloaked"));
        assert_eq!(conditions, GrantedConditions::new());
    }
}
