use std::sync::Arc;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

use crate::model::BountyPolicy;

/// Per-unit bounty behavior: when this unit is killed, the attacker's owner
/// may be paid a share of its value.
///
/// The policy is shared by every unit of the same type. `enabled` is driven
/// either by [`set_enabled`](Self::set_enabled) or, when the policy names a
/// required condition, by the unit's granted conditions.
#[derive(Component, Debug, Clone)]
pub struct GivesBounty {
    policy: Arc<BountyPolicy>,
    enabled: bool,
    cargo: Option<Entity>,
    initialized: bool,
}

impl GivesBounty {
    pub fn new(policy: Arc<BountyPolicy>) -> Self {
        // With a requirement, start from "no conditions granted".
        let enabled = policy
            .requires_condition
            .as_ref()
            .is_none_or(|expr| expr.is_satisfied(false));
        Self {
            policy,
            enabled,
            cargo: None,
            initialized: false,
        }
    }

    pub fn policy(&self) -> &BountyPolicy {
        &self.policy
    }

    pub fn shared_policy(&self) -> Arc<BountyPolicy> {
        Arc::clone(&self.policy)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Cache the transport link. `has_cargo` is whether `entity` carries the
    /// cargo capability; without it the unit never cascades.
    pub fn initialize(&mut self, entity: Entity, has_cargo: bool) {
        self.cargo = has_cargo.then_some(entity);
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Entity holding the cargo capability, if resolved.
    pub fn cargo(&self) -> Option<Entity> {
        self.cargo
    }
}
