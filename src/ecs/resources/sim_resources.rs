use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;
use serde::Deserialize;

use crate::IdGenerator;

/// Tunables for the bounty mechanic.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BountyConfig {
    /// Lifetime of a bounty announcement, in ticks.
    pub floating_text_duration: u32,
    /// Deepest cargo nesting walked when totalling displayed bounties.
    pub max_cargo_depth: usize,
}

impl Default for BountyConfig {
    fn default() -> Self {
        Self {
            floating_text_duration: 30,
            max_cargo_depth: 16,
        }
    }
}

/// The player whose view is being rendered. `None` is an observer.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderPlayer(pub Option<Entity>);

/// Global ID generator for simulation entities and events.
#[derive(Resource, Default)]
pub struct EcsIdGenerator(pub IdGenerator);
