use bevy_ecs::component::Component;

/// Core identity component present on every ECS entity that maps to a simulation entity.
#[derive(Component, Debug, Clone)]
pub struct SimEntity {
    pub id: u64,
    pub name: String,
    /// Tick at which the entity died, if it has.
    pub end: Option<u64>,
}

impl SimEntity {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            end: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.end.is_none()
    }

    /// Whether the entity still counts as present during `tick`. Units that
    /// die during a tick are disposed of only when it ends.
    pub fn alive_at(&self, tick: u64) -> bool {
        self.end.is_none_or(|end| end >= tick)
    }
}

/// Marker for units (anything that can be owned, killed and transported).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Unit;

/// Present while an entity is part of the live world.
///
/// Passengers lose it while loaded into cargo.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct InWorld;
