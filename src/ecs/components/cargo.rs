use bevy_ecs::component::Component;

/// Optional transport capability. The passenger list itself lives in the
/// [`Passengers`](crate::ecs::relationships::Passengers) relationship target.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cargo {
    /// Maximum number of passengers.
    pub capacity: usize,
}
