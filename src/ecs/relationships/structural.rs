use std::ops::Deref;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

// ---------------------------------------------------------------------------
// OwnedBy: unit -> player
// ---------------------------------------------------------------------------

#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = OwnedUnits)]
pub struct OwnedBy(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = OwnedBy)]
pub struct OwnedUnits(Vec<Entity>);

impl Deref for OwnedUnits {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// CarriedBy: passenger -> transport
// ---------------------------------------------------------------------------

/// A unit loaded into a transport's cargo.
///
/// Only the cargo applicator inserts or removes this; see `LoadPassenger`.
#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = Passengers)]
pub struct CarriedBy(pub Entity);

/// Passengers of a transport, in load order.
#[derive(Component, Default, Debug)]
#[relationship_target(relationship = CarriedBy)]
pub struct Passengers(Vec<Entity>);

impl Deref for Passengers {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
