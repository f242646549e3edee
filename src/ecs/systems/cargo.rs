//! Cargo upkeep. Dead units are detached from their transport at the end of
//! the tick, after every reaction to their death has seen the cargo intact.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Commands, Query};

use crate::ecs::components::SimEntity;
use crate::ecs::relationships::CarriedBy;
use crate::ecs::schedule::{SimPhase, SimTick};

pub struct CargoPlugin;

impl Plugin for CargoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, release_dead_cargo.in_set(SimPhase::Last));
    }
}

fn release_dead_cargo(
    mut commands: Commands,
    carried: Query<(Entity, &SimEntity), With<CarriedBy>>,
) {
    for (entity, sim) in carried.iter() {
        if !sim.is_alive() {
            commands.entity(entity).remove::<CarriedBy>();
        }
    }
}
