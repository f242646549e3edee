//! Transient world effects. Floating text rises one unit per tick and is
//! despawned when its lifetime runs out.

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Commands, Query};

use crate::ecs::components::FloatingText;
use crate::ecs::schedule::{DomainSet, SimTick};

const FLOATING_TEXT_RISE_PER_TICK: i32 = 1;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(SimTick, tick_floating_text.in_set(DomainSet::Effects));
    }
}

fn tick_floating_text(mut commands: Commands, mut texts: Query<(Entity, &mut FloatingText)>) {
    for (entity, mut text) in texts.iter_mut() {
        text.remaining = text.remaining.saturating_sub(1);
        if text.remaining == 0 {
            commands.entity(entity).despawn();
            continue;
        }
        text.position = text.position.raised(FLOATING_TEXT_RISE_PER_TICK);
    }
}
