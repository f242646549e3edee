#![allow(dead_code)]

use std::sync::Arc;

use bevy_app::App;
use bevy_ecs::entity::Entity;

use bounty_sim::ecs::test_helpers::{queue, tick};
use bounty_sim::ecs::*;
use bounty_sim::model::{BountyPolicy, Color, Stance};

/// Four owners around `red`, who is also the render player:
/// `blue` is hostile, `green` neutral, `teal` allied.
pub struct Sides {
    pub red: Entity,
    pub blue: Entity,
    pub green: Entity,
    pub teal: Entity,
}

pub fn build_test_app() -> (App, Sides) {
    let mut app = build_sim_app();
    app.add_plugins(SimPlugin);

    let world = app.world_mut();
    let red = spawn_player(world, "Red", Color::rgb(220, 40, 40), 0);
    let blue = spawn_player(world, "Blue", Color::rgb(40, 80, 220), 0);
    let green = spawn_player(world, "Green", Color::rgb(40, 200, 60), 0);
    let teal = spawn_player(world, "Teal", Color::rgb(40, 200, 200), 0);

    let mut diplomacy = world.resource_mut::<Diplomacy>();
    diplomacy.set_mutual(red, blue, Stance::Enemy);
    diplomacy.set_mutual(red, green, Stance::Neutral);
    diplomacy.set_mutual(red, teal, Stance::Ally);
    world.resource_mut::<RenderPlayer>().0 = Some(red);

    (
        app,
        Sides {
            red,
            blue,
            green,
            teal,
        },
    )
}

pub fn policy(percentage: i32) -> Arc<BountyPolicy> {
    Arc::new(BountyPolicy {
        percentage,
        ..BountyPolicy::default()
    })
}

/// A unit worth `cost` carrying the default 10% bounty.
pub fn unit(app: &mut App, owner: Entity, cost: i32) -> Entity {
    spawn_unit(
        app.world_mut(),
        owner,
        UnitSpec::new("light_tank", cost).with_bounty(policy(10)),
    )
}

/// A unit without any bounty, used as the attacker.
pub fn attacker(app: &mut App, owner: Entity) -> Entity {
    spawn_unit(app.world_mut(), owner, UnitSpec::new("rifleman", 100))
}

pub fn kill(app: &mut App, victim: Entity, killer: Option<Entity>, death_types: &[&str]) {
    queue(app, SimCommand::kill(victim, killer, death_types.iter().copied()));
    tick(app, 1);
}

pub fn cash(app: &App, player: Entity) -> i64 {
    app.world()
        .get::<PlayerResources>(player)
        .map_or(0, |r| r.cash)
}

pub fn floating_texts(app: &mut App) -> Vec<FloatingText> {
    let world = app.world_mut();
    let mut query = world.query::<&FloatingText>();
    query.iter(world).cloned().collect()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
