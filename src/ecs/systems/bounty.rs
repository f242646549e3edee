//! Bounty system.
//!
//! Two setup systems (PreUpdate):
//! 1. `initialize_bounties`: cache the cargo link of newly added bounties
//! 2. `sync_bounty_conditions`: enable/disable bounties from granted conditions
//!
//! One reaction system (Reactions phase):
//! 3. `grant_bounties`: pay the attacker's owner when a bounty-bearing unit is killed

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::{Added, Changed, Has, Or, With};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::ecs::clock::SimClock;
use crate::ecs::commands::{SimCommand, SimCommandKind};
use crate::ecs::components::effects::format_cash_tick;
use crate::ecs::components::{
    Cargo, GivesBounty, InWorld, Player, PlayerColor, PlayerResources, Position, SimEntity,
};
use crate::ecs::conditions::GrantedConditions;
use crate::ecs::events::SimReactiveEvent;
use crate::ecs::relationships::{Diplomacy, OwnedBy};
use crate::ecs::resources::{BountyConfig, EventLog, RenderPlayer, SimEntityMap};
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::ecs::systems::valuation::BountyValuator;
use crate::model::{BountyAward, Color, WorldPos};

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub struct BountyPlugin;

impl Plugin for BountyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            (initialize_bounties, sync_bounty_conditions)
                .chain()
                .in_set(SimPhase::PreUpdate),
        );
        app.add_systems(SimTick, grant_bounties.in_set(SimPhase::Reactions));
    }
}

// ---------------------------------------------------------------------------
// Setup systems
// ---------------------------------------------------------------------------

fn initialize_bounties(
    mut added: Query<(Entity, &mut GivesBounty, Has<Cargo>), Added<GivesBounty>>,
) {
    for (entity, mut bounty, has_cargo) in added.iter_mut() {
        bounty.initialize(entity, has_cargo);
    }
}

/// Recompute `enabled` for bounties whose policy requires a condition.
///
/// Bounties without a requirement are left to `SetBountyEnabled`.
#[allow(clippy::type_complexity)]
fn sync_bounty_conditions(
    mut bounties: Query<
        (&mut GivesBounty, Option<&GrantedConditions>),
        Or<(Added<GivesBounty>, Changed<GrantedConditions>)>,
    >,
) {
    for (mut bounty, conditions) in bounties.iter_mut() {
        let Some(expr) = bounty.policy().requires_condition.clone() else {
            continue;
        };
        let granted = conditions.is_some_and(|c| c.is_granted(expr.token()));
        let enabled = expr.is_satisfied(granted);
        if bounty.is_enabled() != enabled {
            bounty.set_enabled(enabled);
        }
    }
}

// ---------------------------------------------------------------------------
// Reaction system: kill notifications
// ---------------------------------------------------------------------------

/// React to each `EntityKilled`: filter eligibility, announce the displayed
/// bounty at the next safe point, and credit the base bounty immediately.
///
/// Every skip is silent; kills that do not qualify are the common case.
#[allow(clippy::too_many_arguments)]
fn grant_bounties(
    mut events: MessageReader<SimReactiveEvent>,
    mut commands: MessageWriter<SimCommand>,
    victims: Query<(&GivesBounty, &OwnedBy, Option<&Position>, Has<InWorld>)>,
    attackers: Query<(&SimEntity, Option<&OwnedBy>)>,
    mut players: Query<(&mut PlayerResources, Option<&PlayerColor>), With<Player>>,
    valuator: BountyValuator,
    diplomacy: Res<Diplomacy>,
    render_player: Res<RenderPlayer>,
    config: Res<BountyConfig>,
    clock: Res<SimClock>,
    entity_map: Res<SimEntityMap>,
    mut event_log: ResMut<EventLog>,
) {
    for event in events.read() {
        let SimReactiveEvent::EntityKilled {
            event_id,
            victim,
            attacker,
            death_types,
        } = event
        else {
            continue;
        };

        let Ok((bounty, victim_owner, position, in_world)) = victims.get(*victim) else {
            continue;
        };

        let Some(attacker) = *attacker else {
            tracing::debug!(?victim, "no bounty: no attacker");
            continue;
        };
        let attacker_owner = match attackers.get(attacker) {
            Ok((sim, Some(owner))) if sim.alive_at(clock.tick) => owner.0,
            _ => {
                tracing::debug!(?victim, ?attacker, "no bounty: attacker gone");
                continue;
            }
        };
        if !bounty.is_enabled() {
            tracing::debug!(?victim, "no bounty: disabled");
            continue;
        }

        let policy = bounty.policy();
        let stance = diplomacy.stance(attacker_owner, victim_owner.0);
        if !policy.accepts_stance(stance) {
            tracing::debug!(?victim, %stance, "no bounty: stance not eligible");
            continue;
        }
        if !policy.accepts_death_types(death_types) {
            tracing::debug!(?victim, ?death_types, "no bounty: death type not eligible");
            continue;
        }

        let displayed = valuator.display_value(*victim);
        let shown = policy.show_bounty
            && in_world
            && displayed != 0
            && diplomacy.is_allied_with(attacker_owner, render_player.0);

        let Ok((mut resources, color)) = players.get_mut(attacker_owner) else {
            tracing::warn!(?attacker_owner, "bounty owner has no resources ledger");
            continue;
        };

        if shown {
            commands.write(SimCommand::bookkeeping(SimCommandKind::SpawnFloatingText {
                position: position.map_or(WorldPos::default(), |p| p.0),
                color: color.map_or(Color::WHITE, |c| c.0),
                text: format_cash_tick(displayed),
                duration: config.floating_text_duration,
            }));
        }

        let credited = valuator.reward_value(*victim);
        resources.change_cash(credited);

        let award = BountyAward {
            event_id: *event_id,
            tick: clock.tick,
            victim: entity_map.get_sim(*victim).unwrap_or(0),
            attacker_owner: entity_map.get_sim(attacker_owner).unwrap_or(0),
            credited,
            displayed,
            shown,
        };
        tracing::debug!(?award, "bounty granted");
        event_log.awards.push(award);
    }
}
