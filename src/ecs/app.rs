use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::SimClock;
use super::commands::{SimCommand, apply_sim_commands};
use super::events::SimReactiveEvent;
use super::relationships::Diplomacy;
use super::resources::{BountyConfig, EcsIdGenerator, EventLog, RenderPlayer, SimEntityMap};
use super::schedule::{SimPhase, configure_sim_schedule};

/// Build a headless Bevy app with simulation clock, core resources,
/// message types, and the command applicator.
///
/// Uses the single-threaded executor so a run is reproducible tick for tick.
///
/// Manual tick control:
/// ```no_run
/// # use bounty_sim::ecs::{build_sim_app, SimTick};
/// let mut app = build_sim_app();
/// for _ in 0..600 {
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_sim_app() -> App {
    build_sim_app_with_executor(ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with a specific executor kind.
pub fn build_sim_app_with_executor(executor: ExecutorKind) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(SimClock::new());
    app.insert_resource(EventLog::new());
    app.insert_resource(EcsIdGenerator::default());
    app.insert_resource(SimEntityMap::new());
    app.insert_resource(Diplomacy::new());
    app.insert_resource(RenderPlayer::default());
    app.insert_resource(BountyConfig::default());

    // Register message types
    MessageRegistry::register_message::<SimCommand>(app.world_mut());
    MessageRegistry::register_message::<SimReactiveEvent>(app.world_mut());

    // Build schedule with message rotation + applicator
    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(apply_sim_commands.in_set(SimPhase::PostUpdate));
    app.add_schedule(schedule);
    app
}
