use bevy_app::App;
use bevy_ecs::message::Messages;

use crate::ecs::commands::SimCommand;
use crate::ecs::schedule::SimTick;

/// Run `n` simulation ticks.
pub fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(SimTick);
    }
}

/// Queue a command as if a domain system had written it this tick.
pub fn queue(app: &mut App, cmd: SimCommand) {
    app.world_mut()
        .resource_mut::<Messages<SimCommand>>()
        .write(cmd);
}
