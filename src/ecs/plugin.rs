use bevy_app::{App, Plugin};

use super::systems::bounty::BountyPlugin;
use super::systems::cargo::CargoPlugin;
use super::systems::effects::EffectsPlugin;

/// Aggregate plugin that installs every simulation domain plugin.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BountyPlugin, CargoPlugin, EffectsPlugin));
    }
}
