pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod conditions;
pub mod events;
pub mod plugin;
pub mod relationships;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use app::{build_sim_app, build_sim_app_with_executor};
pub use clock::SimClock;
pub use commands::{SimCommand, SimCommandKind};
pub use components::{
    Cargo, CustomSellValue, FloatingText, GivesBounty, InWorld, Player, PlayerColor,
    PlayerResources, Position, SimEntity, Unit, Valued,
};
pub use conditions::GrantedConditions;
pub use events::SimReactiveEvent;
pub use plugin::SimPlugin;
pub use relationships::{CarriedBy, Diplomacy, OwnedBy, OwnedUnits, Passengers};
pub use resources::{BountyConfig, EcsIdGenerator, EventLog, RenderPlayer, SimEntityMap};
pub use schedule::{DomainSet, SimPhase, SimTick};
pub use spawn::{UnitSpec, spawn_player, spawn_unit};
pub use systems::valuation::{BountyValuator, percentage_of};
