pub mod bounty;
pub mod cargo;
pub mod common;
pub mod effects;
pub mod player;
pub mod unit;

pub use bounty::GivesBounty;
pub use cargo::Cargo;
pub use common::{InWorld, SimEntity, Unit};
pub use effects::FloatingText;
pub use player::{Player, PlayerColor, PlayerResources};
pub use unit::{CustomSellValue, Position, Valued};
