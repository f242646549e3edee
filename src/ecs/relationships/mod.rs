pub mod diplomacy;
pub mod structural;

pub use diplomacy::Diplomacy;
pub use structural::{CarriedBy, OwnedBy, OwnedUnits, Passengers};
