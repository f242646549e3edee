#[macro_use]
mod macros;

pub mod award;
pub mod color;
pub mod condition;
pub mod event;
pub mod policy;
pub mod position;
pub mod stance;

pub use award::BountyAward;
pub use color::Color;
pub use condition::ConditionExpr;
pub use event::{EventKind, EventParticipant, ParticipantRole};
pub use policy::{BountyPolicy, PolicyError, PolicyRules};
pub use position::WorldPos;
pub use stance::Stance;
