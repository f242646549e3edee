pub mod ecs;
pub mod flush;
pub mod id;
pub mod model;

pub use id::IdGenerator;
pub use model::{
    BountyAward, BountyPolicy, Color, ConditionExpr, PolicyError, PolicyRules, Stance, WorldPos,
};
