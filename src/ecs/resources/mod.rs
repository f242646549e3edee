pub mod entity_map;
pub mod event_log;
pub mod sim_resources;

pub use entity_map::SimEntityMap;
pub use event_log::{EcsEvent, EventLog};
pub use sim_resources::{BountyConfig, EcsIdGenerator, RenderPlayer};
