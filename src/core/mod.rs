pub mod config;
pub mod error;
pub mod types;

pub use config::BuffwatchConfig;
pub use types::{ActionKind, EntityId, Vec2};
