//! Buffwatch - frame-driven buff upkeep engine
//!
//! Watches the player's buff state and the nearby monster population, and
//! decides once per rendered frame whether to re-apply Blood Rage or Steel
//! Skin. The host application owns the live game object model; this crate
//! only sees it through the narrow ports in [`host`].

pub mod census;
pub mod core;
pub mod engine;
pub mod host;
