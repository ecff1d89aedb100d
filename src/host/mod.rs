//! Host ports - the narrow seam to the game client
//!
//! The host application owns the live object model (buffs, skills, entities,
//! zones). This module defines the read-only queries the engine makes each
//! frame, the fire-and-forget effector that delivers a cast, and the wire
//! types crossing that seam.
//!
//! Queries distinguish three outcomes: a value, `Ok(None)` when the host
//! cannot produce the value this frame (the engine fails closed), and `Err`
//! for an unexpected fault (the engine logs it and abandons the phase).

use serde::{Deserialize, Serialize};

use crate::core::error::HostResult;
use crate::core::types::{EntityId, Vec2};

/// A buff currently on the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buff {
    pub name: String,
}

impl Buff {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One entry of the player's skill list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInfo {
    /// Display name, e.g. "BloodRage".
    pub name: String,
    /// Internal identifier, e.g. "blood_rage".
    pub internal_name: String,
    /// Whether the host reports the skill as currently usable.
    pub can_be_used: bool,
    /// 0-based slot index as reported by the host.
    pub slot_index: i32,
}

/// Zone classification for the player's current area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneFlags {
    pub is_town: bool,
    pub is_hideout: bool,
}

impl ZoneFlags {
    /// Towns and hideouts have no hostiles; evaluation is pointless there.
    pub fn is_safe_zone(&self) -> bool {
        self.is_town || self.is_hideout
    }
}

/// Virtual-key code bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding(pub u16);

/// State of one loaded entity, read back from the host at scan time.
#[derive(Debug, Clone, Copy)]
pub struct TrackedEntity {
    pub id: EntityId,
    pub is_monster: bool,
    pub is_valid: bool,
    pub is_alive: bool,
    pub is_hostile: bool,
    pub is_invincible: bool,
    pub is_undamageable: bool,
    pub position: Vec2,
}

impl TrackedEntity {
    /// A monster that currently counts toward the proximity requirement.
    pub fn is_qualifying(&self) -> bool {
        self.is_monster
            && self.is_valid
            && self.is_alive
            && self.is_hostile
            && !self.is_invincible
            && !self.is_undamageable
    }
}

/// Per-frame read access to the player's state.
pub trait GameState {
    fn zone_flags(&self) -> HostResult<ZoneFlags>;

    fn player_alive(&self) -> HostResult<bool>;

    /// `Ok(None)` when the buff list is unobtainable this frame.
    fn player_buffs(&self) -> HostResult<Option<Vec<Buff>>>;

    /// `Ok(None)` when the skill list is unobtainable this frame.
    fn player_skills(&self) -> HostResult<Option<Vec<SkillInfo>>>;

    fn player_position(&self) -> HostResult<Vec2>;
}

/// Resolves a tracked handle to the entity's current state.
///
/// The census stores handles, not entity data, so flags and positions are
/// always read fresh at scan time. `None` means the handle no longer
/// resolves; stale handles contribute nothing to a scan.
pub trait EntityResolver {
    fn entity_state(&self, id: EntityId) -> Option<TrackedEntity>;
}

/// Delivers the actual cast, e.g. by injecting the bound key press.
///
/// Fire-and-forget: the engine never inspects a result, it only stamps the
/// cooldown after calling this.
pub trait ActionEffector {
    fn trigger(&mut self, key: KeyBinding);
}
