//! Per-cycle snapshot of the player's state
//!
//! Built once the precheck passes and dropped when the cycle ends, so stale
//! buff or skill data cannot leak into the next frame. The nearby-monster
//! count is the one lazily filled field: it is computed at most once per
//! cycle, no matter how many actions ask for it.

use std::time::Instant;

use crate::core::error::HostResult;
use crate::engine::action::ActionSpec;
use crate::host::{Buff, SkillInfo};

pub struct CycleSnapshot {
    buffs: Vec<Buff>,
    skills: Vec<SkillInfo>,
    /// Timestamp the precheck stamped; every cooldown comparison in this
    /// cycle uses it.
    pub now: Instant,
    nearby_monsters: Option<usize>,
}

impl CycleSnapshot {
    pub fn new(buffs: Vec<Buff>, skills: Vec<SkillInfo>, now: Instant) -> Self {
        Self {
            buffs,
            skills,
            now,
            nearby_monsters: None,
        }
    }

    /// Case-insensitive exact match against the player's buff list.
    pub fn has_buff(&self, name: &str) -> bool {
        self.buffs.iter().any(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Find a skill matching `spec` that the host reports as usable and that
    /// sits in the configured slot.
    ///
    /// Slots are 1-based in configuration but the host reports 0-based
    /// indices, hence the `- 1`.
    pub fn find_usable_skill(&self, spec: &ActionSpec, configured_slot: i32) -> Option<&SkillInfo> {
        self.skills.iter().find(|s| {
            (s.name == spec.skill_name || s.internal_name == spec.skill_internal_name)
                && s.can_be_used
                && s.slot_index == configured_slot - 1
        })
    }

    /// Nearby-monster count for this cycle, computing it on first use.
    pub fn nearby_monsters_with<F>(&mut self, compute: F) -> HostResult<usize>
    where
        F: FnOnce() -> HostResult<usize>,
    {
        if let Some(count) = self.nearby_monsters {
            return Ok(count);
        }
        let count = compute()?;
        self.nearby_monsters = Some(count);
        Ok(count)
    }
}
