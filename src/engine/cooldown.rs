//! Per-action cooldown bookkeeping

use std::time::{Duration, Instant};

use crate::core::types::ActionKind;

/// Remembers when each action last fired and answers whether enough time
/// has passed to fire again.
///
/// Timestamps are only ever stamped with the current cycle time, so the
/// stored value per action is monotonically non-decreasing.
#[derive(Debug, Default)]
pub struct CooldownGate {
    last_blood_rage: Option<Instant>,
    last_steel_skin: Option<Instant>,
}

impl CooldownGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: ActionKind) -> Option<Instant> {
        match kind {
            ActionKind::BloodRage => self.last_blood_rage,
            ActionKind::SteelSkin => self.last_steel_skin,
        }
    }

    /// True when the action has never fired, or at least
    /// `min_interval + margin` has elapsed since its last trigger.
    pub fn is_ready(
        &self,
        kind: ActionKind,
        now: Instant,
        min_interval: Duration,
        margin: Duration,
    ) -> bool {
        match self.slot(kind) {
            None => true,
            Some(last) => now.duration_since(last) >= min_interval + margin,
        }
    }

    /// Stamp `now` as the action's last trigger time.
    pub fn mark_triggered(&mut self, kind: ActionKind, now: Instant) {
        let slot = match kind {
            ActionKind::BloodRage => &mut self.last_blood_rage,
            ActionKind::SteelSkin => &mut self.last_steel_skin,
        };
        *slot = Some(now);
    }

    pub fn last_triggered(&self, kind: ActionKind) -> Option<Instant> {
        self.slot(kind)
    }
}
