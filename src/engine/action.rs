//! Static per-action configuration
//!
//! Names and intervals match what the host's game client reports; none of
//! these are user-configurable.

use std::time::Duration;

use crate::core::types::ActionKind;

/// Buff granted during the post-respawn grace period. Evaluation pauses
/// entirely while the player still has it.
pub const GRACE_PERIOD_BUFF: &str = "grace_period";

/// Margin added to every re-trigger interval to absorb frame-timing jitter,
/// so a cycle landing just above the nominal interval cannot double-cast.
pub const COOLDOWN_MARGIN: Duration = Duration::from_millis(150);

/// Immutable description of one managed self-buff action.
#[derive(Debug, Clone)]
pub struct ActionSpec {
    pub kind: ActionKind,
    /// Buff the action applies; the action only fires while it is absent.
    pub buff_name: &'static str,
    /// Display name of the granting skill as the host reports it.
    pub skill_name: &'static str,
    /// Internal skill identifier as the host reports it.
    pub skill_internal_name: &'static str,
    /// Minimum time between two casts of this action.
    pub min_interval: Duration,
}

pub const BLOOD_RAGE: ActionSpec = ActionSpec {
    kind: ActionKind::BloodRage,
    buff_name: "blood_rage",
    skill_name: "BloodRage",
    skill_internal_name: "blood_rage",
    min_interval: Duration::from_secs(1),
};

// The game client reports Steel Skin's display name as "QuicKGuard".
pub const STEEL_SKIN: ActionSpec = ActionSpec {
    kind: ActionKind::SteelSkin,
    buff_name: "steelskin",
    skill_name: "QuicKGuard",
    skill_internal_name: "steelskin",
    min_interval: Duration::from_millis(4500),
};
