//! Per-action decision logic
//!
//! One linear gate chain per action: enable flag, cooldown, own-buff
//! absence, usable skill in the configured slot, optional monster
//! proximity. Only when every gate passes does the effector fire and the
//! cooldown get stamped.

use crate::census::MonsterCensus;
use crate::core::config::BuffwatchConfig;
use crate::core::error::HostResult;
use crate::engine::action::{ActionSpec, COOLDOWN_MARGIN};
use crate::engine::cooldown::CooldownGate;
use crate::engine::snapshot::CycleSnapshot;
use crate::host::{ActionEffector, EntityResolver, GameState};

/// Evaluate one action for this cycle. Returns whether it fired.
///
/// Actions are independent: nothing here reads or writes state belonging to
/// the other action, so the outcome of one never affects the other within a
/// cycle.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_action(
    spec: &ActionSpec,
    config: &BuffwatchConfig,
    snapshot: &mut CycleSnapshot,
    cooldowns: &mut CooldownGate,
    census: &MonsterCensus,
    game: &dyn GameState,
    resolver: &dyn EntityResolver,
    effector: &mut dyn ActionEffector,
) -> HostResult<bool> {
    let action = config.action(spec.kind);
    if !action.enabled {
        return Ok(false);
    }

    if !cooldowns.is_ready(spec.kind, snapshot.now, spec.min_interval, COOLDOWN_MARGIN) {
        return Ok(false);
    }

    // The action exists to re-apply a buff that is currently absent.
    if snapshot.has_buff(spec.buff_name) {
        return Ok(false);
    }

    if snapshot.find_usable_skill(spec, action.skill_slot).is_none() {
        if config.debug {
            tracing::debug!(
                "Can not cast {} - not found in usable skills.",
                spec.kind.display_name()
            );
        }
        return Ok(false);
    }

    if config.require_min_monster_count {
        let count = snapshot.nearby_monsters_with(|| {
            let origin = game.player_position()?;
            Ok(census.count_nearby(origin, config.nearby_monster_max_distance, resolver))
        })?;

        if count < config.nearby_monster_count {
            if config.debug {
                tracing::debug!("NearbyMonstersCheck failed.");
            }
            return Ok(false);
        }
    }

    if config.debug {
        tracing::debug!("Casting {}", spec.kind.display_name());
    }
    effector.trigger(action.key);
    cooldowns.mark_triggered(spec.kind, snapshot.now);

    Ok(true)
}
