//! The per-frame evaluation cycle
//!
//! `EvaluationCycle` is the piece the host embeds: it owns the
//! configuration and the cooldown gate, shares the monster census with the
//! host's entity notification handlers, and runs one bounded synchronous
//! pass per rendered frame. Host faults are contained here; nothing ever
//! propagates into the host's render loop.

use std::sync::Arc;
use std::time::Instant;

use crate::census::MonsterCensus;
use crate::core::config::BuffwatchConfig;
use crate::core::error::HostResult;
use crate::core::types::{ActionKind, EntityId};
use crate::engine::action::{BLOOD_RAGE, GRACE_PERIOD_BUFF, STEEL_SKIN};
use crate::engine::cooldown::CooldownGate;
use crate::engine::decision::evaluate_action;
use crate::engine::snapshot::CycleSnapshot;
use crate::host::{ActionEffector, EntityResolver, GameState, TrackedEntity};

/// Gate whether this frame is evaluated at all.
///
/// Checks short-circuit in order: master switch, safe zone, liveness,
/// obtainable buff list, grace period absent, obtainable non-empty skill
/// list. Indeterminate state fails closed. On success the snapshot is built
/// and stamped with the current time.
pub fn evaluate_preconditions(
    config: &BuffwatchConfig,
    game: &dyn GameState,
) -> HostResult<Option<CycleSnapshot>> {
    if !config.enabled {
        return Ok(None);
    }

    if game.zone_flags()?.is_safe_zone() {
        return Ok(None);
    }

    if !game.player_alive()? {
        return Ok(None);
    }

    let Some(buffs) = game.player_buffs()? else {
        tracing::debug!("Buff list unobtainable; skipping cycle.");
        return Ok(None);
    };

    if buffs.iter().any(|b| b.name.eq_ignore_ascii_case(GRACE_PERIOD_BUFF)) {
        return Ok(None);
    }

    let Some(skills) = game.player_skills()? else {
        tracing::debug!("Skill list unobtainable; skipping cycle.");
        return Ok(None);
    };
    if skills.is_empty() {
        return Ok(None);
    }

    Ok(Some(CycleSnapshot::new(buffs, skills, Instant::now())))
}

/// What one cycle did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleOutcome {
    pub blood_rage_fired: bool,
    pub steel_skin_fired: bool,
}

impl CycleOutcome {
    fn record(&mut self, kind: ActionKind, fired: bool) {
        match kind {
            ActionKind::BloodRage => self.blood_rage_fired = fired,
            ActionKind::SteelSkin => self.steel_skin_fired = fired,
        }
    }

    pub fn any_fired(&self) -> bool {
        self.blood_rage_fired || self.steel_skin_fired
    }
}

/// The long-lived driver, constructed once per plugin lifetime.
pub struct EvaluationCycle {
    config: BuffwatchConfig,
    cooldowns: CooldownGate,
    census: Arc<MonsterCensus>,
}

impl EvaluationCycle {
    pub fn new(config: BuffwatchConfig, census: Arc<MonsterCensus>) -> Self {
        Self {
            config,
            cooldowns: CooldownGate::new(),
            census,
        }
    }

    pub fn config(&self) -> &BuffwatchConfig {
        &self.config
    }

    /// Replace the configuration, e.g. after the host's settings UI changed.
    pub fn set_config(&mut self, config: BuffwatchConfig) {
        self.config = config;
    }

    pub fn census(&self) -> &Arc<MonsterCensus> {
        &self.census
    }

    /// Host notification: an entity was loaded.
    ///
    /// Safe to call from a different thread than [`run_once`]; only the
    /// census is touched.
    ///
    /// [`run_once`]: EvaluationCycle::run_once
    pub fn entity_added(&self, entity: &TrackedEntity) {
        self.census.add(entity);
    }

    /// Host notification: an entity was unloaded.
    pub fn entity_removed(&self, id: EntityId) {
        self.census.remove(id);
    }

    /// Plugin unload/hot-reload teardown. Cooldown timestamps need no
    /// cleanup; the census does.
    pub fn shutdown(&self) {
        self.census.clear();
    }

    /// Run one frame's evaluation: precheck, then Blood Rage, then Steel
    /// Skin. The snapshot lives only inside this call, so per-cycle state
    /// is gone when it returns no matter how the cycle went.
    ///
    /// Host faults are logged with the phase that saw them and converted to
    /// "no action this cycle". A fault in one action's evaluation does not
    /// stop the other action from being evaluated.
    pub fn run_once(
        &mut self,
        game: &dyn GameState,
        resolver: &dyn EntityResolver,
        effector: &mut dyn ActionEffector,
    ) -> CycleOutcome {
        let mut outcome = CycleOutcome::default();

        let mut snapshot = match evaluate_preconditions(&self.config, game) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return outcome,
            Err(fault) => {
                tracing::error!("Host fault during precondition check: {fault}");
                return outcome;
            }
        };

        for spec in [&BLOOD_RAGE, &STEEL_SKIN] {
            match evaluate_action(
                spec,
                &self.config,
                &mut snapshot,
                &mut self.cooldowns,
                &self.census,
                game,
                resolver,
                effector,
            ) {
                Ok(fired) => outcome.record(spec.kind, fired),
                Err(fault) => {
                    tracing::error!(
                        "Host fault evaluating {}: {fault}",
                        spec.kind.display_name()
                    );
                }
            }
        }

        outcome
    }
}
