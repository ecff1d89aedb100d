//! Decision engine - cooldown gating, precondition checks, and the
//! per-frame evaluation cycle.

pub mod action;
pub mod cooldown;
pub mod cycle;
pub mod decision;
pub mod snapshot;

pub use action::{ActionSpec, BLOOD_RAGE, COOLDOWN_MARGIN, GRACE_PERIOD_BUFF, STEEL_SKIN};
pub use cooldown::CooldownGate;
pub use cycle::{evaluate_preconditions, CycleOutcome, EvaluationCycle};
pub use decision::evaluate_action;
pub use snapshot::CycleSnapshot;
