//! Shared census of loaded monsters
//!
//! Entity added/removed notifications arrive on the host's notification
//! path, which may be a different thread than the per-frame evaluation
//! cycle, so the tracked set sits behind a single mutex. Scans copy the
//! handles out under the lock and filter unlocked, keeping lock hold time
//! bounded by the copy so a proximity scan never blocks the notification
//! path.

use std::sync::{Mutex, MutexGuard, PoisonError};

use ahash::AHashSet;

use crate::core::types::{EntityId, Vec2};
use crate::host::{EntityResolver, TrackedEntity};

/// Thread-safe set of monster handles with on-demand proximity counting.
///
/// Constructed once per plugin lifetime and shared (by reference or `Arc`)
/// between the notification handlers and the evaluation cycle.
#[derive(Debug, Default)]
pub struct MonsterCensus {
    loaded: Mutex<AHashSet<EntityId>>,
}

impl MonsterCensus {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means some thread panicked between insert and
    // unlock; the set of ids underneath is still coherent, so keep serving.
    fn lock(&self) -> MutexGuard<'_, AHashSet<EntityId>> {
        self.loaded.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Track an entity if the host tagged it as a monster; anything else is
    /// ignored. Re-adding a tracked entity is a no-op.
    pub fn add(&self, entity: &TrackedEntity) {
        if !entity.is_monster {
            return;
        }
        self.lock().insert(entity.id);
    }

    /// Stop tracking a handle; no-op if it was never tracked.
    pub fn remove(&self, id: EntityId) {
        self.lock().remove(&id);
    }

    /// Drop every tracked handle. Called on plugin unload/hot-reload.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Count qualifying monsters within `max_distance` of `origin`.
    ///
    /// Handles are copied out under the lock, then resolved and filtered
    /// unlocked. An entity counts when it is a valid, alive, hostile monster
    /// that is neither invincible nor undamageable, and its squared distance
    /// to `origin` is at most `max_distance` squared (inclusive boundary).
    pub fn count_nearby(
        &self,
        origin: Vec2,
        max_distance: f32,
        resolver: &dyn EntityResolver,
    ) -> usize {
        let handles: Vec<EntityId> = {
            let guard = self.lock();
            guard.iter().copied().collect()
        };

        let max_distance_squared = max_distance * max_distance;
        handles
            .into_iter()
            .filter_map(|id| resolver.entity_state(id))
            .filter(|entity| entity.is_qualifying())
            .filter(|entity| entity.position.distance_squared(&origin) <= max_distance_squared)
            .count()
    }
}
