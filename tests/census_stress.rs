//! Concurrency stress test for the monster census
//!
//! Adds and removes from multiple threads while a reader keeps scanning,
//! mirroring the real shape of the workload: notification handlers mutate
//! while the evaluation cycle counts. The set must end up with exactly the
//! net membership and no scan may observe a torn state (a count above the
//! number of ids ever added).

use std::sync::Arc;
use std::thread;

use buffwatch::census::MonsterCensus;
use buffwatch::core::types::{EntityId, Vec2};
use buffwatch::host::{EntityResolver, TrackedEntity};

const IDS: u64 = 1000;

fn monster(id: u64) -> TrackedEntity {
    TrackedEntity {
        id: EntityId(id),
        is_monster: true,
        is_valid: true,
        is_alive: true,
        is_hostile: true,
        is_invincible: false,
        is_undamageable: false,
        position: Vec2::new(0.0, 0.0),
    }
}

/// Resolves every handle to a qualifying monster at the origin.
struct AllQualify;

impl EntityResolver for AllQualify {
    fn entity_state(&self, id: EntityId) -> Option<TrackedEntity> {
        Some(monster(id.0))
    }
}

#[test]
fn test_concurrent_adds_and_scans() {
    let census = Arc::new(MonsterCensus::new());

    let mut handles = Vec::new();

    // Four writers all adding the same id range; set semantics must
    // deduplicate no matter the interleaving.
    for _ in 0..4 {
        let census = Arc::clone(&census);
        handles.push(thread::spawn(move || {
            for id in 0..IDS {
                census.add(&monster(id));
            }
        }));
    }

    // Reader scanning while the writers run.
    {
        let census = Arc::clone(&census);
        handles.push(thread::spawn(move || {
            for _ in 0..200 {
                let count = census.count_nearby(Vec2::default(), 10.0, &AllQualify);
                assert!(count <= IDS as usize, "scan observed {count} > {IDS} ids");
            }
        }));
    }

    for handle in handles {
        handle.join().expect("census thread panicked");
    }

    assert_eq!(census.len(), IDS as usize);
}

#[test]
fn test_concurrent_removes_leave_net_membership() {
    let census = Arc::new(MonsterCensus::new());
    for id in 0..IDS {
        census.add(&monster(id));
    }

    let mut handles = Vec::new();

    // Two removers splitting the lower half of the id space.
    for half in 0..2u64 {
        let census = Arc::clone(&census);
        handles.push(thread::spawn(move || {
            let start = half * (IDS / 4);
            for id in start..start + IDS / 4 {
                census.remove(EntityId(id));
            }
        }));
    }

    // A writer re-adding ids that are never removed (duplicates of the
    // upper half), plus a scanning reader.
    {
        let census = Arc::clone(&census);
        handles.push(thread::spawn(move || {
            for id in IDS / 2..IDS {
                census.add(&monster(id));
            }
        }));
    }
    {
        let census = Arc::clone(&census);
        handles.push(thread::spawn(move || {
            for _ in 0..200 {
                let count = census.count_nearby(Vec2::default(), 10.0, &AllQualify);
                assert!(count <= IDS as usize);
            }
        }));
    }

    for handle in handles {
        handle.join().expect("census thread panicked");
    }

    // Net membership: the upper half survives, the lower half is gone.
    assert_eq!(census.len(), (IDS / 2) as usize);
}
