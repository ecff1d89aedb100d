//! Buffwatch - Demo Entry Point
//!
//! Runs the evaluation cycle against a small simulated host so the gating
//! behavior can be watched without a real game client attached. Each "tick"
//! is one rendered frame from the engine's point of view.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;

use rand::Rng;

use buffwatch::census::MonsterCensus;
use buffwatch::core::config::BuffwatchConfig;
use buffwatch::core::error::HostResult;
use buffwatch::core::types::{EntityId, Vec2};
use buffwatch::engine::EvaluationCycle;
use buffwatch::host::{
    ActionEffector, Buff, EntityResolver, GameState, KeyBinding, SkillInfo, TrackedEntity,
    ZoneFlags,
};

/// Simulated host: owns the fake player and entity state.
struct SimHost {
    in_town: bool,
    alive: bool,
    buffs: Vec<Buff>,
    skills: Vec<SkillInfo>,
    position: Vec2,
    entities: HashMap<EntityId, TrackedEntity>,
    next_id: u64,
}

impl SimHost {
    fn new() -> Self {
        let skills = vec![
            SkillInfo {
                name: "BloodRage".to_string(),
                internal_name: "blood_rage".to_string(),
                can_be_used: true,
                slot_index: 0,
            },
            SkillInfo {
                name: "QuicKGuard".to_string(),
                internal_name: "steelskin".to_string(),
                can_be_used: true,
                slot_index: 1,
            },
        ];

        Self {
            in_town: false,
            alive: true,
            buffs: Vec::new(),
            skills,
            position: Vec2::default(),
            entities: HashMap::new(),
            next_id: 1,
        }
    }

    fn spawn_monsters(&mut self, count: usize, cycle: &EvaluationCycle) {
        let mut rng = rand::thread_rng();
        for _ in 0..count {
            let id = EntityId(self.next_id);
            self.next_id += 1;

            let entity = TrackedEntity {
                id,
                is_monster: true,
                is_valid: true,
                is_alive: true,
                is_hostile: true,
                is_invincible: false,
                is_undamageable: false,
                position: Vec2::new(
                    self.position.x + rng.gen_range(-80.0..80.0),
                    self.position.y + rng.gen_range(-80.0..80.0),
                ),
            };
            self.entities.insert(id, entity);
            cycle.entity_added(&entity);
        }
    }

    fn toggle_buff(&mut self, name: &str) {
        if let Some(idx) = self
            .buffs
            .iter()
            .position(|b| b.name.eq_ignore_ascii_case(name))
        {
            self.buffs.remove(idx);
            println!("Removed buff '{name}'");
        } else {
            self.buffs.push(Buff::new(name));
            println!("Added buff '{name}'");
        }
    }
}

impl GameState for SimHost {
    fn zone_flags(&self) -> HostResult<ZoneFlags> {
        Ok(ZoneFlags {
            is_town: self.in_town,
            is_hideout: false,
        })
    }

    fn player_alive(&self) -> HostResult<bool> {
        Ok(self.alive)
    }

    fn player_buffs(&self) -> HostResult<Option<Vec<Buff>>> {
        Ok(Some(self.buffs.clone()))
    }

    fn player_skills(&self) -> HostResult<Option<Vec<SkillInfo>>> {
        Ok(Some(self.skills.clone()))
    }

    fn player_position(&self) -> HostResult<Vec2> {
        Ok(self.position)
    }
}

impl EntityResolver for SimHost {
    fn entity_state(&self, id: EntityId) -> Option<TrackedEntity> {
        self.entities.get(&id).copied()
    }
}

/// Effector that logs the key press instead of injecting it.
#[derive(Default)]
struct KeyLogger {
    presses: usize,
}

impl ActionEffector for KeyLogger {
    fn trigger(&mut self, key: KeyBinding) {
        self.presses += 1;
        tracing::info!("key press injected: {:#04x}", key.0);
    }
}

fn main() -> io::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("buffwatch=debug")
        .init();

    tracing::info!("Buffwatch demo starting...");

    let config = BuffwatchConfig {
        debug: true,
        ..Default::default()
    };

    let census = Arc::new(MonsterCensus::new());
    let mut cycle = EvaluationCycle::new(config, census);

    let mut host = SimHost::new();
    let mut effector = KeyLogger::default();

    println!("\n=== BUFFWATCH ===");
    println!("Buff upkeep decision engine against a simulated host");
    println!();
    println!("Commands:");
    println!("  tick / t        - Evaluate one frame");
    println!("  run <n>         - Evaluate n frames");
    println!("  spawn <n>       - Spawn n monsters near the player");
    println!("  buff <name>     - Toggle a buff on the fake player");
    println!("  town            - Toggle town zone");
    println!("  kill            - Toggle player liveness");
    println!("  status / s      - Show host and census state");
    println!("  quit / q        - Exit");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");

        match command {
            "tick" | "t" => {
                let outcome = cycle.run_once(&host, &host, &mut effector);
                println!("outcome: {outcome:?}");
            }
            "run" => {
                let n: usize = parts.next().and_then(|s| s.parse().ok()).unwrap_or(1);
                for _ in 0..n {
                    cycle.run_once(&host, &host, &mut effector);
                }
                println!("ran {n} frames, {} key presses so far", effector.presses);
            }
            "spawn" => {
                let n: usize = parts.next().and_then(|s| s.parse().ok()).unwrap_or(1);
                host.spawn_monsters(n, &cycle);
                println!("census now tracks {} monsters", cycle.census().len());
            }
            "buff" => match parts.next() {
                Some(name) => host.toggle_buff(name),
                None => println!("usage: buff <name>"),
            },
            "town" => {
                host.in_town = !host.in_town;
                println!("in_town = {}", host.in_town);
            }
            "kill" => {
                host.alive = !host.alive;
                println!("alive = {}", host.alive);
            }
            "status" | "s" => {
                println!(
                    "alive={} in_town={} buffs={:?} tracked_monsters={} key_presses={}",
                    host.alive,
                    host.in_town,
                    host.buffs.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(),
                    cycle.census().len(),
                    effector.presses,
                );
            }
            "quit" | "q" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }
    }

    cycle.shutdown();
    tracing::info!("Buffwatch demo exiting");
    Ok(())
}
