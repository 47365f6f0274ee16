//! Session state
//!
//! Everything a running game owns: the player, the live bottles, score and
//! spawn cadence, and the alive/game-over phase. The whole struct is
//! serializable and, given the same seed and input sequence, deterministic.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Bottle, Player, SpawnSide};
use crate::{consts::INIT_SPAWN_DELAY_MS, spawn_delay_for_score};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play
    Alive,
    /// The dead player has fallen off screen; waiting for any key
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Bottles stomped this run
    pub score: u32,
    /// Current interval between bottle spawns
    pub spawn_delay_ms: f32,
    /// Milliseconds accumulated since the last spawn
    pub since_spawn_ms: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// The player character (respawned on restart, never destroyed)
    pub player: Player,
    /// Live bottles in spawn order
    pub bottles: Vec<Bottle>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            spawn_delay_ms: INIT_SPAWN_DELAY_MS,
            since_spawn_ms: 0.0,
            time_ticks: 0,
            phase: GamePhase::Alive,
            player: Player::new(),
            bottles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fair coin for the spawn side, derived from the run seed and the spawn
    /// ordinal so a run replays identically without serializing RNG internals.
    fn spawn_side(&self, id: u32) -> SpawnSide {
        let spawn_seed = (id as u64)
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed);
        let mut rng = Pcg32::seed_from_u64(spawn_seed);
        if rng.random_bool(0.5) {
            SpawnSide::Left
        } else {
            SpawnSide::Right
        }
    }

    /// Spawn one bottle on a random side and reset the spawn timer
    pub fn spawn_bottle(&mut self) {
        let id = self.next_entity_id();
        let side = self.spawn_side(id);
        log::debug!("Spawning bottle {} from {:?}", id, side);
        self.bottles.push(Bottle::spawn(id, side));
        self.since_spawn_ms = 0.0;
    }

    /// Recompute the spawn interval after a score change
    pub fn update_spawn_delay(&mut self) {
        self.spawn_delay_ms = spawn_delay_for_score(self.score);
    }

    /// Back to a fresh run: score, timers, player and bottles all reset.
    /// Only legal from game over; the tick ignores restart input while alive.
    pub fn restart(&mut self) {
        log::info!("Restarting; last run scored {}", self.score);
        self.score = 0;
        self.spawn_delay_ms = INIT_SPAWN_DELAY_MS;
        self.since_spawn_ms = 0.0;
        self.player.respawn();
        self.bottles.clear();
        self.phase = GamePhase::Alive;
    }
}
