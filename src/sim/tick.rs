//! Fixed timestep simulation tick
//!
//! One call advances the session exactly one 60 Hz frame: player movement,
//! the spawn timer, bottle advancement and culling, and collision resolution.

use super::collision::{CollisionOutcome, resolve_collision};
use super::state::{GamePhase, GameState};
use crate::consts::FRAME_DT_MS;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Jump key held
    pub jump: bool,
    /// Discrete "any key pressed" event; only consulted during game over
    pub restart: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                state.restart();
            }
        }
        GamePhase::Alive => {
            let mut input = input.clone();
            if input.idle_mode {
                idle_play(state, &mut input);
            }

            step_alive(state, &input);

            // The frame that drops the player off screen still finishes its
            // spawn and bottle work; the phase flips once it is done.
            if state.player.body.out {
                log::info!("Game over at score {}", state.score);
                state.phase = GamePhase::GameOver;
            }
        }
    }
}

/// One frame of normal play
fn step_alive(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    state.player.update(input);

    // Spawn timer: one bottle each time the accumulated time beats the delay
    state.since_spawn_ms += FRAME_DT_MS;
    if state.since_spawn_ms > state.spawn_delay_ms {
        state.spawn_bottle();
    }

    // Drop bottles flagged out on an earlier frame, then advance the rest.
    // The retain pass keeps removal separate from iteration so nothing is
    // skipped or processed twice.
    state.bottles.retain(|b| !b.body.out);
    for bottle in &mut state.bottles {
        bottle.update();
    }

    // Collision resolution against the surviving bottles
    let mut scored = false;
    let GameState {
        player,
        bottles,
        score,
        ..
    } = state;
    for bottle in bottles.iter_mut() {
        if player.body.dead || bottle.body.dead {
            continue;
        }
        if !player.body.rect.intersects(&bottle.body.rect) {
            continue;
        }
        match resolve_collision(&player.body, &bottle.body) {
            CollisionOutcome::Stomp => {
                log::debug!("Stomped bottle {}", bottle.id);
                bottle.body.kill();
                player.body.jump();
                *score += 1;
                scored = true;
            }
            CollisionOutcome::Hit => {
                log::info!("Player hit by bottle {}", bottle.id);
                player.body.kill();
            }
        }
    }
    if scored {
        state.update_spawn_delay();
    }
}

/// Demo AI: chase the nearest live bottle and hop on it
fn idle_play(state: &GameState, input: &mut TickInput) {
    let player = &state.player.body;
    let target = state
        .bottles
        .iter()
        .filter(|b| !b.body.dead)
        .min_by(|a, b| {
            let da = (a.body.rect.center_x() - player.rect.center_x()).abs();
            let db = (b.body.rect.center_x() - player.rect.center_x()).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(bottle) = target {
        let dx = bottle.body.rect.center_x() - player.rect.center_x();
        if dx < -4.0 {
            input.left = true;
        } else if dx > 4.0 {
            input.right = true;
        }
        // Hop when close enough that the bounce comes down on the bottle
        if dx.abs() < 100.0 && player.grounded {
            input.jump = true;
        }
    }
}
