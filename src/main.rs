//! Bottle Bounce entry point
//!
//! No windowing front end is wired up yet, so the binary runs a headless demo:
//! the sim's idle AI plays at a real-time 60 Hz pace, game-over scores land on
//! the leaderboard, and the session restarts itself.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use bottle_bounce::HighScores;
use bottle_bounce::consts::TICK_RATE;
use bottle_bounce::draw::draw_list;
use bottle_bounce::sim::{GamePhase, GameState, TickInput, tick};

/// Leaderboard file next to the binary
const HIGH_SCORE_FILE: &str = "highscores.json";

/// Demo length: 60 seconds of play
const DEMO_FRAMES: u32 = 60 * TICK_RATE;

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Bottle Bounce starting (headless demo mode)");

    let score_path = Path::new(HIGH_SCORE_FILE);
    let mut high_scores = HighScores::load(score_path);

    let seed = unix_millis();
    let mut state = GameState::new(seed);
    log::info!("New session with seed {}", seed);

    let frame_budget = Duration::from_secs_f32(1.0 / TICK_RATE as f32);
    let mut score_recorded = false;

    for _ in 0..DEMO_FRAMES {
        let frame_start = Instant::now();

        let mut input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        if state.phase == GamePhase::GameOver {
            if !score_recorded {
                if let Some(rank) = high_scores.add_score(state.score, unix_millis()) {
                    log::info!("Score {} reached rank {}", state.score, rank);
                }
                score_recorded = true;
            }
            // Any key: the demo presses one immediately
            input.restart = true;
        }

        tick(&mut state, &input);
        if input.restart && state.phase == GamePhase::Alive {
            score_recorded = false;
        }

        // A renderer would consume this; the demo just keeps it honest
        let frame = draw_list(&state);
        log::trace!("tick {}: {} draw commands", state.time_ticks, frame.len());

        // Block until the frame boundary
        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }

    log::info!("Demo finished at score {}", state.score);
    if let Err(e) = high_scores.save(score_path) {
        log::warn!("Could not save high scores: {}", e);
    }
    if let Some(top) = high_scores.top_score() {
        log::info!("Best score so far: {}", top);
    }
}
