//! Bottle Bounce - a stomp-the-falling-bottles arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, session)
//! - `draw`: Per-frame ordered draw list handed to a renderer collaborator
//! - `highscores`: Top-10 leaderboard with JSON persistence

pub mod draw;
pub mod highscores;
pub mod sim;

pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Playfield width in pixels
    pub const SCREEN_W: f32 = 800.0;
    /// Playfield height in pixels
    pub const SCREEN_H: f32 = 600.0;
    /// Height of the ground strip at the bottom of the screen
    pub const GROUND_H: f32 = 60.0;

    /// Fixed simulation rate (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;
    /// Milliseconds of wall clock covered by one tick
    pub const FRAME_DT_MS: f32 = 1000.0 / TICK_RATE as f32;

    /// Horizontal speed for both the player and bottles (pixels per frame)
    pub const MOVE_SPEED: f32 = 5.0;
    /// Jump impulse (negative = up; screen y grows downward)
    pub const JUMP_SPEED: f32 = -12.0;
    /// Gravity acceleration (pixels per frame per frame)
    pub const GRAVITY: f32 = 0.5;

    /// Player bounding box
    pub const PLAYER_W: f32 = 80.0;
    pub const PLAYER_H: f32 = 100.0;
    /// Bottle bounding box
    pub const BOTTLE_W: f32 = 40.0;
    pub const BOTTLE_H: f32 = 80.0;
    /// Broken-bottle sprite size (cosmetic only, the collision rect keeps the
    /// original bottle size)
    pub const BOTTLE_BROKEN_W: f32 = 60.0;
    pub const BOTTLE_BROKEN_H: f32 = 60.0;

    /// Spawn interval at score 0
    pub const INIT_SPAWN_DELAY_MS: f32 = 2000.0;
    /// Each point shrinks the spawn interval by this factor
    pub const SPAWN_DECAY_BASE: f32 = 1.01;
    /// Spawn interval floor - below one frame the timer fires every tick anyway
    pub const MIN_SPAWN_DELAY_MS: f32 = FRAME_DT_MS;
}

/// The y coordinate entities rest on (top of the ground strip)
#[inline]
pub fn ground_line() -> f32 {
    consts::SCREEN_H - consts::GROUND_H
}

/// Spawn interval for a given score: `INIT_SPAWN_DELAY_MS / 1.01^score`,
/// clamped so it never drops below one frame.
pub fn spawn_delay_for_score(score: u32) -> f32 {
    let delay = consts::INIT_SPAWN_DELAY_MS / consts::SPAWN_DECAY_BASE.powi(score as i32);
    delay.max(consts::MIN_SPAWN_DELAY_MS)
}
