//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per 60 Hz frame, velocities in px/frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, resolve_collision};
pub use entity::{Body, Bottle, Player, SpawnSide};
pub use rect::Rect;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
