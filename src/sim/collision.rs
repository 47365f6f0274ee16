//! Player/bottle collision resolution
//!
//! Overlap is a plain rectangle test; the interesting part is deciding whether
//! the player landed on top of the bottle (a stomp) or ran into it (a hit).

use serde::{Deserialize, Serialize};

use super::entity::Body;

/// How an overlapping player/bottle pair resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionOutcome {
    /// Player came down on top: bottle dies, player bounces, score
    Stomp,
    /// Side or bottom contact: player dies
    Hit,
}

/// Decide stomp vs. hit for an overlapping pair.
///
/// Rewinding the player's bottom edge by its current vertical velocity
/// approximates "was above the bottle and descending onto it". The rewind
/// mixes this frame's position with this frame's already-integrated velocity,
/// which is not an exact swept test; the heuristic is kept as-is because it
/// defines the game's feel. Equality counts as a hit.
pub fn resolve_collision(player: &Body, bottle: &Body) -> CollisionOutcome {
    if player.rect.bottom() - player.vel.y < bottle.rect.top() {
        CollisionOutcome::Stomp
    } else {
        CollisionOutcome::Hit
    }
}
