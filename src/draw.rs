//! Per-frame draw list
//!
//! The renderer collaborator receives an ordered list of commands each frame:
//! background, ground strip, live sprites, then the HUD text. The core only
//! assumes the renderer can blit a sprite at a rect and draw a text string at
//! an anchored position; pixel formats and asset handles are its business.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::ground_line;
use crate::sim::{GamePhase, GameState, Rect};

/// Handle for an already-loaded sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Background,
    Ground,
    Player,
    Bottle,
    BottleBroken,
}

/// How a text position is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    /// Position is the top-center of the rendered string
    MidTop,
    /// Position is the bottom-center of the rendered string
    MidBottom,
}

/// One renderer command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Blit a sprite covering the given rect
    Sprite { sprite: SpriteId, rect: Rect },
    /// Draw a text string anchored at (x, y)
    Text {
        text: String,
        anchor: TextAnchor,
        x: f32,
        y: f32,
    },
}

/// Build the ordered draw list for the current frame.
///
/// While alive: playfield, entities, score along the top edge. While game
/// over the entities are gone (the corpse fell off screen and bottles are
/// frozen undrawn); the final score and the retry prompt sit mid-screen.
pub fn draw_list(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = vec![
        DrawCmd::Sprite {
            sprite: SpriteId::Background,
            rect: Rect::new(0.0, 0.0, SCREEN_W, SCREEN_H),
        },
        DrawCmd::Sprite {
            sprite: SpriteId::Ground,
            rect: Rect::new(0.0, ground_line(), SCREEN_W, GROUND_H),
        },
    ];

    match state.phase {
        GamePhase::Alive => {
            cmds.push(DrawCmd::Sprite {
                sprite: SpriteId::Player,
                rect: state.player.body.rect,
            });
            for bottle in &state.bottles {
                let sprite = if bottle.body.dead {
                    SpriteId::BottleBroken
                } else {
                    SpriteId::Bottle
                };
                cmds.push(DrawCmd::Sprite {
                    sprite,
                    rect: bottle.body.rect,
                });
            }
            cmds.push(DrawCmd::Text {
                text: state.score.to_string(),
                anchor: TextAnchor::MidTop,
                x: SCREEN_W / 2.0,
                y: 5.0,
            });
        }
        GamePhase::GameOver => {
            cmds.push(DrawCmd::Text {
                text: state.score.to_string(),
                anchor: TextAnchor::MidBottom,
                x: SCREEN_W / 2.0,
                y: SCREEN_H / 2.0,
            });
            cmds.push(DrawCmd::Text {
                text: "PRESS ANY KEY".to_string(),
                anchor: TextAnchor::MidTop,
                x: SCREEN_W / 2.0,
                y: SCREEN_H / 2.0,
            });
        }
    }

    cmds
}
