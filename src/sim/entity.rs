//! Kinematic bodies: the shared physics core plus the two entity variants.
//!
//! There is no inheritance here; `Player` and `Bottle` each embed a [`Body`]
//! and supply their own per-frame policy (input handling for the player, the
//! horizontal out-of-bounds rule for bottles) around the shared kinematics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;
use crate::ground_line;

/// Shared kinematic state for anything subject to gravity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    /// Bottom edge is resting on the ground line
    pub grounded: bool,
    /// Killed: free-falling through the ground in the death pop
    pub dead: bool,
    /// Left the play area; eligible for removal (bottles) or game over (player)
    pub out: bool,
}

impl Body {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            grounded: false,
            dead: false,
            out: false,
        }
    }

    /// Advance one frame of kinematics: horizontal drift, gravity, fall
    pub fn integrate(&mut self) {
        self.rect.pos.x += self.vel.x;
        self.vel.y += GRAVITY;
        self.rect.pos.y += self.vel.y;
    }

    /// Rest on the ground if the bottom edge passed it while descending.
    ///
    /// The descending guard keeps a same-frame jump alive: the original game
    /// stored rect coordinates as integers, so the sub-pixel gravity nudge on
    /// a standing entity truncated away before this check could cancel the
    /// jump impulse.
    pub fn settle_on_ground(&mut self) {
        if self.vel.y >= 0.0 && self.rect.bottom() > ground_line() {
            self.grounded = true;
            self.vel.y = 0.0;
            self.rect.set_bottom(ground_line());
        }
    }

    /// Dead bodies fall out once their top edge passes the ground line
    pub fn check_fallen_out(&mut self) {
        if self.rect.top() > ground_line() {
            self.out = true;
        }
    }

    /// Death pop: bounce up and drift back the way it came
    pub fn kill(&mut self) {
        self.dead = true;
        self.vel.x = -self.vel.x;
        self.vel.y = JUMP_SPEED;
    }

    /// Launch upward at the jump impulse
    pub fn jump(&mut self) {
        self.vel.y = JUMP_SPEED;
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
}

impl Player {
    pub fn new() -> Self {
        let mut player = Self {
            body: Body::new(Rect::sized(PLAYER_W, PLAYER_H)),
        };
        player.respawn();
        player
    }

    /// Reset flags and stand at the bottom-center of the screen
    pub fn respawn(&mut self) {
        self.body.out = false;
        self.body.dead = false;
        self.body.grounded = false;
        self.body.vel = Vec2::ZERO;
        self.body.rect.set_midbottom(SCREEN_W / 2.0, ground_line());
    }

    /// Directional input. Left wins when both keys are held; jumping is only
    /// possible while grounded.
    fn handle_input(&mut self, input: &TickInput) {
        self.body.vel.x = 0.0;
        if input.left {
            self.body.vel.x = -MOVE_SPEED;
        } else if input.right {
            self.body.vel.x = MOVE_SPEED;
        }

        if self.body.grounded && input.jump {
            self.body.grounded = false;
            self.body.jump();
        }
    }

    /// Advance one frame
    pub fn update(&mut self, input: &TickInput) {
        self.body.integrate();

        if self.body.dead {
            self.body.check_fallen_out();
        } else {
            self.handle_input(input);
            self.body.settle_on_ground();
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Which screen edge a bottle enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnSide {
    /// Enters at the top-left corner, drifting right
    Left,
    /// Enters at the top-right corner, drifting left
    Right,
}

/// A falling, rolling bottle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bottle {
    pub id: u32,
    pub side: SpawnSide,
    pub body: Body,
}

impl Bottle {
    /// Spawn just outside the top corner of the chosen side, at y = 0
    pub fn spawn(id: u32, side: SpawnSide) -> Self {
        let mut body = Body::new(Rect::sized(BOTTLE_W, BOTTLE_H));
        match side {
            SpawnSide::Left => {
                body.vel.x = MOVE_SPEED;
                body.rect.set_bottomright(0.0, 0.0);
            }
            SpawnSide::Right => {
                body.vel.x = -MOVE_SPEED;
                body.rect.set_bottomleft(SCREEN_W, 0.0);
            }
        }
        Self { id, side, body }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.body.integrate();

        if self.body.dead {
            self.body.check_fallen_out();
        } else {
            self.body.settle_on_ground();
        }

        // Horizontal out rule, independent of the death fall-out above: gone
        // once the whole rect has scrolled past the edge it was headed for.
        if (self.body.vel.x > 0.0 && self.body.rect.left() > SCREEN_W)
            || (self.body.vel.x < 0.0 && self.body.rect.right() < 0.0)
        {
            self.body.out = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn airborne_body() -> Body {
        // High above the playfield so the ground never interferes
        Body::new(Rect::new(0.0, -1.0e6, BOTTLE_W, BOTTLE_H))
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut body = airborne_body();
        for _ in 0..20 {
            body.integrate();
        }
        assert!((body.vel.y - 20.0 * GRAVITY).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn gravity_accumulates_from_any_start(v0 in -20.0f32..20.0, n in 1usize..200) {
            let mut body = airborne_body();
            body.vel.y = v0;
            for _ in 0..n {
                body.integrate();
            }
            prop_assert!((body.vel.y - (v0 + n as f32 * GRAVITY)).abs() < 1e-2);
        }
    }

    #[test]
    fn test_ground_clamp_is_exact_and_sticky() {
        let mut body = Body::new(Rect::new(0.0, 0.0, BOTTLE_W, BOTTLE_H));
        // Fall until grounded, then stay pinned every frame after
        for _ in 0..200 {
            body.integrate();
            body.settle_on_ground();
        }
        assert!(body.grounded);
        for _ in 0..10 {
            body.integrate();
            body.settle_on_ground();
            assert_eq!(body.rect.bottom(), crate::ground_line());
            assert_eq!(body.vel.y, 0.0);
        }
    }

    #[test]
    fn test_kill_pops_up_and_reverses() {
        let mut body = airborne_body();
        body.vel = Vec2::new(MOVE_SPEED, 3.0);
        body.kill();
        assert!(body.dead);
        assert_eq!(body.vel.x, -MOVE_SPEED);
        assert_eq!(body.vel.y, JUMP_SPEED);
    }

    #[test]
    fn test_dead_body_falls_out_below_ground() {
        let mut player = Player::new();
        player.body.kill();
        let input = TickInput::default();
        // Rises first, then gravity wins and it drops through the floor
        let mut frames = 0;
        while !player.body.out && frames < 1000 {
            player.update(&input);
            frames += 1;
        }
        assert!(player.body.out);
        assert!(player.body.rect.top() > crate::ground_line());
    }

    #[test]
    fn test_player_input_precedence() {
        let mut player = Player::new();
        player.update(&TickInput {
            left: true,
            right: true,
            ..Default::default()
        });
        assert_eq!(player.body.vel.x, -MOVE_SPEED);

        player.update(&TickInput {
            right: true,
            ..Default::default()
        });
        assert_eq!(player.body.vel.x, MOVE_SPEED);

        player.update(&TickInput::default());
        assert_eq!(player.body.vel.x, 0.0);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut player = Player::new();
        // Settle first so grounded is set
        player.update(&TickInput::default());
        assert!(player.body.grounded);

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        player.update(&jump);
        assert!(!player.body.grounded);
        assert!(player.body.vel.y < 0.0);

        // Holding jump mid-air does nothing
        let vel_before = player.body.vel.y;
        player.update(&jump);
        assert!((player.body.vel.y - (vel_before + GRAVITY)).abs() < 1e-3);
    }

    #[test]
    fn test_respawn_position() {
        let mut player = Player::new();
        player.body.kill();
        player.respawn();
        assert!(!player.body.dead);
        assert!(!player.body.out);
        assert_eq!(player.body.rect.center_x(), SCREEN_W / 2.0);
        assert_eq!(player.body.rect.bottom(), crate::ground_line());
    }

    #[test]
    fn test_bottle_spawn_corners() {
        let left = Bottle::spawn(1, SpawnSide::Left);
        assert_eq!(left.body.vel.x, MOVE_SPEED);
        assert_eq!(left.body.rect.right(), 0.0);
        assert_eq!(left.body.rect.bottom(), 0.0);

        let right = Bottle::spawn(2, SpawnSide::Right);
        assert_eq!(right.body.vel.x, -MOVE_SPEED);
        assert_eq!(right.body.rect.left(), SCREEN_W);
        assert_eq!(right.body.rect.bottom(), 0.0);
    }

    #[test]
    fn test_bottle_out_exactly_past_right_edge() {
        let mut bottle = Bottle::spawn(1, SpawnSide::Left);
        // Left edge starts at -BOTTLE_W and gains MOVE_SPEED per frame; it is
        // out only once strictly past SCREEN_W.
        let frames_to_edge = ((SCREEN_W + BOTTLE_W) / MOVE_SPEED) as usize;
        for _ in 0..frames_to_edge {
            bottle.update();
        }
        assert_eq!(bottle.body.rect.left(), SCREEN_W);
        assert!(!bottle.body.out);

        bottle.update();
        assert!(bottle.body.out);
    }

    #[test]
    fn test_bottle_out_exactly_past_left_edge() {
        let mut bottle = Bottle::spawn(1, SpawnSide::Right);
        let frames_to_edge = ((SCREEN_W + BOTTLE_W) / MOVE_SPEED) as usize;
        for _ in 0..frames_to_edge {
            bottle.update();
        }
        assert_eq!(bottle.body.rect.right(), 0.0);
        assert!(!bottle.body.out);

        bottle.update();
        assert!(bottle.body.out);
    }

    #[test]
    fn test_bottle_closed_form_kinematics() {
        // Spawned from the left with speed 5 and gravity 0.5, no collisions:
        // after N frames x = -W + 5N, and until grounded the bottom edge is
        // 0.25 * N * (N + 1).
        let mut bottle = Bottle::spawn(1, SpawnSide::Left);
        for _ in 0..30 {
            bottle.update();
        }
        assert!((bottle.body.rect.left() - (-BOTTLE_W + 5.0 * 30.0)).abs() < 1e-3);
        assert!((bottle.body.rect.bottom() - 0.25 * 30.0 * 31.0).abs() < 1e-2);

        // By frame 100 it has landed and rolls along the ground line
        let mut bottle = Bottle::spawn(1, SpawnSide::Left);
        for _ in 0..100 {
            bottle.update();
        }
        assert!((bottle.body.rect.left() - (-BOTTLE_W + 5.0 * 100.0)).abs() < 1e-3);
        assert_eq!(bottle.body.rect.bottom(), crate::ground_line());
        assert!(bottle.body.grounded);
    }
}
