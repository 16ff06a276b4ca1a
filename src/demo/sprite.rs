//! The bouncing sprite and its integration step.

use std::ops::{Add, Mul};

/// Degrees of spin applied per second.
const SPIN_RATE: f32 = 90.0;

/// A 2D vector in screen pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// The animated sprite: a position box that drifts, spins and bounces.
///
/// `position` is the top-left corner of the sprite's box in screen pixels;
/// `size` is the texture's pixel dimensions. Velocity components flip sign
/// whenever the box touches the corresponding window edge, so the sprite
/// stays fully visible.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Top-left corner of the sprite box, screen pixels.
    pub position: Vec2,
    /// Drift velocity, pixels per second.
    pub velocity: Vec2,
    /// Rotation about the box center, degrees clockwise.
    pub rotation: f32,
    /// Sprite box dimensions, pixels.
    pub size: Vec2,
}

impl Sprite {
    pub fn new(size: Vec2) -> Self {
        Self {
            position: Vec2::new(400.0, 200.0),
            velocity: Vec2::new(200.0, 200.0),
            rotation: 0.0,
            size,
        }
    }

    /// Advances the sprite by `dt` seconds inside a window of `bounds` pixels.
    pub fn advance(&mut self, dt: f32, bounds: Vec2) {
        self.position = self.position + self.velocity * dt;
        self.rotation += SPIN_RATE * dt;

        if self.position.x <= 0.0 || self.position.x >= bounds.x - self.size.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y <= 0.0 || self.position.y >= bounds.y - self.size.y {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Center of the sprite box, the pivot for rotation.
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2 { x: 1280.0, y: 800.0 };

    /// One step integrates position and rotation linearly.
    #[test]
    fn advance_integrates_position_and_rotation() {
        let mut sprite = Sprite::new(Vec2::new(26.0, 36.0));
        sprite.advance(0.5, BOUNDS);

        assert_eq!(sprite.position, Vec2::new(500.0, 300.0));
        assert_eq!(sprite.rotation, 45.0);
        // No edge was touched, so velocity is unchanged.
        assert_eq!(sprite.velocity, Vec2::new(200.0, 200.0));
    }

    /// Zero dt leaves the sprite exactly where it was.
    #[test]
    fn advance_zero_dt_is_noop() {
        let mut sprite = Sprite::new(Vec2::new(26.0, 36.0));
        let before = sprite.clone();
        sprite.advance(0.0, BOUNDS);

        assert_eq!(sprite.position, before.position);
        assert_eq!(sprite.velocity, before.velocity);
        assert_eq!(sprite.rotation, before.rotation);
    }

    /// Touching the right edge flips the horizontal velocity only.
    #[test]
    fn reflects_at_right_edge() {
        let mut sprite = Sprite::new(Vec2::new(26.0, 36.0));
        sprite.position = Vec2::new(BOUNDS.x - sprite.size.x - 1.0, 300.0);
        sprite.advance(0.1, BOUNDS);

        assert!(sprite.velocity.x < 0.0);
        assert!(sprite.velocity.y > 0.0);
    }

    /// Touching the top edge flips the vertical velocity only.
    #[test]
    fn reflects_at_top_edge() {
        let mut sprite = Sprite::new(Vec2::new(26.0, 36.0));
        sprite.position = Vec2::new(400.0, 1.0);
        sprite.velocity = Vec2::new(200.0, -200.0);
        sprite.advance(0.1, BOUNDS);

        assert!(sprite.velocity.x > 0.0);
        assert!(sprite.velocity.y > 0.0);
    }

    /// Reflection is a sign flip, so speed is preserved across many bounces.
    #[test]
    fn speed_is_preserved_across_bounces() {
        let mut sprite = Sprite::new(Vec2::new(26.0, 36.0));
        for _ in 0..10_000 {
            sprite.advance(1.0 / 60.0, BOUNDS);
        }
        assert_eq!(sprite.velocity.x.abs(), 200.0);
        assert_eq!(sprite.velocity.y.abs(), 200.0);
    }

    /// The rotation pivot sits in the middle of the sprite box.
    #[test]
    fn center_is_midpoint_of_box() {
        let sprite = Sprite::new(Vec2::new(26.0, 36.0));
        assert_eq!(sprite.center(), Vec2::new(413.0, 218.0));
    }
}
