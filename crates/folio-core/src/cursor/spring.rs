//! Damped spring followers for the cursor indicators

use super::{DOT_DAMPING, RING_DAMPING, SPRING_MASS, SPRING_STIFFNESS};

/// A damped spring integrating toward a moving target
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    stiffness: f32,
    damping: f32,
    mass: f32,
    position: f32,
    velocity: f32,
}

impl Spring {
    /// Create a spring at rest at the origin
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            position: 0.0,
            velocity: 0.0,
        }
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Jump to `position` with zero velocity (no animation)
    pub fn snap_to(&mut self, position: f32) {
        self.position = position;
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds toward `target` (semi-implicit Euler)
    pub fn step(&mut self, target: f32, dt: f32) {
        let force = self.stiffness * (target - self.position);
        let drag = self.damping * self.velocity;
        let acceleration = (force - drag) / self.mass;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }
}

/// A 2D follower: one spring per axis
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    x: Spring,
    y: Spring,
}

impl Follower {
    /// Create a follower with the given spring parameters
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            x: Spring::new(stiffness, damping, mass),
            y: Spring::new(stiffness, damping, mass),
        }
    }

    /// Follower tuned for the dot indicator (tight tracking)
    pub fn dot() -> Self {
        Self::new(SPRING_STIFFNESS, DOT_DAMPING, SPRING_MASS)
    }

    /// Follower tuned for the ring indicator (looser trailing)
    pub fn ring() -> Self {
        Self::new(SPRING_STIFFNESS, RING_DAMPING, SPRING_MASS)
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> (f32, f32) {
        (self.x.position(), self.y.position())
    }

    /// Jump to (x, y) with zero velocity
    pub fn snap_to(&mut self, x: f32, y: f32) {
        self.x.snap_to(x);
        self.y.snap_to(y);
    }

    /// Advance both axes by `dt` seconds toward the target
    pub fn step(&mut self, target_x: f32, target_y: f32, dt: f32) {
        self.x.step(target_x, dt);
        self.y.step(target_y, dt);
    }
}
