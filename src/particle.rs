//! Point masses with explicit (semi-implicit Euler) integration.

use crate::config::Bounds;
use crate::float::Float;
use crate::vec::Vec2;

/// A point mass with a force accumulator.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    /// Forces accumulated since the last `integrate`.
    pub force: Vec2<F>,
    pub mass: F,
    pub radius: F,
    /// Velocity retention per step, in (0, 1].
    pub damping: F,
}

impl<F: Float> Particle<F> {
    /// A particle at rest with no damping. Mass must be positive; `SoftBody`
    /// validates it before building particles.
    pub fn new(pos: Vec2<F>, mass: F, radius: F) -> Self {
        Particle {
            pos,
            vel: Vec2::zero(),
            force: Vec2::zero(),
            mass,
            radius,
            damping: F::one(),
        }
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2<F>) -> Self {
        self.vel = vel;
        self
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.force += force;
    }

    /// Reflect velocity off walls the particle is touching or beyond.
    ///
    /// Runs before the spring pass so a particle pushed outside by a drag
    /// heads back in. Uses the raw walls, not the radius inset.
    pub fn check_wall_collision(&mut self, bounds: &Bounds<F>, restitution: F) -> bool {
        let mut hit = false;
        if self.pos.x <= F::zero() || self.pos.x >= bounds.width {
            self.vel.x = -self.vel.x * restitution;
            hit = true;
        }
        if self.pos.y <= F::zero() || self.pos.y >= bounds.height {
            self.vel.y = -self.vel.y * restitution;
            hit = true;
        }
        hit
    }

    /// Advance one step, then clamp into `bounds` shrunk by the radius.
    ///
    /// On a clamp the velocity component along the violated wall is turned
    /// to point back inside. The force accumulator is always cleared.
    pub fn integrate(&mut self, dt: F, bounds: &Bounds<F>) {
        let accel = self.force.scale(F::one() / self.mass);
        self.vel += accel.scale(dt);
        self.pos += self.vel.scale(dt);
        self.vel = self.vel.scale(self.damping);
        self.force = Vec2::zero();

        let clamped = bounds.clamp(self.pos, self.radius);
        if clamped.x != self.pos.x {
            self.vel.x = if clamped.x > self.pos.x { self.vel.x.abs() } else { -self.vel.x.abs() };
        }
        if clamped.y != self.pos.y {
            self.vel.y = if clamped.y > self.pos.y { self.vel.y.abs() } else { -self.vel.y.abs() };
        }
        self.pos = clamped;
    }

    /// Hold the particle at `target`: position set, motion and forces cleared.
    pub fn pin_to(&mut self, target: Vec2<F>) {
        self.pos = target;
        self.vel = Vec2::zero();
        self.force = Vec2::zero();
    }

    pub fn translate(&mut self, delta: Vec2<F>) {
        self.pos += delta;
    }
}
