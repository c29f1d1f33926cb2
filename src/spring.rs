//! Hookean spring-damper links between particles.

use crate::error::DegenerateGeometry;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// A force-generating spring between two particles, held by index.
///
/// Springs never own particles; indices refer into the owning body's
/// particle array and are valid for the body's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    /// Length at which the spring exerts no force.
    pub rest_length: F,
    /// Rest length at creation. `restore_rest_length` returns to it.
    base_rest_length: F,
    pub stiffness: F,
    /// Damping along the spring axis. 0 disables it.
    pub damping_factor: F,
    /// When set, the damping term opposes closing speed instead of adding
    /// to it.
    pub dissipative: bool,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F) -> Self {
        Spring {
            a,
            b,
            rest_length,
            base_rest_length: rest_length,
            stiffness,
            damping_factor: F::zero(),
            dissipative: false,
        }
    }

    /// Spring whose rest length is the current distance between `a` and `b`.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>], stiffness: F) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Self::new(a, b, rest_length, stiffness)
    }

    pub fn with_damping(mut self, damping_factor: F) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    pub fn with_dissipative_damping(mut self, dissipative: bool) -> Self {
        self.dissipative = dissipative;
        self
    }

    pub fn base_rest_length(&self) -> F {
        self.base_rest_length
    }

    /// Set the rest length to `scale` times its creation value.
    pub fn stretch(&mut self, scale: F) {
        self.rest_length = self.base_rest_length * scale;
    }

    pub fn restore_rest_length(&mut self) {
        self.rest_length = self.base_rest_length;
    }

    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos)
    }

    /// Segment between the two endpoints, for rendering and collision.
    pub fn endpoints(&self, particles: &[Particle<F>]) -> (Vec2<F>, Vec2<F>) {
        (particles[self.a].pos, particles[self.b].pos)
    }

    /// Accumulate the spring and damping force on both endpoints.
    ///
    /// With `dir = normalize(pB - pA)` the force on `b` is
    /// `k·(rest - d)·dir - c·((vA - vB)·dir)·dir`. The damping term is
    /// negated for dissipative springs.
    ///
    /// Returns the force applied to `b` (`a` receives its negation). Positions
    /// are untouched, so calling this R times before integrating applies R
    /// times the force.
    pub fn update(&self, particles: &mut [Particle<F>]) -> Result<Vec2<F>, DegenerateGeometry> {
        let pa = &particles[self.a];
        let pb = &particles[self.b];
        let delta = pb.pos - pa.pos;
        let dir = delta
            .try_normalize()
            .ok_or(DegenerateGeometry::ZeroLengthSpring { a: self.a, b: self.b })?;

        let displacement = self.rest_length - delta.length();
        let spring_force = dir.scale(self.stiffness * displacement);
        // Closing speed along the axis; positive when the endpoints approach.
        let closing = (pa.vel - pb.vel).dot(dir);
        let damping_force = if self.dissipative {
            dir.scale(self.damping_factor * closing)
        } else {
            dir.scale(-self.damping_factor * closing)
        };

        let on_b = spring_force + damping_force;
        particles[self.a].apply_force(-on_b);
        particles[self.b].apply_force(on_b);
        Ok(on_b)
    }
}
