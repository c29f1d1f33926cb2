//! Kinematic pin constraints used by pointer dragging.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// What a pin holds onto.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PinTarget {
    /// The body's centroid: the whole body is translated.
    Centroid,
    /// A single particle, placed directly on the pin position.
    Particle(usize),
}

/// Holds a point of the body at `position` for one step.
///
/// A centroid pin translates every particle so the centroid lands on
/// `position`, then adds a pull of `-pull_gain · (p - old_centroid)` to each
/// particle. The pull acts at the next integration and makes the body lag
/// and wobble behind the pointer instead of moving rigidly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinConstraint<F: Float> {
    pub target: PinTarget,
    pub position: Vec2<F>,
    pub pull_gain: F,
}

impl<F: Float> PinConstraint<F> {
    pub fn centroid(position: Vec2<F>, pull_gain: F) -> Self {
        PinConstraint { target: PinTarget::Centroid, position, pull_gain }
    }

    pub fn particle(index: usize, position: Vec2<F>) -> Self {
        PinConstraint { target: PinTarget::Particle(index), position, pull_gain: F::zero() }
    }

    /// Apply the pin. Returns the translation of the pinned point.
    pub fn solve(&self, particles: &mut [Particle<F>]) -> Vec2<F> {
        match self.target {
            PinTarget::Centroid => {
                let centroid = Vec2::mean(particles.iter().map(|p| p.pos));
                let translation = self.position - centroid;
                for p in particles.iter_mut() {
                    p.translate(translation);
                    let pull = (p.pos - centroid).scale(-self.pull_gain);
                    p.apply_force(pull);
                }
                translation
            }
            PinTarget::Particle(index) => {
                let translation = self.position - particles[index].pos;
                particles[index].pin_to(self.position);
                translation
            }
        }
    }
}
