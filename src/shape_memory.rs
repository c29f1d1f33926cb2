//! Rest-shape memory: pull every particle toward its rest offset from
//! the current centroid.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Offsets of each particle from the centroid, captured once.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeMemory<F: Float> {
    offsets: AllocVec<Vec2<F>>,
}

impl<F: Float> ShapeMemory<F> {
    /// Record `positions[i] - centroid(positions)` for every particle.
    pub fn capture<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Vec2<F>>,
        I::IntoIter: Clone,
    {
        let iter = positions.into_iter();
        let centroid = Vec2::mean(iter.clone());
        ShapeMemory { offsets: iter.map(|p| p - centroid).collect() }
    }

    pub fn offsets(&self) -> &[Vec2<F>] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Where particle `i` would sit if the body held its rest shape around
    /// `centroid`.
    pub fn desired_position(&self, i: usize, centroid: Vec2<F>) -> Vec2<F> {
        centroid + self.offsets[i]
    }

    /// `-gain · (p_i - (centroid + offset_i))` for each particle.
    pub fn restoring_forces(&self, particles: &[Particle<F>], gain: F) -> AllocVec<Vec2<F>> {
        let centroid = Vec2::mean(particles.iter().map(|p| p.pos));
        particles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.pos - self.desired_position(i, centroid)).scale(-gain))
            .collect()
    }

    /// Accumulate restoring forces; they act at the next integration.
    pub fn apply(&self, particles: &mut [Particle<F>], gain: F) {
        let centroid = Vec2::mean(particles.iter().map(|p| p.pos));
        for (i, p) in particles.iter_mut().enumerate() {
            let desired = self.desired_position(i, centroid);
            p.apply_force((p.pos - desired).scale(-gain));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn square(origin: Vec2<f64>) -> AllocVec<Particle<f64>> {
        vec![
            Particle::new(origin, 1.0, 0.0),
            Particle::new(origin + Vec2::new(10.0, 0.0), 1.0, 0.0),
            Particle::new(origin + Vec2::new(10.0, 10.0), 1.0, 0.0),
            Particle::new(origin + Vec2::new(0.0, 10.0), 1.0, 0.0),
        ]
    }

    #[test]
    fn offsets_sum_to_zero() {
        let particles = square(Vec2::new(3.0, 4.0));
        let memory = ShapeMemory::capture(particles.iter().map(|p| p.pos));
        let sum = memory.offsets().iter().fold(Vec2::zero(), |acc, o| acc + *o);
        assert_eq!(sum, Vec2::zero());
    }

    #[test]
    fn translated_rest_shape_has_no_force() {
        let memory = ShapeMemory::capture(square(Vec2::new(0.0, 0.0)).iter().map(|p| p.pos));
        let moved = square(Vec2::new(250.0, -40.0));
        for f in memory.restoring_forces(&moved, 1.0) {
            assert_eq!(f, Vec2::zero());
        }
    }

    #[test]
    fn displaced_particle_is_pulled_back() {
        let mut particles = square(Vec2::new(0.0, 0.0));
        let memory = ShapeMemory::capture(particles.iter().map(|p| p.pos));
        particles[2].pos = Vec2::new(14.0, 10.0);
        memory.apply(&mut particles, 2.0);
        assert!(particles[2].force.x < 0.0);
        // Net restoring force is zero: the centroid is not pushed.
        let net = particles.iter().fold(Vec2::zero(), |acc, p| acc + p.force);
        assert!(net.length() < 1e-12);
    }
}
