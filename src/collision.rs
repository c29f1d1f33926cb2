//! Wall reflection and spring-segment vs. obstacle-edge collision.
//!
//! Obstacle contact is penalty based: an endpoint that ended up on the wrong
//! side of an edge is moved a fraction of the way back and its velocity is
//! damped. Hits within one step are resolved independently, so overlapping
//! corrections may partially cancel. There is no continuous detection; a
//! spring that jumps entirely past an edge in one step is not caught.

use crate::config::Bounds;
use crate::error::DegenerateGeometry;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::polygon::Polygon;
use crate::spring::Spring;
use crate::vec::Vec2;

/// True if `a`, `b`, `c` wind counter-clockwise (strictly).
fn ccw<F: Float>(a: Vec2<F>, b: Vec2<F>, c: Vec2<F>) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Orientation test: do segments `a1-a2` and `b1-b2` cross?
///
/// Cheap reject before `line_intersection`. Collinear and touching cases
/// report no crossing.
pub fn segment_intersect<F: Float>(a1: Vec2<F>, a2: Vec2<F>, b1: Vec2<F>, b2: Vec2<F>) -> bool {
    ccw(a1, b1, b2) != ccw(a2, b1, b2) && ccw(a1, a2, b1) != ccw(a1, a2, b2)
}

/// Intersection point of the infinite lines through `a1-a2` and `b1-b2`.
///
/// Each line is written as `A·x + B·y = C` and the pair solved by Cramer's
/// rule. `None` when the determinant is zero (parallel or degenerate lines).
pub fn line_intersection<F: Float>(
    a1: Vec2<F>,
    a2: Vec2<F>,
    b1: Vec2<F>,
    b2: Vec2<F>,
) -> Option<Vec2<F>> {
    let line = |p: Vec2<F>, q: Vec2<F>| (p.y - q.y, q.x - p.x, q.x * p.y - p.x * q.y);
    let (a_1, b_1, c_1) = line(a1, a2);
    let (a_2, b_2, c_2) = line(b1, b2);

    let det = a_1 * b_2 - b_1 * a_2;
    if det == F::zero() {
        return None;
    }
    let dx = c_1 * b_2 - b_1 * c_2;
    let dy = a_1 * c_2 - c_1 * a_2;
    Some(Vec2::new(dx / det, dy / det))
}

/// Unit normal of edge `v1 → v2`: the edge direction rotated clockwise
/// (in y-up terms). For a polygon whose vertices wind counter-clockwise in
/// y-up coordinates this points outward.
pub fn edge_normal<F: Float>(v1: Vec2<F>, v2: Vec2<F>) -> Result<Vec2<F>, DegenerateGeometry> {
    (v2 - v1)
        .try_normalize()
        .map(|dir| -dir.perp())
        .ok_or(DegenerateGeometry::ZeroLengthEdge)
}

/// Distance of `point` from the line through `v1-v2`, along `edge_normal`.
/// Negative on the penetrating side.
pub fn signed_distance<F: Float>(
    point: Vec2<F>,
    v1: Vec2<F>,
    v2: Vec2<F>,
) -> Result<F, DegenerateGeometry> {
    Ok(edge_normal(v1, v2)?.dot(point - v1))
}

/// Tuning for obstacle contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionResponse<F: Float> {
    /// Fraction `c ∈ (0, 1)` of the penetration removed per hit.
    pub correction_factor: F,
    /// Velocity retention on hit.
    pub damping: F,
    /// Fraction of tangential velocity removed on hit.
    pub friction: F,
}

impl<F: Float> CollisionResponse<F> {
    pub fn new(correction_factor: F, damping: F, friction: F) -> Self {
        CollisionResponse { correction_factor, damping, friction }
    }
}

impl<F: Float> Default for CollisionResponse<F> {
    fn default() -> Self {
        let tenth = F::from_f64(0.1);
        CollisionResponse::new(tenth, tenth, tenth)
    }
}

/// Push the endpoints of `spring` that sit on the wrong side of edge
/// `v1 → v2` back toward it.
///
/// Returns how many endpoints were corrected (0–2).
pub fn handle_collision<F: Float>(
    spring: &Spring<F>,
    v1: Vec2<F>,
    v2: Vec2<F>,
    particles: &mut [Particle<F>],
    response: &CollisionResponse<F>,
) -> Result<usize, DegenerateGeometry> {
    let (p1, p2) = spring.endpoints(particles);
    let hit = line_intersection(p1, p2, v1, v2).ok_or(DegenerateGeometry::ParallelLines)?;
    let normal = edge_normal(v1, v2)?;
    let tangent = normal.perp();

    let mut corrected = 0;
    for idx in [spring.a, spring.b] {
        let particle = &mut particles[idx];
        let depth = normal.dot(particle.pos - hit);
        if depth >= F::zero() {
            continue;
        }
        // Projection onto the edge line is `pos - depth·normal`.
        let correction = normal.scale(-depth);
        particle.pos += correction.scale(response.correction_factor);

        particle.vel = particle.vel.scale(response.damping);
        let tangential = particle.vel.dot(tangent);
        particle.vel -= tangent.scale(tangential * response.friction);
        corrected += 1;
    }
    Ok(corrected)
}

/// Totals from one obstacle pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Spring/edge pairs whose segments crossed.
    pub hits: usize,
    /// Endpoint corrections applied.
    pub corrected: usize,
    /// Hits skipped as degenerate.
    pub skipped: usize,
}

/// Runs the wall and obstacle passes for a body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionResolver<F: Float> {
    pub bounds: Bounds<F>,
    pub wall_restitution: F,
    pub response: CollisionResponse<F>,
}

impl<F: Float> CollisionResolver<F> {
    pub fn new(bounds: Bounds<F>, wall_restitution: F, response: CollisionResponse<F>) -> Self {
        CollisionResolver { bounds, wall_restitution, response }
    }

    /// Reflect velocities of particles at or past a wall. Returns the count.
    pub fn resolve_walls(&self, particles: &mut [Particle<F>]) -> usize {
        particles
            .iter_mut()
            .map(|p| p.check_wall_collision(&self.bounds, self.wall_restitution))
            .filter(|hit| *hit)
            .count()
    }

    /// Test every spring against every obstacle edge and resolve crossings.
    ///
    /// Endpoint positions are read live, so a correction made for one edge
    /// is visible to the next test.
    pub fn resolve_obstacles<O: StepObserver>(
        &self,
        springs: &[Spring<F>],
        particles: &mut [Particle<F>],
        obstacles: &[Polygon<F>],
        observer: &mut O,
    ) -> CollisionStats {
        let mut stats = CollisionStats::default();
        if obstacles.is_empty() {
            return stats;
        }
        for (si, spring) in springs.iter().enumerate() {
            for obstacle in obstacles {
                for (v1, v2) in obstacle.edges() {
                    let (p1, p2) = spring.endpoints(particles);
                    if !segment_intersect(p1, p2, v1, v2) {
                        continue;
                    }
                    stats.hits += 1;
                    match handle_collision(spring, v1, v2, particles, &self.response) {
                        Ok(corrected) => {
                            stats.corrected += corrected;
                            observer.on_collision(si, corrected);
                        }
                        Err(kind) => {
                            log::trace!("skipping collision for spring {}: {}", si, kind);
                            stats.skipped += 1;
                            observer.on_degenerate(kind);
                        }
                    }
                }
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64) -> Vec2<f64> {
        Vec2::new(x, y)
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(segment_intersect(v(0.0, 0.0), v(10.0, 10.0), v(0.0, 10.0), v(10.0, 0.0)));
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        assert!(!segment_intersect(v(0.0, 0.0), v(1.0, 1.0), v(5.0, 0.0), v(6.0, 1.0)));
        // Lines cross but the segments stop short.
        assert!(!segment_intersect(v(0.0, 0.0), v(1.0, 0.0), v(5.0, -1.0), v(5.0, 1.0)));
    }

    #[test]
    fn line_intersection_solves_crossing() {
        let p = line_intersection(v(0.0, 0.0), v(10.0, 10.0), v(0.0, 10.0), v(10.0, 0.0)).unwrap();
        assert_relative_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        assert_eq!(line_intersection(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(1.0, 1.0)), None);
    }

    #[test]
    fn built_in_shapes_have_outward_normals() {
        for shape in [Polygon::square(v(0.0, 0.0), 1.0), Polygon::triangle(v(0.0, 0.0), 1.0)] {
            for (v1, v2) in shape.edges() {
                let n = edge_normal(v1, v2).unwrap();
                let mid = Vec2::mean([v1, v2]);
                // Outward: moving along the normal leaves the shape.
                assert!(!shape.contains(mid + n.scale(0.05)));
                assert!(shape.contains(mid - n.scale(0.05)));
            }
        }
    }

    #[test]
    fn zero_length_edge_is_degenerate() {
        assert_eq!(edge_normal(v(1.0, 1.0), v(1.0, 1.0)), Err(DegenerateGeometry::ZeroLengthEdge));
    }

    #[test]
    fn penetrating_endpoint_is_pushed_toward_edge() {
        // Top edge of a square centered at the origin, y-up winding.
        let (v1, v2) = (v(-10.0, -10.0), v(10.0, -10.0));
        let mut particles = [
            Particle::new(v(0.0, -20.0), 1.0, 0.0),
            Particle::new(v(0.0, -5.0), 1.0, 0.0).with_velocity(v(4.0, 2.0)),
        ];
        let spring = Spring::from_particles(0, 1, &particles, 1.0);
        let before = signed_distance(particles[1].pos, v1, v2).unwrap();
        assert!(before < 0.0);

        let corrected =
            handle_collision(&spring, v1, v2, &mut particles, &CollisionResponse::default()).unwrap();
        assert_eq!(corrected, 1);

        let after = signed_distance(particles[1].pos, v1, v2).unwrap();
        assert_relative_eq!(after, 0.9 * before, epsilon = 1e-12);
        // Outside endpoint untouched.
        assert_eq!(particles[0].pos, v(0.0, -20.0));
        // Velocity damped by 0.1, then 10% of tangential (x) removed.
        assert_relative_eq!(particles[1].vel.x, 0.36, epsilon = 1e-12);
        assert_relative_eq!(particles[1].vel.y, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn signed_distance_increases_for_any_correction_factor() {
        let (v1, v2) = (v(0.0, 0.0), v(40.0, 10.0));
        for c in [0.01, 0.1, 0.5, 0.9, 0.99] {
            let mut particles = [
                Particle::new(v(20.0, 30.0), 1.0, 0.0),
                Particle::new(v(18.0, -15.0), 1.0, 0.0),
            ];
            let spring = Spring::from_particles(0, 1, &particles, 1.0);
            let depths: [f64; 2] = [
                signed_distance(particles[0].pos, v1, v2).unwrap(),
                signed_distance(particles[1].pos, v1, v2).unwrap(),
            ];
            let response = CollisionResponse::new(c, 1.0, 0.0);
            handle_collision(&spring, v1, v2, &mut particles, &response).unwrap();
            for (i, before) in depths.iter().enumerate() {
                let after = signed_distance(particles[i].pos, v1, v2).unwrap();
                if *before < 0.0 {
                    assert!(after > *before, "c = {}: {} -> {}", c, before, after);
                } else {
                    assert_eq!(after, *before);
                }
            }
        }
    }

    #[test]
    fn parallel_spring_is_reported() {
        let mut particles = [
            Particle::new(v(0.0, 0.0), 1.0, 0.0),
            Particle::new(v(10.0, 0.0), 1.0, 0.0),
        ];
        let spring = Spring::from_particles(0, 1, &particles, 1.0);
        let result = handle_collision(
            &spring,
            v(0.0, 5.0),
            v(10.0, 5.0),
            &mut particles,
            &CollisionResponse::default(),
        );
        assert_eq!(result, Err(DegenerateGeometry::ParallelLines));
    }

    #[test]
    fn resolver_counts_hits() {
        let resolver = CollisionResolver::new(
            Bounds::unbounded(),
            0.9,
            CollisionResponse::default(),
        );
        let mut particles = alloc::vec![
            Particle::new(v(0.0, -20.0), 1.0, 0.0),
            Particle::new(v(0.0, -5.0), 1.0, 0.0),
        ];
        let springs = [Spring::from_particles(0, 1, &particles, 1.0)];
        let obstacles = [Polygon::square(v(0.0, 0.0), 10.0)];
        let stats = resolver.resolve_obstacles(
            &springs,
            &mut particles,
            &obstacles,
            &mut crate::observer::NoOpStepObserver,
        );
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.corrected, 1);
        assert_eq!(stats.skipped, 0);
    }
}
