use wobble::collision::{handle_collision, line_intersection, segment_intersect, signed_distance};
use wobble::{CollisionResponse, Particle, Polygon, Spring, Vec2};

#[test]
fn spring_through_triangle_edge_is_pushed_out() {
    let triangle = Polygon::triangle(Vec2::new(400.0f64, 300.0), 20.0);
    // Base edge, right to left along y = 320; a spring poking up into the triangle.
    let (v1, v2) = triangle.edges().nth(2).unwrap();
    assert_eq!((v1.y, v2.y), (320.0, 320.0));
    let mut particles = [
        Particle::new(Vec2::new(400.0, 340.0), 1.0, 0.0),
        Particle::new(Vec2::new(400.0, 310.0), 1.0, 0.0),
    ];
    let spring = Spring::from_particles(0, 1, &particles, 1.0);
    assert!(segment_intersect(particles[0].pos, particles[1].pos, v1, v2));

    let inside_before = signed_distance(particles[1].pos, v1, v2).unwrap();
    let outside_before = signed_distance(particles[0].pos, v1, v2).unwrap();
    assert!(inside_before < 0.0 && outside_before > 0.0);

    for c in [0.05, 0.1, 0.5, 0.95] {
        let mut trial = particles.clone();
        let response = CollisionResponse::new(c, 0.1, 0.1);
        let corrected = handle_collision(&spring, v1, v2, &mut trial, &response).unwrap();
        assert_eq!(corrected, 1);
        let inside_after = signed_distance(trial[1].pos, v1, v2).unwrap();
        assert!(inside_after > inside_before, "c = {}", c);
        assert_eq!(trial[0].pos, particles[0].pos);
    }

    handle_collision(&spring, v1, v2, &mut particles, &CollisionResponse::default()).unwrap();
    assert!(triangle.contains(particles[1].pos));
}

#[test]
fn intersection_lies_on_both_segments() {
    let a1 = Vec2::new(0.0f64, 0.0);
    let a2 = Vec2::new(4.0, 8.0);
    let b1 = Vec2::new(0.0, 6.0);
    let b2 = Vec2::new(6.0, 0.0);
    assert!(segment_intersect(a1, a2, b1, b2));
    let p = line_intersection(a1, a2, b1, b2).unwrap();
    assert!((p.x - 2.0).abs() < 1e-12);
    assert!((p.y - 4.0).abs() < 1e-12);
}
