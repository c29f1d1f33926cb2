use approx::assert_relative_eq;
use wobble::{Bounds, DegenerateGeometry, Particle, Spring, Vec2};

#[test]
fn first_update_force_is_k_times_stretch() {
    let rest = 40.0;
    let stretch = 7.0;
    let k = 0.3;
    let mut particles = [
        Particle::new(Vec2::new(100.0f64, 100.0), 1.0, 0.0),
        Particle::new(Vec2::new(100.0 + rest + stretch, 100.0), 1.0, 0.0),
    ];
    let spring = Spring::new(0, 1, rest, k);
    let on_b = spring.update(&mut particles).unwrap();

    assert_relative_eq!(on_b.length(), k * stretch, epsilon = 1e-12);
    assert_relative_eq!(particles[0].force.length(), k * stretch, epsilon = 1e-12);
    // Equal and opposite.
    let net = particles[0].force + particles[1].force;
    assert_eq!(net, Vec2::zero());
}

#[test]
fn stretched_pair_moves_symmetrically_toward_midpoint() {
    let mut particles = [
        Particle::new(Vec2::new(100.0f64, 100.0), 1.0, 0.0),
        Particle::new(Vec2::new(200.0, 100.0), 1.0, 0.0),
    ];
    let midpoint = Vec2::new(150.0, 100.0);
    let spring = Spring::new(0, 1, 50.0, 0.1);
    assert_relative_eq!(spring.current_length(&particles), 100.0);

    spring.update(&mut particles).unwrap();
    let bounds = Bounds::unbounded();
    for p in particles.iter_mut() {
        p.integrate(1.0 / 60.0, &bounds);
    }

    let moved_a = particles[0].pos.x - 100.0;
    let moved_b = 200.0 - particles[1].pos.x;
    assert!(moved_a > 0.0, "a should move toward b");
    assert_relative_eq!(moved_a, moved_b, epsilon = 1e-12);
    assert_eq!(particles[0].pos.y, 100.0);
    assert_eq!(particles[1].pos.y, 100.0);

    let mid = Vec2::mean(particles.iter().map(|p| p.pos));
    assert_relative_eq!(mid.x, midpoint.x, epsilon = 1e-12);

    // Equal masses: total momentum stays zero.
    let momentum = particles[0].vel.scale(particles[0].mass) + particles[1].vel.scale(particles[1].mass);
    assert_relative_eq!(momentum.x, 0.0, epsilon = 1e-12);
}

#[test]
fn zero_length_spring_is_skipped_without_force() {
    let mut particles = [
        Particle::new(Vec2::new(10.0f64, 10.0), 1.0, 0.0),
        Particle::new(Vec2::new(10.0, 10.0), 1.0, 0.0),
    ];
    let spring = Spring::new(0, 1, 5.0, 1.0);
    assert_eq!(
        spring.update(&mut particles),
        Err(DegenerateGeometry::ZeroLengthSpring { a: 0, b: 1 })
    );
    assert_eq!(particles[0].force, Vec2::zero());
}
