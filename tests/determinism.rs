use wobble::{BodyConfig, NoOpStepObserver, PointerState, Polygon, SoftBody, Vec2};

fn run() -> Vec<Vec2<f64>> {
    let config = BodyConfig::new().with_gravity(Vec2::new(0.0, 300.0));
    let mut body = SoftBody::new(config).unwrap();
    let mut obstacles = vec![
        Polygon::square(Vec2::new(400.0, 470.0), 30.0),
        Polygon::triangle(Vec2::new(330.0, 500.0), 25.0),
    ];
    let grab = body.centroid();
    for i in 0..240 {
        let pointer = match i {
            0..=9 => PointerState::held(grab),
            10..=39 => PointerState::held(grab + Vec2::new(i as f64, 0.0)),
            _ => PointerState::none(),
        };
        if i == 120 {
            obstacles[0].translate(Vec2::new(-15.0, 0.0));
        }
        body.step(1.0 / 60.0, &pointer, &obstacles, &mut NoOpStepObserver);
    }
    body.positions()
}

#[test]
fn identical_inputs_give_identical_trajectories() {
    let first = run();
    for _ in 0..3 {
        let again = run();
        for (a, b) in first.iter().zip(again.iter()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }
}

#[test]
fn f32_body_is_deterministic_too() {
    let results: Vec<_> = (0..3)
        .map(|_| {
            let mut body = SoftBody::new(BodyConfig::<f32>::new()).unwrap();
            for _ in 0..120 {
                body.step(1.0 / 60.0, &PointerState::none(), &[], &mut NoOpStepObserver);
            }
            body.positions()
        })
        .collect();
    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}
