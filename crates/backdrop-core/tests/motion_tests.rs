// Smoothing, repulsion and idle convergence of the cube fields.

use backdrop_core::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn still_params() -> FieldParams {
    FieldParams {
        count: 8,
        float_amplitude: 0.0,
        ..FieldParams::repulsion_field()
    }
}

#[test]
fn damp_moves_a_fixed_fraction_of_the_gap() {
    assert_eq!(damp(0.0, 10.0, 0.1), 1.0);
    assert_eq!(damp(10.0, 10.0, 0.1), 10.0);
    let v = damp_vec2(Vec2::ZERO, Vec2::new(4.0, -8.0), 0.25);
    assert_eq!(v, Vec2::new(1.0, -2.0));
}

#[test]
fn force_is_zero_at_and_beyond_the_radius() {
    let r = Repulsion::new(25.0, 5.0);
    assert_eq!(r.force(25.0), 0.0);
    assert_eq!(r.force(30.0), 0.0);
    assert!((r.force(24.0) - 0.04).abs() < 1e-6);
    assert_eq!(r.force(0.0), 1.0);

    // 15-20-25 triangle: exactly on the radius
    assert!(r.push_from(Vec2::ZERO, Vec2::new(15.0, 20.0)).is_none());
    assert!(r.push_from(Vec2::ZERO, Vec2::new(15.0, 19.9)).is_some());
}

#[test]
fn push_points_away_from_the_repeller_and_scales_linearly() {
    let r = Repulsion::new(20.0, 6.0);
    let p = r.push_from(Vec2::new(10.0, 0.0), Vec2::new(0.0, 0.0)).unwrap();
    assert!((p.force - 0.5).abs() < 1e-6);
    assert!((p.offset - Vec2::new(-3.0, 0.0)).length() < 1e-5);

    let near = r.push_from(Vec2::ZERO, Vec2::new(0.0, 5.0)).unwrap();
    let far = r.push_from(Vec2::ZERO, Vec2::new(0.0, 15.0)).unwrap();
    assert!(near.offset.y > far.offset.y);
    assert!((near.force - (20.0 - 5.0) / 20.0).abs() < 1e-6);
    assert!((far.force - (20.0 - 15.0) / 20.0).abs() < 1e-6);
}

#[test]
fn coincident_primitive_is_pushed_along_positive_x() {
    let r = Repulsion::new(25.0, 5.0);
    let p = r.push_from(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0)).unwrap();
    assert_eq!(p.force, 1.0);
    assert!((p.offset - Vec2::new(5.0, 0.0)).length() < 1e-6);
}

#[test]
fn idle_primitives_decay_towards_origin_geometrically() {
    let params = still_params();
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = Field::scatter(params, &mut rng);
    for p in &mut field.primitives {
        p.position += Vec3::new(10.0, -6.0, 0.0);
    }
    let far = Vec2::splat(1.0e6);
    let k = field.params.idle_damping;

    let mut prev: Vec<f32> = field
        .primitives
        .iter()
        .map(|p| (p.position - p.seed.origin).length())
        .collect();
    for frame in 0..60 {
        field.step(far, frame as f32 / 60.0);
        for (p, before) in field.primitives.iter().zip(prev.iter_mut()) {
            let now = (p.position - p.seed.origin).length();
            assert!(now < *before, "distance grew on frame {frame}");
            assert!(now > 0.0, "reached origin exactly on frame {frame}");
            assert!(((now / *before) - (1.0 - k)).abs() < 1e-3);
            assert_eq!(p.force, 0.0);
            *before = now;
        }
    }
}

#[test]
fn z_is_never_touched_by_the_update() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = Field::scatter(FieldParams::cube_field(), &mut rng);
    let zs: Vec<f32> = field.primitives.iter().map(|p| p.position.z).collect();
    for frame in 0..30 {
        field.step(Vec2::ZERO, frame as f32 * 0.016);
    }
    for (p, z) in field.primitives.iter().zip(zs) {
        assert_eq!(p.position.z, z);
    }
}

#[test]
fn repelled_primitive_heads_for_displaced_target_and_spins_faster() {
    let params = still_params();
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = Field::scatter(params, &mut rng);
    let repulsion = field.repulsion;
    let p = &mut field.primitives[0];
    let origin = p.seed.origin.truncate();
    let repeller = origin - Vec2::new(10.0, 0.0);
    let rot_before = p.rotation;

    p.step(repeller, 0.0, &field.params, &repulsion);

    let force = (20.0 - 10.0) / 20.0;
    assert!((p.force - force).abs() < 1e-5);
    // target = origin + (+x) * force * push; first step covers repel_damping of the gap
    let expected_x = origin.x + force * field.params.push * field.params.repel_damping;
    assert!((p.position.x - expected_x).abs() < 1e-4);
    assert!((p.position.y - origin.y).abs() < 1e-4);
    let extra = field.params.extra_spin * force;
    assert!((p.rotation.x - (rot_before.x + p.seed.spin.x + extra)).abs() < 1e-5);
    assert!((p.rotation.y - (rot_before.y + p.seed.spin.y + extra)).abs() < 1e-5);
}

#[test]
fn rotation_accumulates_spin_without_clamping() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = Field::scatter(still_params(), &mut rng);
    let start: Vec<Vec3> = field.primitives.iter().map(|p| p.rotation).collect();
    let far = Vec2::splat(1.0e6);
    for _ in 0..1000 {
        field.step(far, 0.0);
    }
    for (p, r0) in field.primitives.iter().zip(start) {
        let expected = r0.x + p.seed.spin.x * 1000.0;
        assert!((p.rotation.x - expected).abs() < 1e-2);
    }
}

#[test]
fn cube_field_floats_within_amplitude_when_idle() {
    let params = FieldParams::cube_field();
    let amp = params.float_amplitude;
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = Field::scatter(params, &mut rng);
    let far = Vec2::splat(1.0e6);
    for frame in 0..600 {
        field.step(far, frame as f32 / 60.0);
    }
    for p in &field.primitives {
        assert!((p.position.x - p.seed.origin.x).abs() < 1e-3);
        assert!((p.position.y - p.seed.origin.y).abs() <= amp + 1e-3);
    }
}
