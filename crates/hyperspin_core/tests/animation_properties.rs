//! Integration tests for the hypersphere animation
//!
//! These tests drive the public API the way a frame loop would:
//! 1. Sampling produces the expected count of on-sphere points
//! 2. Ticks keep every point and the tracked vector on the sphere
//! 3. Identical inputs produce identical frames
//! 4. A quarter turn in every plane matches the documented composition

use std::f32::consts::FRAC_PI_2;

use hyperspin_core::{
    composer, projector, sampler, AnimationState, HypersphereConfig, RotationPlane, TickError, Vec4,
};
use hyperspin_math::mat4;

const EPSILON: f32 = 0.0001;

/// Length in f64 so the check holds for radii whose square overflows f32
fn length_f64(p: Vec4) -> f64 {
    [p.x, p.y, p.z, p.w].iter().map(|&c| (c as f64) * (c as f64)).sum::<f64>().sqrt()
}

fn assert_on_sphere(points: &[Vec4], radius: f32) {
    for p in points {
        let length = length_f64(*p);
        let rel = (length - radius as f64).abs() / radius as f64;
        assert!(rel < EPSILON as f64, "{:?} has length {} (radius {})", p, length, radius);
    }
}

/// Varying speeds and elapsed times, like a real frame loop
fn varied_config() -> HypersphereConfig {
    HypersphereConfig::new(10, 5.0)
        .with_plane_speed(RotationPlane::XY, 0.3)
        .with_plane_speed(RotationPlane::XZ, -1.2)
        .with_plane_speed(RotationPlane::XW, 2.5)
        .with_plane_speed(RotationPlane::YZ, 0.0)
        .with_plane_speed(RotationPlane::YW, 0.7)
        .with_plane_speed(RotationPlane::ZW, -0.4)
        .with_rotation_speed(1.5)
}

const DELTAS: [f32; 6] = [0.016, 0.017, 0.033, 0.0, 0.25, 0.008];

// ==================== Sampling ====================

#[test]
fn test_sample_count_resolution_8() {
    let points = sampler::sample_hypersphere(8, 2.5);
    assert_eq!(points.len(), 8 * 4 * 8);
    assert_on_sphere(&points, 2.5);
}

#[test]
fn test_initial_cloud_matches_sampler() {
    let config = HypersphereConfig::new(8, 2.5);
    let mut state = AnimationState::new();
    state.initialize(&config).unwrap();
    assert_eq!(state.points(), sampler::sample_hypersphere(8, 2.5).as_slice());
}

// ==================== Renormalization ====================

#[test]
fn test_norm_invariant_holds_after_every_tick() {
    let config = varied_config();
    let mut state = AnimationState::new();
    state.initialize(&config).unwrap();

    for _ in 0..50 {
        for dt in DELTAS {
            state.tick(&config, dt).unwrap();
            assert_on_sphere(state.points(), config.radius);
            assert_on_sphere(&[state.tracked_vector().unwrap()], config.radius);
        }
    }
}

#[test]
fn test_norm_invariant_holds_for_any_valid_radius() {
    for radius in [1.0e-13f32, 1.0e-3, 1.0e6, 1.0e20] {
        let config = HypersphereConfig { radius, ..varied_config() };
        assert!(config.validate().is_ok());

        let mut state = AnimationState::new();
        state.initialize(&config).unwrap();
        for dt in DELTAS {
            state
                .tick(&config, dt)
                .unwrap_or_else(|e| panic!("radius {}: {}", radius, e));
        }

        assert_on_sphere(state.points(), radius);
        assert_on_sphere(&[state.tracked_vector().unwrap()], radius);
    }
}

// ==================== Determinism ====================

#[test]
fn test_identical_runs_produce_identical_frames() {
    let config = varied_config();

    let mut a = AnimationState::new();
    let mut b = AnimationState::new();
    a.initialize(&config).unwrap();
    b.initialize(&config).unwrap();

    for dt in DELTAS.iter().cycle().take(60) {
        let frame_a = a.tick(&config, *dt).unwrap().clone();
        let frame_b = b.tick(&config, *dt).unwrap();
        assert_eq!(frame_a.points, frame_b.points);
        assert_eq!(frame_a.vector, frame_b.vector);
    }
}

// ==================== Composition ====================

#[test]
fn test_single_plane_composition_reduces_to_plane_rotation() {
    for plane in RotationPlane::ALL {
        let config = HypersphereConfig::new(4, 1.0)
            .with_uniform_speed(0.0)
            .with_plane_speed(plane, 1.0);

        let composite = composer::composite_rotation(&config, 0.6).unwrap();
        assert_eq!(composite, mat4::plane_rotation(plane, 0.6), "plane {}", plane);
    }
}

#[test]
fn test_zero_speeds_leave_points_unchanged() {
    let config = HypersphereConfig::new(8, 5.0)
        .with_uniform_speed(0.0)
        .with_rotation_speed(0.0);
    let mut state = AnimationState::new();
    state.initialize(&config).unwrap();
    let before = state.points().to_vec();

    for dt in DELTAS {
        state.tick(&config, dt).unwrap();
    }

    for (a, b) in before.iter().zip(state.points()) {
        assert!((*a - *b).length() < EPSILON, "{:?} moved to {:?}", a, b);
    }
}

// ==================== Projection ====================

#[test]
fn test_projection_sanity() {
    for radius in [0.5f32, 1.0, 7.0] {
        assert_eq!(projector::project(Vec4::ZERO, radius).position, [0.0, 0.0, 0.0]);
        assert_eq!(
            projector::project(Vec4::new(radius, 0.0, 0.0, 0.0), radius).position,
            [radius, 0.0, 0.0]
        );
    }
}

#[test]
fn test_projection_singularity_does_not_fail_tick() {
    let config = HypersphereConfig::new(4, 1.0)
        .with_uniform_speed(0.0)
        .with_plane_speed(RotationPlane::ZW, 1.0);
    let mut state = AnimationState::new();
    state.initialize(&config).unwrap();

    // Three quarters of a ZW turn carry the +Z pole (the first sample) to w = -1
    let frame = state.tick(&config, 3.0 * FRAC_PI_2).unwrap();
    assert!(frame.clamped_projections > 0);
    for p in &frame.points {
        assert!(p.position.iter().all(|c| c.is_finite()), "{:?}", p);
    }
}

// ==================== Error propagation ====================

#[test]
fn test_bad_inputs_abort_only_that_tick() {
    let config = varied_config();
    let mut state = AnimationState::new();
    state.initialize(&config).unwrap();
    state.tick(&config, 0.016).unwrap();

    assert!(matches!(state.tick(&config, f32::INFINITY), Err(TickError::InvalidElapsed(_))));
    let bad = config.clone().with_rotation_speed(f32::NAN);
    assert!(matches!(state.tick(&bad, 0.016), Err(TickError::NonFiniteSpeed { .. })));

    // The next natural tick succeeds
    state.tick(&config, 0.016).unwrap();
    assert_eq!(state.tick_count(), 2);
}

// ==================== End to end ====================

#[test]
fn test_quarter_turn_in_all_planes() {
    let config = HypersphereConfig::new(4, 1.0)
        .with_uniform_speed(1.0)
        .with_rotation_speed(1.0);
    let mut state = AnimationState::new();
    state.initialize(&config).unwrap();

    let initial = state.points().to_vec();
    let initial_vector = state.tracked_vector().unwrap();

    let frame = state.tick(&config, FRAC_PI_2).unwrap().clone();

    let expected = mat4::mul(
        mat4::mul(
            mat4::mul(
                mat4::mul(
                    mat4::mul(
                        mat4::plane_rotation(RotationPlane::XY, FRAC_PI_2),
                        mat4::plane_rotation(RotationPlane::XZ, FRAC_PI_2),
                    ),
                    mat4::plane_rotation(RotationPlane::XW, FRAC_PI_2),
                ),
                mat4::plane_rotation(RotationPlane::YZ, FRAC_PI_2),
            ),
            mat4::plane_rotation(RotationPlane::YW, FRAC_PI_2),
        ),
        mat4::plane_rotation(RotationPlane::ZW, FRAC_PI_2),
    );

    let actual = state.last_transform().unwrap();
    for (a, e) in actual.iter().flatten().zip(expected.iter().flatten()) {
        assert!((a - e).abs() < EPSILON, "composite {:?} != {:?}", actual, expected);
    }

    assert_eq!(frame.points.len(), 4 * 2 * 4);
    assert_on_sphere(state.points(), 1.0);
    assert_on_sphere(&[state.tracked_vector().unwrap()], 1.0);

    for (before, after) in initial.iter().zip(state.points()) {
        let rotated = mat4::transform(expected, *before);
        assert!((rotated - *after).length() < EPSILON);
    }
    let rotated_vector = mat4::transform(expected, initial_vector);
    assert!((rotated_vector - state.tracked_vector().unwrap()).length() < EPSILON);
}
