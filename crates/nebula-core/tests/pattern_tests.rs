use glam::Vec3;
use nebula_core::patterns::{self, classic, PatternId};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const ALL: [PatternId; 11] = [
    PatternId::Sphere,
    PatternId::Spiral,
    PatternId::Helix,
    PatternId::Grid,
    PatternId::Torus,
    PatternId::Vortex,
    PatternId::Galaxy,
    PatternId::Wave,
    PatternId::Mobius,
    PatternId::Supernova,
    PatternId::CubeGrid,
];

#[test]
fn test_all_patterns_finite_for_all_counts() {
    let mut rng = SmallRng::seed_from_u64(1);
    for pattern in ALL {
        for count in [1usize, 2, 3, 6, 7, 8, 100, 1000] {
            for i in 0..count {
                let p = patterns::position(pattern, i, count, &mut rng);
                assert!(
                    p.is_finite(),
                    "{pattern:?} produced non-finite {p:?} at i={i}, count={count}"
                );
            }
        }
    }
}

#[test]
fn test_all_patterns_bounded() {
    // Every generator spans roughly a 60-unit volume around the origin.
    let mut rng = SmallRng::seed_from_u64(2);
    for pattern in ALL {
        for i in 0..2000 {
            let p = patterns::position(pattern, i, 2000, &mut rng);
            assert!(
                p.length() < 120.0,
                "{pattern:?} out of bounds at i={i}: {p:?}"
            );
        }
    }
}

#[test]
fn test_zero_count_yields_origin() {
    let mut rng = SmallRng::seed_from_u64(3);
    for pattern in ALL {
        assert_eq!(patterns::position(pattern, 0, 0, &mut rng), Vec3::ZERO);
    }
}

#[test]
fn test_sphere_on_surface() {
    for i in 0..500 {
        let r = classic::sphere(i, 500).length();
        assert!((r - 30.0).abs() < 1e-3, "sphere radius {r} at i={i}");
    }
}

#[test]
fn test_helix_fixed_radius() {
    for i in 0..300 {
        let p = classic::helix(i, 300);
        let r = (p.x * p.x + p.y * p.y).sqrt();
        assert!((r - 15.0).abs() < 1e-3, "helix radius {r} at i={i}");
        assert!(p.z.abs() <= 30.0 + 1e-3, "helix height {} at i={i}", p.z);
    }
}

#[test]
fn test_torus_on_surface() {
    // Distance from the tube's center circle must equal the minor radius.
    for i in 0..400 {
        let p = classic::torus(i, 400);
        let ring = (p.x * p.x + p.y * p.y).sqrt() - 30.0;
        let tube = (ring * ring + p.z * p.z).sqrt();
        assert!((tube - 10.0).abs() < 1e-2, "torus tube radius {tube} at i={i}");
    }
}

#[test]
fn test_grid_eight_particles_are_cube_corners() {
    // count=8: side = ceil(cbrt(8)) = 2, spacing = 30, half extent 15.
    let mut seen: Vec<Vec3> = Vec::new();
    for i in 0..8 {
        let p = classic::grid(i, 8);
        assert!((p.x.abs() - 15.0).abs() < 1e-4, "{p:?}");
        assert!((p.y.abs() - 15.0).abs() < 1e-4, "{p:?}");
        assert!((p.z.abs() - 15.0).abs() < 1e-4, "{p:?}");
        for q in &seen {
            assert!((p - *q).length() > 1.0, "corner collision: {p:?} vs {q:?}");
        }
        seen.push(p);
    }
}

#[test]
fn test_grid_odd_side_center_is_nudged() {
    // count=27: side 3, the middle index sits at the lattice center.
    let side = 3usize;
    let center = 1 + 1 * side + 1 * side * side;
    let p = classic::grid(center, 27);
    assert!(
        p.length() > 1e-3,
        "center particle should be nudged off the origin, got {p:?}"
    );
    // Neighbours stay on the lattice.
    let q = classic::grid(0, 27);
    assert!((q.x + 20.0).abs() < 1e-4, "{q:?}");
}

#[test]
fn test_deterministic_patterns_repeatable() {
    let deterministic = [
        PatternId::Sphere,
        PatternId::Spiral,
        PatternId::Helix,
        PatternId::Grid,
        PatternId::Torus,
        PatternId::Wave,
        PatternId::Mobius,
        PatternId::CubeGrid,
    ];
    // Different RNGs must not matter for the pure generators.
    let mut rng_a = SmallRng::seed_from_u64(4);
    let mut rng_b = SmallRng::seed_from_u64(999);
    for pattern in deterministic {
        for i in 0..50 {
            let a = patterns::position(pattern, i, 50, &mut rng_a);
            let b = patterns::position(pattern, i, 50, &mut rng_b);
            assert_eq!(a, b, "{pattern:?} should ignore the RNG");
        }
    }
}

#[test]
fn test_stochastic_patterns_reproducible_by_seed() {
    for pattern in [PatternId::Vortex, PatternId::Galaxy, PatternId::Supernova] {
        let mut rng_a = SmallRng::seed_from_u64(5);
        let mut rng_b = SmallRng::seed_from_u64(5);
        for i in 0..50 {
            let a = patterns::position(pattern, i, 50, &mut rng_a);
            let b = patterns::position(pattern, i, 50, &mut rng_b);
            assert_eq!(a, b, "{pattern:?} should be reproducible under one seed");
        }
    }
}

#[test]
fn test_display_names() {
    assert_eq!(PatternId::Sphere.display_name(), "Cosmic Sphere");
    assert_eq!(PatternId::Torus.display_name(), "Celestial Torus");
    for pattern in ALL {
        assert!(!pattern.display_name().is_empty());
    }
}
