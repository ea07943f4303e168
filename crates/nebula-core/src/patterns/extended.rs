//! Extended shape set.
//!
//! Same `(i, count)` contract as the classic module. `vortex`, `galaxy`, and
//! `supernova` sample the RNG for scatter, so two invocations differ unless
//! the RNG is reseeded; the rest are deterministic.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Funnel vortex: radius narrows toward the bottom, rotation tightens.
pub fn vortex<R: Rng>(i: usize, count: usize, rng: &mut R) -> Vec3 {
    let t = i as f32 / count.max(1) as f32;
    let h = t + rng.gen::<f32>() * 0.05;
    let radius = 5.0 + 30.0 * h;
    let angle = 3.0 * TAU * (1.0 - h) + i as f32 * 0.1;
    Vec3::new(angle.cos() * radius, (h - 0.5) * 60.0, angle.sin() * radius)
}

/// Four-armed spiral galaxy with twist increasing outward. Arm width and
/// disc thickness come from the RNG.
pub fn galaxy<R: Rng>(i: usize, count: usize, rng: &mut R) -> Vec3 {
    let arms = 4;
    let per_arm = (count / arms).max(1) as f32;
    let along = (i / arms) as f32 / per_arm;
    let radius = along * 40.0;
    let width_jitter = (rng.gen::<f32>() * 2.0 - 1.0) * 0.15;
    let angle = TAU / arms as f32 * (i % arms) as f32 + 2.5 * along + width_jitter;
    let vertical = (rng.gen::<f32>() * 2.0 - 1.0) * 5.0 * (1.0 - along * 0.8);
    Vec3::new(angle.cos() * radius, vertical, angle.sin() * radius)
}

/// Plane of layered sine waves over a square grid.
pub fn wave(i: usize, count: usize) -> Vec3 {
    let grid = ((count.max(1) as f32).sqrt().ceil() as usize).max(1);
    let spacing = 60.0 / grid as f32;
    let x = (i % grid) as f32 * spacing - 30.0;
    let z = (i / grid) as f32 * spacing - 30.0;
    let y = (x * 0.1).sin() * (z * 0.1).cos() * 10.0
        + (x * 0.25).sin() * (z * 0.21).cos() * 3.0;
    Vec3::new(x, y, z)
}

/// Mobius strip, major radius 25, width 10, half-twist.
pub fn mobius(i: usize, count: usize) -> Vec3 {
    let radius = 25.0_f32;
    let width = 10.0_f32;
    let length_steps = (count.max(1) as f32).sqrt().max(1.0);
    let width_steps = (count.max(1) as f32 / length_steps).max(1.0);
    let fi = i as f32;
    let u = (fi % length_steps) / length_steps;
    let v = ((fi / length_steps).floor() % width_steps) / width_steps - 0.5;
    let theta = u * TAU;
    let rim = radius + width * v * (theta / 2.0).cos();
    Vec3::new(
        rim * theta.cos(),
        rim * theta.sin(),
        width * v * (theta / 2.0).sin(),
    )
}

/// Exploding shell: a dense core for the first fifth of the indices, the rest
/// weighted toward an outer shell. Radial distance comes from the RNG.
pub fn supernova<R: Rng>(i: usize, count: usize, rng: &mut R) -> Vec3 {
    let n = count.max(1) as f32;
    let t = i as f32 / n;
    let phi = (1.0 - 2.0 * t).clamp(-1.0, 1.0).acos();
    // Golden-ratio azimuth stepping, reduced in f64 like the torus tube angle.
    let theta = ((i as f64 * (1.0 + 5.0_f64.sqrt())).fract() * std::f64::consts::TAU) as f32;
    let r: f32 = rng.gen();
    let normalized = if t < 0.2 {
        r.powf(0.5) * 0.3
    } else {
        0.3 + r.powf(0.7) * 0.7
    };
    let radius = normalized * 40.0;
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    ) * radius
}

/// Hollow cube: six 2D face lattices instead of a filled volume.
pub fn cube_grid(i: usize, count: usize) -> Vec3 {
    let count = count.max(1);
    let side = ((count as f32).cbrt().ceil() as usize).max(1);
    let spacing = 60.0 / side as f32;
    let half = (side - 1) as f32 * spacing / 2.0;
    let per_face = (count / 6).max(1);
    let face = i / per_face;
    let on_face = i % per_face;
    let side2d = ((per_face as f32).sqrt().ceil() as usize).max(1);
    // The -1 denominators collapse at tiny counts; the guard is load-bearing.
    let denom = (side2d - 1).max(1) as f32;
    let rx = (on_face % side2d) as f32 / denom;
    let ry = (on_face / side2d) as f32 / denom;
    let x = rx * spacing * (side - 1) as f32 - half;
    let y = ry * spacing * (side - 1) as f32 - half;
    match face % 6 {
        0 => Vec3::new(x, y, half),
        1 => Vec3::new(x, y, -half),
        2 => Vec3::new(x, half, y),
        3 => Vec3::new(x, -half, y),
        4 => Vec3::new(half, x, y),
        _ => Vec3::new(-half, x, y),
    }
}
