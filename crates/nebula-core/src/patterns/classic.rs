//! The five canonical shapes the advance command cycles through.
//!
//! All generators here are deterministic in `(i, count)`.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Surface sphere of radius 30.
///
/// Latitude is uniform in `cos(phi)`; azimuth uses a count-scaled multiplier
/// (`theta = 2*pi*t*sqrt(count)`) so coverage stays visually even as the
/// count grows. Not a true equal-area scheme.
pub fn sphere(i: usize, count: usize) -> Vec3 {
    let n = count.max(1) as f32;
    let t = i as f32 / n;
    let phi = (2.0 * t - 1.0).clamp(-1.0, 1.0).acos();
    let theta = TAU * t * n.sqrt();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    ) * 30.0
}

/// Three-armed spiral. Radius grows linearly, angle as `t^0.7` so the pitch
/// tightens outward; a small sine keeps it near-planar.
pub fn spiral(i: usize, count: usize) -> Vec3 {
    let t = i as f32 / count.max(1) as f32;
    let arms = 3;
    let arm_offset = TAU / arms as f32 * (i % arms) as f32;
    let angle = t.powf(0.7) * 15.0 + arm_offset;
    let radius = t * 40.0;
    let height = (t * TAU).sin() * 5.0;
    Vec3::new(angle.cos() * radius, angle.sin() * radius, height)
}

/// Two interleaved strands of fixed radius 15, phase-offset by pi.
pub fn helix(i: usize, count: usize) -> Vec3 {
    let strands = 2;
    let per_strand = (count / strands).max(1) as f32;
    let t = (i / strands) as f32 / per_strand;
    let angle = t * PI * 10.0 + (i % strands) as f32 * PI;
    let radius = 15.0;
    let height = (t - 0.5) * 60.0;
    Vec3::new(angle.cos() * radius, angle.sin() * radius, height)
}

/// Cube lattice, side `ceil(cbrt(count))`, spanning 60 units.
pub fn grid(i: usize, count: usize) -> Vec3 {
    let side = ((count.max(1) as f32).cbrt().ceil() as usize).max(1);
    let spacing = 60.0 / side as f32;
    let half = (side - 1) as f32 * spacing / 2.0;
    let iz = i / (side * side);
    let iy = (i % (side * side)) / side;
    let ix = i % side;
    // An odd lattice puts one particle exactly on the origin, which reads as
    // a dead pixel at the visual center; nudge it off.
    let mid = side / 2;
    if side % 2 == 1 && ix == mid && iy == mid && iz == mid {
        return Vec3::splat(spacing * 0.1);
    }
    Vec3::new(
        ix as f32 * spacing - half,
        iy as f32 * spacing - half,
        iz as f32 * spacing - half,
    )
}

/// Torus with major radius 30 and minor radius 10.
///
/// The tube angle steps by `sqrt(5)` turns per index, decorrelating it from
/// the around-angle `u` for quasi-uniform coverage without stratification.
pub fn torus(i: usize, count: usize) -> Vec3 {
    let big_r = 30.0_f32;
    let small_r = 10.0_f32;
    let u = i as f32 / count.max(1) as f32 * TAU;
    // Reduce in f64 before the trig call; i*sqrt(5) outgrows f32 precision
    // long before the default particle count.
    let v = ((i as f64 * 5.0_f64.sqrt()).fract() * std::f64::consts::TAU) as f32;
    Vec3::new(
        (big_r + small_r * v.cos()) * u.cos(),
        (big_r + small_r * v.cos()) * u.sin(),
        small_r * v.sin(),
    )
}
