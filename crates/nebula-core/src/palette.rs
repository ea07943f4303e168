//! Per-pattern color palettes and randomized sampling.

use glam::Vec3;
use rand::Rng;

use crate::patterns::PatternId;

fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// The four base colors of a pattern's palette.
pub fn base_colors(pattern: PatternId) -> [Vec3; 4] {
    match pattern {
        PatternId::Sphere => [rgb(0x0077ff), rgb(0x00aaff), rgb(0x44ccff), rgb(0x0055cc)],
        PatternId::Spiral => [rgb(0x8800cc), rgb(0xcc00ff), rgb(0x660099), rgb(0xaa33ff)],
        PatternId::Helix => [rgb(0x00cc66), rgb(0x33ff99), rgb(0x99ff66), rgb(0x008844)],
        PatternId::Grid => [rgb(0xff9900), rgb(0xffcc33), rgb(0xff6600), rgb(0xffaa55)],
        PatternId::Torus => [rgb(0xff3399), rgb(0xff66aa), rgb(0xff0066), rgb(0xcc0055)],
        PatternId::Vortex => [rgb(0x00bbaa), rgb(0x33ddcc), rgb(0x007788), rgb(0x66ffee)],
        PatternId::Galaxy => [rgb(0x9944ff), rgb(0xccbbff), rgb(0x5522aa), rgb(0xeeddff)],
        PatternId::Wave => [rgb(0x0044aa), rgb(0x3377cc), rgb(0x66aaff), rgb(0x002266)],
        PatternId::Mobius => [rgb(0xddaa22), rgb(0xffdd66), rgb(0xaa7711), rgb(0xffeeaa)],
        PatternId::Supernova => [rgb(0xff5522), rgb(0xffaa00), rgb(0xcc2200), rgb(0xffdd44)],
        PatternId::CubeGrid => [rgb(0x88cc00), rgb(0xbbee33), rgb(0x55aa00), rgb(0xddff88)],
    }
}

/// Pick one base color uniformly, then scale all three channels by a shared
/// brightness factor in `[0.85, 1.15)`. Hue is preserved; channels may exceed
/// 1.0 slightly, which additive renderers treat as bloom.
pub fn sample<R: Rng>(pattern: PatternId, rng: &mut R) -> Vec3 {
    let base = base_colors(pattern)[rng.gen_range(0..4)];
    let variation = 0.85 + rng.gen::<f32>() * 0.3;
    base * variation
}
