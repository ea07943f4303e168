//! Parametric pattern generators.
//!
//! Each generator maps `(i, count)` to a 3D position. The classic set is the
//! five shapes the advance command cycles through; the extended set shares the
//! same contract and is reachable by targeting it directly. `Vortex`,
//! `Galaxy`, and `Supernova` draw from the injected RNG for aesthetic scatter
//! and are intentionally non-deterministic per particle; everything else is a
//! pure function of `(pattern, i, count)`.

pub mod classic;
pub mod extended;

use glam::Vec3;
use rand::Rng;

/// Names one generator function and one palette.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PatternId {
    Sphere,
    Spiral,
    Helix,
    Grid,
    Torus,
    Vortex,
    Galaxy,
    Wave,
    Mobius,
    Supernova,
    CubeGrid,
}

impl PatternId {
    /// Cycling order of the canonical build.
    pub const CYCLE: [PatternId; 5] = [
        PatternId::Sphere,
        PatternId::Spiral,
        PatternId::Helix,
        PatternId::Grid,
        PatternId::Torus,
    ];

    /// Next pattern in the canonical cycle. Extended patterns rejoin the
    /// cycle at its start.
    pub fn next(self) -> PatternId {
        match Self::CYCLE.iter().position(|&p| p == self) {
            Some(idx) => Self::CYCLE[(idx + 1) % Self::CYCLE.len()],
            None => Self::CYCLE[0],
        }
    }

    /// Display name shown by the UI label on pattern changes.
    pub fn display_name(self) -> &'static str {
        match self {
            PatternId::Sphere => "Cosmic Sphere",
            PatternId::Spiral => "Spiral Nebula",
            PatternId::Helix => "Quantum Helix",
            PatternId::Grid => "Stardust Grid",
            PatternId::Torus => "Celestial Torus",
            PatternId::Vortex => "Astral Vortex",
            PatternId::Galaxy => "Galactic Bloom",
            PatternId::Wave => "Solar Tides",
            PatternId::Mobius => "Mobius Drift",
            PatternId::Supernova => "Nova Burst",
            PatternId::CubeGrid => "Crystal Lattice",
        }
    }
}

/// Compute the position of particle `i` of `count` on `pattern`.
///
/// `count == 0` yields the origin; every generator guards its own internal
/// divisors so no input produces NaN or infinity.
pub fn position<R: Rng>(pattern: PatternId, i: usize, count: usize, rng: &mut R) -> Vec3 {
    if count == 0 {
        return Vec3::ZERO;
    }
    match pattern {
        PatternId::Sphere => classic::sphere(i, count),
        PatternId::Spiral => classic::spiral(i, count),
        PatternId::Helix => classic::helix(i, count),
        PatternId::Grid => classic::grid(i, count),
        PatternId::Torus => classic::torus(i, count),
        PatternId::Vortex => extended::vortex(i, count, rng),
        PatternId::Galaxy => extended::galaxy(i, count, rng),
        PatternId::Wave => extended::wave(i, count),
        PatternId::Mobius => extended::mobius(i, count),
        PatternId::Supernova => extended::supernova(i, count, rng),
        PatternId::CubeGrid => extended::cube_grid(i, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(PatternId::Sphere.next(), PatternId::Spiral);
        assert_eq!(PatternId::Torus.next(), PatternId::Sphere);
        // Extended shapes rejoin the cycle
        assert_eq!(PatternId::Supernova.next(), PatternId::Sphere);
    }
}
