//! Flat per-particle storage presented to the renderer.

use glam::Vec3;
use rand::Rng;

use crate::palette;
use crate::patterns::{self, PatternId};

/// Live particle buffers in GPU-upload layout.
///
/// `positions` and `colors` are flat `[x, y, z, x, y, z, ..]` arrays of
/// length `3 * count`, always. Use the typed accessors instead of doing
/// `i * 3` arithmetic at call sites.
pub struct ParticleField {
    pub count: usize,
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl ParticleField {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            positions: vec![0.0; count * 3],
            colors: vec![0.0; count * 3],
        }
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }

    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.positions[i * 3] = p.x;
        self.positions[i * 3 + 1] = p.y;
        self.positions[i * 3 + 2] = p.z;
    }

    #[inline]
    pub fn color(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.colors[i * 3],
            self.colors[i * 3 + 1],
            self.colors[i * 3 + 2],
        )
    }

    #[inline]
    pub fn set_color(&mut self, i: usize, c: Vec3) {
        self.colors[i * 3] = c.x;
        self.colors[i * 3 + 1] = c.y;
        self.colors[i * 3 + 2] = c.z;
    }

    /// Fill both buffers from the pattern's generator and palette.
    pub fn materialize<R: Rng>(&mut self, pattern: PatternId, rng: &mut R) {
        for i in 0..self.count {
            self.set_position(i, patterns::position(pattern, i, self.count, rng));
            self.set_color(i, palette::sample(pattern, rng));
        }
    }

    /// Rebuild the buffers for a new particle count.
    pub fn resize<R: Rng>(&mut self, count: usize, pattern: PatternId, rng: &mut R) {
        self.count = count;
        self.positions = vec![0.0; count * 3];
        self.colors = vec![0.0; count * 3];
        self.materialize(pattern, rng);
    }
}
