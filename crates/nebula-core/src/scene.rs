//! Frame-driven animation context: owns the field, the blend state, the
//! camera, and the clock. One instance per point cloud; nothing global.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{VisualConfig, MAX_CAMERA_Z, MIN_CAMERA_Z};
use crate::field::ParticleField;
use crate::math::clamp_finite;
use crate::patterns::PatternId;
use crate::transition::Transition;

/// Canonical particle count for a new scene when the embedder has no opinion.
pub const DEFAULT_PARTICLE_COUNT: usize = 25_000;

const MAX_PARTICLE_COUNT: usize = 1_000_000;

/// Orbiting camera. `position.z` eases toward `target_z`; the orbit x/y are
/// derived from the already-smoothed z so zoom and orbit stay coupled.
pub struct Camera {
    pub position: Vec3,
    pub target_z: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 100.0),
            target_z: 100.0,
        }
    }
}

pub struct Scene {
    pub field: ParticleField,
    pub config: VisualConfig,
    pub transition: Transition,
    pub camera: Camera,
    pub current_pattern: PatternId,
    time: f32,
    rng: SmallRng,
}

impl Scene {
    /// Create a scene with pattern 0 already materialized into the field.
    pub fn new(particle_count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut field = ParticleField::new(particle_count);
        let current_pattern = PatternId::CYCLE[0];
        field.materialize(current_pattern, &mut rng);
        Self {
            field,
            config: VisualConfig::default(),
            transition: Transition::Idle,
            camera: Camera::default(),
            current_pattern,
            time: 0.0,
            rng,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// One render tick. Returns the pattern committed this tick, if a blend
    /// finished.
    pub fn step(&mut self, dt: f32) -> Option<PatternId> {
        self.time += dt;

        // Ambient drift, suspended while blending so it doesn't fight the
        // interpolation. Scaled by dt for frame-rate independence.
        if !self.transition.is_blending() {
            let intensity = self.config.wave_intensity;
            for i in 0..self.field.count {
                let n1 = (self.time * 0.5 + i as f32 * 0.01).sin() * intensity;
                let n2 = (self.time * 0.3 + i as f32 * 0.02).cos() * intensity;
                self.field.positions[i * 3] += n1 * dt * 5.0;
                self.field.positions[i * 3 + 1] += n2 * dt * 5.0;
            }
        }

        let committed =
            self.transition
                .tick(&mut self.field, dt, self.config.transition_speed);
        if let Some(p) = committed {
            self.current_pattern = p;
        }

        let cam = &mut self.camera;
        cam.position.z += (cam.target_z - cam.position.z) * self.config.zoom_follow_rate;
        let angle_x = self.time * self.config.camera_speed;
        let angle_y = self.time * self.config.camera_speed * 0.75;
        cam.position.x = angle_x.cos() * cam.position.z;
        cam.position.y = angle_y.sin() * 35.0 + 5.0;

        committed
    }

    /// Advance to the next pattern in the cycle. Semantics are identical for
    /// the gesture path and external UI triggers.
    pub fn advance_pattern(&mut self) -> PatternId {
        let base = self.transition.target().unwrap_or(self.current_pattern);
        let next = base.next();
        self.begin_transition(next);
        next
    }

    /// Begin blending toward `target`, force-completing any blend in flight.
    pub fn begin_transition(&mut self, target: PatternId) {
        if let Some(p) = self.transition.begin(&mut self.field, target, &mut self.rng) {
            self.current_pattern = p;
        }
    }

    /// Zoom target from the gesture mapper or any other controller.
    pub fn set_zoom_target(&mut self, z: f32) {
        self.camera.target_z = clamp_finite(z, MIN_CAMERA_Z, MAX_CAMERA_Z);
    }

    /// Live particle-count change. An in-flight blend is resolved to its
    /// endpoint first, then the field is rebuilt at the new count with the
    /// resulting pattern.
    pub fn set_particle_count(&mut self, count: usize) {
        let count = count.clamp(1, MAX_PARTICLE_COUNT);
        if count == self.field.count {
            return;
        }
        if let Some(p) = self.transition.force_complete(&mut self.field) {
            self.current_pattern = p;
        }
        let pattern = self.current_pattern;
        self.field.resize(count, pattern, &mut self.rng);
    }
}
