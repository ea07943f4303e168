use crate::math::clamp_finite;

/// Camera zoom limits, shared by the gesture mapper and the scene.
pub const MIN_CAMERA_Z: f32 = 40.0;
pub const MAX_CAMERA_Z: f32 = 250.0;

/// Live animation knobs. All setters clamp out-of-range values instead of
/// rejecting them, so external UIs can write anything at any time.
pub struct VisualConfig {
    /// Transition progress added per tick at the 60 fps baseline.
    pub transition_speed: f32,
    /// Orbit angular speed in radians per second.
    pub camera_speed: f32,
    /// Amplitude of the ambient per-particle drift.
    pub wave_intensity: f32,
    /// First-order smoothing rate for camera zoom follow.
    pub zoom_follow_rate: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            transition_speed: 0.015,
            camera_speed: 0.08,
            wave_intensity: 0.2,
            zoom_follow_rate: 0.05,
        }
    }
}

impl VisualConfig {
    pub fn set_transition_speed(&mut self, v: f32) {
        self.transition_speed = clamp_finite(v, 0.001, 0.05);
    }

    pub fn set_camera_speed(&mut self, v: f32) {
        self.camera_speed = clamp_finite(v, 0.01, 0.5);
    }

    pub fn set_wave_intensity(&mut self, v: f32) {
        self.wave_intensity = clamp_finite(v, 0.0, 1.0);
    }

    pub fn set_zoom_follow_rate(&mut self, v: f32) {
        self.zoom_follow_rate = clamp_finite(v, 0.005, 1.0);
    }
}
