use glam::Vec3;
use wasm_bindgen::prelude::*;

use nebula_core::gesture::{AdvanceMode, GestureMapper, ZoomMode, LANDMARK_COUNT};
use nebula_core::scene::{Scene, DEFAULT_PARTICLE_COUNT};

/// GPU-compatible vertex: 24 bytes, position + color, matches the renderer's
/// interleaved point layout.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuVertex {
    position: [f32; 3],
    color: [f32; 3],
}

#[wasm_bindgen]
pub struct World {
    scene: Scene,
    mapper: GestureMapper,
    gpu_buffer: Vec<GpuVertex>,
}

#[wasm_bindgen]
impl World {
    /// `particle_count == 0` selects the canonical default count.
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: usize, seed: u32) -> World {
        let particle_count = if particle_count == 0 {
            DEFAULT_PARTICLE_COUNT
        } else {
            particle_count
        };
        web_sys::console::log_1(
            &format!("nebula World created: {} particles", particle_count).into(),
        );

        let scene = Scene::new(particle_count, seed as u64);
        let gpu_buffer = vec![
            GpuVertex {
                position: [0.0; 3],
                color: [0.0; 3],
            };
            scene.field.count
        ];

        let mut world = World {
            scene,
            mapper: GestureMapper::new(ZoomMode::WristHeight, AdvanceMode::PointingPose),
            gpu_buffer,
        };
        world.write_gpu_output();
        world
    }

    /// Advance the animation by one frame. Returns true when the particle
    /// buffers changed and need a redraw.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> bool {
        let animating =
            self.scene.transition.is_blending() || self.scene.config.wave_intensity > 0.0;
        self.scene.step(dt);
        self.write_gpu_output();
        animating
    }

    /// Feed one perception frame: 21 landmarks as flat `[x, y, z, ..]`.
    /// An empty (or too short) slice means no hand was detected. Returns
    /// true when an advance gesture fired.
    #[wasm_bindgen]
    pub fn update_hand(&mut self, landmarks: &[f32]) -> bool {
        let now = js_sys::Date::now() / 1000.0;
        let hand: Option<Vec<Vec3>> = if landmarks.len() >= LANDMARK_COUNT * 3 {
            Some(
                landmarks
                    .chunks_exact(3)
                    .map(|c| Vec3::new(c[0], c[1], c[2]))
                    .collect(),
            )
        } else {
            None
        };

        let out = self.mapper.map(hand.as_deref(), now);
        if let Some(z) = out.zoom_target {
            self.scene.set_zoom_target(z);
        }
        if out.advance {
            self.scene.advance_pattern();
        }
        out.advance
    }

    /// The single external command: jump to the next pattern. Returns the
    /// new pattern's display name for the UI label.
    #[wasm_bindgen]
    pub fn advance_pattern(&mut self) -> String {
        self.scene.advance_pattern().display_name().to_string()
    }

    #[wasm_bindgen]
    pub fn pattern_name(&self) -> String {
        self.scene.current_pattern.display_name().to_string()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.scene.field.count
    }

    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.scene.field.positions.as_ptr()
    }

    #[wasm_bindgen]
    pub fn colors_ptr(&self) -> *const f32 {
        self.scene.field.colors.as_ptr()
    }

    /// Length of each flat attribute buffer (3 floats per particle).
    #[wasm_bindgen]
    pub fn buffer_len(&self) -> usize {
        self.scene.field.positions.len()
    }

    #[wasm_bindgen]
    pub fn gpu_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn gpu_buffer_byte_length(&self) -> usize {
        self.gpu_buffer.len() * std::mem::size_of::<GpuVertex>()
    }

    #[wasm_bindgen]
    pub fn camera_x(&self) -> f32 {
        self.scene.camera.position.x
    }

    #[wasm_bindgen]
    pub fn camera_y(&self) -> f32 {
        self.scene.camera.position.y
    }

    #[wasm_bindgen]
    pub fn camera_z(&self) -> f32 {
        self.scene.camera.position.z
    }

    #[wasm_bindgen]
    pub fn set_particle_count(&mut self, count: usize) {
        self.scene.set_particle_count(count);
        self.gpu_buffer.resize(
            self.scene.field.count,
            GpuVertex {
                position: [0.0; 3],
                color: [0.0; 3],
            },
        );
        self.write_gpu_output();
    }

    #[wasm_bindgen]
    pub fn set_transition_speed(&mut self, v: f32) {
        self.scene.config.set_transition_speed(v);
    }

    #[wasm_bindgen]
    pub fn set_camera_speed(&mut self, v: f32) {
        self.scene.config.set_camera_speed(v);
    }

    #[wasm_bindgen]
    pub fn set_wave_intensity(&mut self, v: f32) {
        self.scene.config.set_wave_intensity(v);
    }

    #[wasm_bindgen]
    pub fn set_zoom_follow_rate(&mut self, v: f32) {
        self.scene.config.set_zoom_follow_rate(v);
    }

    /// Select the gesture heuristics by index; unknown values fall back to
    /// the defaults.
    #[wasm_bindgen]
    pub fn set_gesture_modes(&mut self, zoom_mode: u32, advance_mode: u32) {
        self.mapper.zoom_mode = match zoom_mode {
            1 => ZoomMode::PinchDistance,
            _ => ZoomMode::WristHeight,
        };
        self.mapper.advance_mode = match advance_mode {
            1 => AdvanceMode::SwipeRight,
            _ => AdvanceMode::PointingPose,
        };
    }
}

impl World {
    fn write_gpu_output(&mut self) {
        let field = &self.scene.field;
        for i in 0..field.count {
            let p = field.position(i);
            let c = field.color(i);
            self.gpu_buffer[i] = GpuVertex {
                position: [p.x, p.y, p.z],
                color: [c.x, c.y, c.z],
            };
        }
    }
}
