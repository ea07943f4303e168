//! Hand-landmark signal mapping.
//!
//! Consumes already-detected hand landmarks (21 normalized points per frame,
//! y growing downward) and produces two control signals: a continuous camera
//! zoom target and a discrete, edge-triggered "advance pattern" event. Never
//! touches the particle buffers.

use glam::Vec3;

use crate::config::{MAX_CAMERA_Z, MIN_CAMERA_Z};

/// Landmark indices in the standard 21-point hand model.
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// Seconds between two advance events. Fires inside the window are
/// suppressed, not queued.
pub const ADVANCE_COOLDOWN: f64 = 2.0;

const SWIPE_TRIGGER: f32 = 0.2;
const SWIPE_RESET: f32 = -0.02;
const MIN_PINCH: f32 = 0.02;
const MAX_PINCH: f32 = 0.25;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ZoomMode {
    /// Wrist height, inverse-mapped: hand high on screen zooms out.
    WristHeight,
    /// Thumb-tip/index-tip distance: wider pinch pulls the camera in.
    PinchDistance,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdvanceMode {
    /// Index finger pointing up while the other fingers stay down.
    PointingPose,
    /// Accumulated rightward wrist motion.
    SwipeRight,
}

/// Control outputs derived from one perception frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureOutput {
    /// New zoom target, `None` when no hand was visible this frame.
    pub zoom_target: Option<f32>,
    /// True exactly once per recognized advance gesture.
    pub advance: bool,
}

/// Stateful mapper from landmark frames to control signals. One instance per
/// tracked hand; accumulators reset whenever the hand is lost so a
/// reappearing hand starts a fresh gesture.
pub struct GestureMapper {
    pub zoom_mode: ZoomMode,
    pub advance_mode: AdvanceMode,
    last_advance_time: f64,
    swipe_accum: f32,
    last_wrist_x: Option<f32>,
}

impl GestureMapper {
    pub fn new(zoom_mode: ZoomMode, advance_mode: AdvanceMode) -> Self {
        Self {
            zoom_mode,
            advance_mode,
            last_advance_time: f64::NEG_INFINITY,
            swipe_accum: 0.0,
            last_wrist_x: None,
        }
    }

    /// Map one perception frame. `now` is a monotonic clock in seconds,
    /// supplied by the caller so the cooldown window is testable.
    pub fn map(&mut self, landmarks: Option<&[Vec3]>, now: f64) -> GestureOutput {
        let hand = match landmarks {
            Some(l) if l.len() >= LANDMARK_COUNT => l,
            _ => {
                self.swipe_accum = 0.0;
                self.last_wrist_x = None;
                return GestureOutput::default();
            }
        };

        let zoom_target = Some(self.zoom_target(hand));

        let fired = match self.advance_mode {
            AdvanceMode::PointingPose => pointing_up(hand),
            AdvanceMode::SwipeRight => self.swipe_fired(hand[WRIST].x),
        };
        let advance = fired && now >= self.last_advance_time + ADVANCE_COOLDOWN;
        if advance {
            self.last_advance_time = now;
        }

        GestureOutput { zoom_target, advance }
    }

    fn zoom_target(&self, hand: &[Vec3]) -> f32 {
        let z = match self.zoom_mode {
            ZoomMode::WristHeight => {
                // Clamp the input to its domain before mapping, then clamp
                // the output again.
                let y = hand[WRIST].y.clamp(0.0, 1.0);
                MIN_CAMERA_Z + (1.0 - y) * (MAX_CAMERA_Z - MIN_CAMERA_Z)
            }
            ZoomMode::PinchDistance => {
                let a = hand[THUMB_TIP];
                let b = hand[INDEX_TIP];
                let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2))
                    .sqrt()
                    .clamp(MIN_PINCH, MAX_PINCH);
                let t = (d - MIN_PINCH) / (MAX_PINCH - MIN_PINCH);
                MAX_CAMERA_Z - t * (MAX_CAMERA_Z - MIN_CAMERA_Z)
            }
        };
        z.clamp(MIN_CAMERA_Z, MAX_CAMERA_Z)
    }

    /// Accumulate rightward wrist motion frame-over-frame. Any leftward step
    /// past the reset threshold zeroes the accumulator, so slow jitter can
    /// never build up to a trigger. Firing resets both the accumulator and
    /// the baseline.
    fn swipe_fired(&mut self, wrist_x: f32) -> bool {
        let last_x = match self.last_wrist_x.replace(wrist_x) {
            Some(x) => x,
            None => return false,
        };
        let dx = wrist_x - last_x;
        if dx < SWIPE_RESET {
            self.swipe_accum = 0.0;
            return false;
        }
        if dx > 0.0 {
            self.swipe_accum += dx;
        }
        if self.swipe_accum >= SWIPE_TRIGGER {
            self.swipe_accum = 0.0;
            // Baseline already moved to the firing frame by the replace()
            // above, so the gesture cannot retrigger mid-swipe.
            true
        } else {
            false
        }
    }
}

/// Index tip above its own PIP joint by a margin and above the other three
/// non-thumb fingertips. Screen y grows downward, so "above" means smaller y.
fn pointing_up(hand: &[Vec3]) -> bool {
    let tip = hand[INDEX_TIP];
    tip.y < hand[INDEX_PIP].y - 0.05
        && tip.y < hand[MIDDLE_TIP].y - 0.03
        && tip.y < hand[RING_TIP].y - 0.03
        && tip.y < hand[PINKY_TIP].y - 0.03
}
