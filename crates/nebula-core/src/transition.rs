//! Cross-pattern blending of whole particle fields.

use rand::Rng;

use crate::field::ParticleField;
use crate::math::{ease_in_out_cubic, lerp};
use crate::palette;
use crate::patterns::{self, PatternId};

/// Progress is tuned against a 60 ticks/sec baseline so the configured speed
/// means the same thing at any frame rate.
const FRAME_RATE_NORMALIZATION: f32 = 60.0;

/// Blend state. `Blending` holds full snapshots of both endpoints so the live
/// field can be rewritten from scratch every tick without drift.
pub enum Transition {
    Idle,
    Blending {
        from_positions: Vec<f32>,
        to_positions: Vec<f32>,
        from_colors: Vec<f32>,
        to_colors: Vec<f32>,
        target: PatternId,
        progress: f32,
    },
}

impl Transition {
    pub fn is_blending(&self) -> bool {
        matches!(self, Transition::Blending { .. })
    }

    /// Target pattern of the in-flight blend, if any.
    pub fn target(&self) -> Option<PatternId> {
        match self {
            Transition::Idle => None,
            Transition::Blending { target, .. } => Some(*target),
        }
    }

    pub fn progress(&self) -> f32 {
        match self {
            Transition::Idle => 0.0,
            Transition::Blending { progress, .. } => *progress,
        }
    }

    /// Start blending the field toward `target`.
    ///
    /// A blend already in flight is force-completed first, so the new `from`
    /// snapshot is always a single pattern's endpoint and never a three-way
    /// mix. Returns the pattern committed by that preemption, if any.
    pub fn begin<R: Rng>(
        &mut self,
        field: &mut ParticleField,
        target: PatternId,
        rng: &mut R,
    ) -> Option<PatternId> {
        let preempted = self.force_complete(field);

        let count = field.count;
        let mut to_positions = vec![0.0; count * 3];
        let mut to_colors = vec![0.0; count * 3];
        for i in 0..count {
            let p = patterns::position(target, i, count, rng);
            to_positions[i * 3] = p.x;
            to_positions[i * 3 + 1] = p.y;
            to_positions[i * 3 + 2] = p.z;
            let c = palette::sample(target, rng);
            to_colors[i * 3] = c.x;
            to_colors[i * 3 + 1] = c.y;
            to_colors[i * 3 + 2] = c.z;
        }

        *self = Transition::Blending {
            from_positions: field.positions.clone(),
            to_positions,
            from_colors: field.colors.clone(),
            to_colors,
            target,
            progress: 0.0,
        };
        preempted
    }

    /// Advance the blend by one tick and rewrite the live field.
    ///
    /// Returns the target pattern once progress reaches 1 and the endpoint
    /// arrays are committed verbatim. A snapshot/live length mismatch aborts
    /// the blend into `Idle` without touching the field.
    pub fn tick(
        &mut self,
        field: &mut ParticleField,
        dt: f32,
        speed: f32,
    ) -> Option<PatternId> {
        enum Outcome {
            Continue,
            Done,
            Abort,
        }

        let outcome = match self {
            Transition::Idle => return None,
            Transition::Blending {
                from_positions,
                to_positions,
                from_colors,
                to_colors,
                progress,
                ..
            } => {
                *progress += speed * dt * FRAME_RATE_NORMALIZATION;
                if *progress >= 1.0 {
                    Outcome::Done
                } else if from_positions.len() != field.positions.len()
                    || to_positions.len() != field.positions.len()
                    || from_colors.len() != field.colors.len()
                    || to_colors.len() != field.colors.len()
                {
                    Outcome::Abort
                } else {
                    let eased = ease_in_out_cubic(*progress);
                    for (dst, (a, b)) in field
                        .positions
                        .iter_mut()
                        .zip(from_positions.iter().zip(to_positions.iter()))
                    {
                        *dst = lerp(*a, *b, eased);
                    }
                    for (dst, (a, b)) in field
                        .colors
                        .iter_mut()
                        .zip(from_colors.iter().zip(to_colors.iter()))
                    {
                        *dst = lerp(*a, *b, eased);
                    }
                    Outcome::Continue
                }
            }
        };

        match outcome {
            Outcome::Continue => None,
            Outcome::Done => self.force_complete(field),
            Outcome::Abort => {
                *self = Transition::Idle;
                None
            }
        }
    }

    /// Jump straight to the commit step: write the `to` arrays verbatim and
    /// return to `Idle`. No-op when idle; a mismatched snapshot is dropped
    /// without writing.
    pub fn force_complete(&mut self, field: &mut ParticleField) -> Option<PatternId> {
        match std::mem::replace(self, Transition::Idle) {
            Transition::Idle => None,
            Transition::Blending {
                to_positions,
                to_colors,
                target,
                ..
            } => {
                if to_positions.len() == field.positions.len()
                    && to_colors.len() == field.colors.len()
                {
                    field.positions.copy_from_slice(&to_positions);
                    field.colors.copy_from_slice(&to_colors);
                    Some(target)
                } else {
                    None
                }
            }
        }
    }
}
