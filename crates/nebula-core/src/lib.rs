//! Morphing point-cloud core.
//!
//! Computes a deterministic 3D position and color for every particle of a
//! named pattern, blends whole particle fields between patterns with eased
//! interpolation, and maps hand-landmark input to camera zoom and pattern
//! advance signals. Rendering, windowing, and the perception model live
//! outside this crate; it only fills flat position/color buffers and emits
//! control values.

pub mod config;
pub mod field;
pub mod gesture;
pub mod math;
pub mod palette;
pub mod patterns;
pub mod scene;
pub mod transition;
