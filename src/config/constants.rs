// Derivation constants for the wave rig.
use std::f32::consts::E;

// Crest shaping factors. Narrowness is (factor * 2) / crest width.
pub const SHAPE_FACTOR_STANDARD: f32 = 2.0;
pub const SHAPE_FACTOR_HIGH_PRECISION: f32 = E;

// Cycle mode parks the wave this many scene spans outside the timeline.
// Previously authored scenes depend on these exact values.
pub const PARK_MULTIPLIER_OUT: i32 = -514;
pub const PARK_MULTIPLIER_IN: i32 = 114;

// Default animation markers
pub const DEFAULT_FRAME_START: i32 = 0;
pub const DEFAULT_FRAME_END: i32 = 100;
pub const DEFAULT_FRAME_ZERO: i32 = 5;
pub const DEFAULT_FRAME_STOP: i32 = 10;

pub const DEFAULT_FREQUENCY: i32 = 10;

// Soft minimum for the crest width; the narrowness derivation divides by
// the width, so zero produces an infinite narrowness.
pub const MIN_WAVE_WIDTH: f32 = 0.01;
