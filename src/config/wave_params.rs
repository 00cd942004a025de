use bevy::prelude::*;

use super::constants::{
    DEFAULT_FRAME_END, DEFAULT_FRAME_START, DEFAULT_FRAME_STOP, DEFAULT_FRAME_ZERO,
    DEFAULT_FREQUENCY, SHAPE_FACTOR_HIGH_PRECISION, SHAPE_FACTOR_STANDARD,
};

/// Which way the wave travels across the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Diffuse outward from the source point.
    #[default]
    Out,
    /// Shrink inward toward the source point.
    In,
}

impl Direction {
    pub fn is_out(self) -> bool {
        matches!(self, Self::Out)
    }
}

/// Artist-facing wave configuration, one record per rigged object.
///
/// Every field edit is picked up by the rig's update systems and re-runs
/// the full derivation onto the object's [`WaveModifier`]. The in-mode
/// markers `frame_zero`/`frame_stop` live behind clamping setters so the
/// pair always satisfies `frame_zero < frame_stop`.
///
/// [`WaveModifier`]: crate::modifier::WaveModifier
#[derive(Component, Debug, Clone, PartialEq)]
pub struct WaveParameters {
    /// Width of each crest. Soft minimum [`MIN_WAVE_WIDTH`]; a zero width
    /// pushes an infinite narrowness into the modifier.
    ///
    /// [`MIN_WAVE_WIDTH`]: super::constants::MIN_WAVE_WIDTH
    pub width: f32,
    /// Shape crests with `e` instead of 2.0.
    pub width_use_high_precision: bool,
    /// Gap between crests, >= 0.
    pub space: f32,
    /// Oscillations over the scene range, >= 1.
    pub frequency: i32,
    pub direction: Direction,
    /// Timeline slide applied in cycle mode.
    pub offset: i32,
    /// Park the wave outside the timeline for a seamless loop.
    pub cycle: bool,
    /// First animated frame (out mode).
    pub frame_start: i32,
    /// Last animated frame (out mode).
    pub frame_end: i32,
    // Hidden backing slots for the clamped in-mode markers.
    zero: i32,
    stop: i32,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            width: 1.0,
            width_use_high_precision: false,
            space: 0.0,
            frequency: DEFAULT_FREQUENCY,
            direction: Direction::default(),
            offset: 0,
            cycle: false,
            frame_start: DEFAULT_FRAME_START,
            frame_end: DEFAULT_FRAME_END,
            zero: DEFAULT_FRAME_ZERO,
            stop: DEFAULT_FRAME_STOP,
        }
    }
}

impl WaveParameters {
    /// Create parameters travelling in the given direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Create parameters in cycle mode with the given timeline slide.
    pub fn with_cycle_offset(mut self, offset: i32) -> Self {
        self.cycle = true;
        self.offset = offset;
        self
    }

    /// Frame at which the inward wave returns to rest.
    pub fn frame_zero(&self) -> i32 {
        self.zero
    }

    /// Frame at which the inward wave stops moving.
    pub fn frame_stop(&self) -> i32 {
        self.stop
    }

    /// Set the rest marker. A write at or past `frame_stop` pushes the
    /// stop marker forward to keep the pair ordered; the write itself is
    /// never rejected.
    pub fn set_frame_zero(&mut self, value: i32) {
        self.zero = value;
        if value >= self.stop {
            self.stop = self.zero + 1;
        }
    }

    /// Set the stop marker. A write at or below `frame_zero` pulls the
    /// rest marker back to keep the pair ordered; the write itself is
    /// never rejected.
    pub fn set_frame_stop(&mut self, value: i32) {
        self.stop = value;
        if self.zero >= value {
            self.zero = value - 1;
        }
    }

    /// Crest shaping factor selected by the precision toggle.
    pub fn shape_factor(&self) -> f32 {
        if self.width_use_high_precision {
            SHAPE_FACTOR_HIGH_PRECISION
        } else {
            SHAPE_FACTOR_STANDARD
        }
    }
}
