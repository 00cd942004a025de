use crate::config::{Direction, WaveParameters};
use crate::modifier::WaveModifier;

/// Display-only timing summary for a parameter panel.
///
/// Computed on demand from a parameters/modifier pair; nothing in the
/// derivation reads these back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineReadout {
    /// Total animated frames (out mode) or the stop marker (in mode).
    pub sum_frame: f32,
    /// Frame at which all motion has fully settled.
    pub stop_frame: f32,
    /// First marker shown for the active direction.
    pub frame_start: i32,
    /// Last marker shown for the active direction.
    pub frame_end: i32,
}

impl TimelineReadout {
    pub fn compute(params: &WaveParameters, modifier: &WaveModifier) -> Self {
        let sum_frame = match params.direction {
            Direction::Out => modifier.lifetime + modifier.damping_time,
            Direction::In => params.frame_stop() as f32,
        };
        let (frame_start, frame_end) = match params.direction {
            Direction::Out => (params.frame_start, params.frame_end),
            Direction::In => (params.frame_zero(), params.frame_stop()),
        };
        Self {
            sum_frame,
            stop_frame: modifier.time_offset + modifier.damping_time + modifier.lifetime,
            frame_start,
            frame_end,
        }
    }
}
