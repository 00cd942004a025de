//! Animation timing derivation.

use crate::config::{Direction, PARK_MULTIPLIER_IN, PARK_MULTIPLIER_OUT, WaveParameters};
use crate::modifier::WaveModifier;
use crate::scene::SceneFrames;

/// Write the timing block for the active direction.
///
/// `prior_width` is the modifier width as it was before this pass started
/// writing. In out mode `damping_time` is artist-driven and left alone.
pub fn apply_timing(params: &WaveParameters, modifier: &mut WaveModifier, prior_width: f32) {
    match params.direction {
        Direction::Out => {
            modifier.time_offset = params.frame_start as f32 + prior_width.floor();
            modifier.lifetime = params.frame_end as f32 - modifier.time_offset;
        }
        Direction::In => {
            modifier.time_offset = params.frame_stop() as f32;
            modifier.lifetime = (params.frame_zero() - params.frame_stop()) as f32;
            modifier.damping_time = (params.frame_stop() - params.frame_zero()) as f32;
        }
    }
}

/// Crest speed over the scene range, negated for inward travel.
pub fn speed(params: &WaveParameters, modifier_width: f32, scene: &SceneFrames) -> f32 {
    let speed = (modifier_width * 2.0) / (scene.span() as f32 + 1.0) * params.frequency as f32;
    match params.direction {
        Direction::Out => speed,
        Direction::In => -speed,
    }
}

/// Park the wave far outside the timeline so the artist's `offset` alone
/// slides the visible phase. Zeroed lifetime and damping freeze the
/// window, turning the animated wave into a static displacement loop.
pub fn apply_cycle_park(params: &WaveParameters, modifier: &mut WaveModifier, scene: &SceneFrames) {
    let multiplier = match params.direction {
        Direction::Out => PARK_MULTIPLIER_OUT,
        Direction::In => PARK_MULTIPLIER_IN,
    };
    modifier.time_offset = (scene.span() * multiplier + params.offset) as f32;
    modifier.lifetime = 0.0;
    modifier.damping_time = 0.0;
}
