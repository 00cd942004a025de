//! Crest shape derivation.

use crate::config::WaveParameters;

/// Narrowness from the crest width and the selected shaping factor.
///
/// Divides by the width: a zero width yields an infinite narrowness,
/// which is passed through to the host untouched.
pub fn narrowness(params: &WaveParameters) -> f32 {
    (params.shape_factor() * 2.0) / params.width
}

/// Modifier width blended from crest width and spacing.
pub fn blended_width(params: &WaveParameters) -> f32 {
    (params.space + params.width) / 2.0
}
