//! Parameter derivation pipeline
//!
//! Pure arithmetic from a [`WaveParameters`] snapshot onto the host
//! modifier, plus the systems that re-run it whenever parameters or the
//! scene range change.

pub mod shape;
pub mod timing;

use bevy::prelude::*;

use crate::config::WaveParameters;
use crate::modifier::WaveModifier;
use crate::scene::SceneFrames;

/// Run the full derivation for one rig.
///
/// The modifier's previous `width` feeds the out-mode time offset, so it
/// is snapshotted before the shape pass overwrites the field.
pub fn apply_derivation(params: &WaveParameters, modifier: &mut WaveModifier, scene: &SceneFrames) {
    let prior_width = modifier.width;

    modifier.narrowness = shape::narrowness(params);
    modifier.width = shape::blended_width(params);

    timing::apply_timing(params, modifier, prior_width);
    modifier.speed = timing::speed(params, modifier.width, scene);

    if params.cycle {
        timing::apply_cycle_park(params, modifier, scene);
    }
}

/// Attach default parameters to freshly rigged modifiers.
pub fn attach_default_parameters(
    mut commands: Commands,
    rigs: Query<Entity, (With<WaveModifier>, Without<WaveParameters>)>,
) {
    for entity in &rigs {
        commands.entity(entity).insert(WaveParameters::default());
    }
}

/// Re-derive every rig whose parameters changed this update, and every
/// rig when the scene range moved. Each triggered rig derives exactly
/// once per update; the out-mode time offset feeds on the previous
/// modifier width, so a double pass would not be a no-op.
pub fn apply_wave_derivation(
    scene: Res<SceneFrames>,
    mut rigs: Query<(Ref<WaveParameters>, &mut WaveModifier)>,
) {
    let scene_moved = scene.is_changed();
    for (params, mut modifier) in &mut rigs {
        if !(scene_moved || params.is_changed()) {
            continue;
        }
        apply_derivation(&params, &mut modifier, &scene);
        debug!(
            "wave derivation: speed={:.4} time_offset={} lifetime={}",
            modifier.speed, modifier.time_offset, modifier.lifetime
        );
    }
}
