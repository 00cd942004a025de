use bevy::prelude::*;

pub mod config;
pub mod derivation;
pub mod display;
pub mod modifier;
pub mod scene;

// Public re-exports for clean API
pub use config::{Direction, WaveParameters};
pub use derivation::apply_derivation;
pub use display::TimelineReadout;
pub use modifier::WaveModifier;
pub use scene::SceneFrames;

use crate::derivation::{apply_wave_derivation, attach_default_parameters};

/// Wires the wave rig into a host app.
///
/// Every [`WaveModifier`] entity gets a [`WaveParameters`] record on
/// first sight, and any change to that record or to [`SceneFrames`]
/// re-runs the full derivation before the update ends. Entities without
/// a wave modifier are never touched.
pub struct WaveRigPlugin;

impl Plugin for WaveRigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneFrames>().add_systems(
            Update,
            (attach_default_parameters, apply_wave_derivation).chain(),
        );
    }
}
