use bevy::prelude::*;

/// The host engine's wave deformation modifier.
///
/// The host owns this component; the rig writes the derived block on
/// every parameter change and reads `width` back once per pass (the
/// out-mode time offset is computed from the width as it was before the
/// pass overwrites it). The motion and shape toggles below the derived
/// block are driven directly by the artist and never touched here.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct WaveModifier {
    /// How sharp each crest is; derived as an inverse of the crest width.
    pub narrowness: f32,
    pub width: f32,
    /// Frames before the wave starts moving.
    pub time_offset: f32,
    /// Frames the wave keeps moving.
    pub lifetime: f32,
    /// Frames the wave takes to decay once its lifetime ends.
    pub damping_time: f32,
    pub speed: f32,

    pub use_x: bool,
    pub use_y: bool,
    pub use_cyclic: bool,
    pub use_normal: bool,
    pub use_normal_x: bool,
    pub use_normal_y: bool,
    pub use_normal_z: bool,
    pub falloff_radius: f32,
    pub height: f32,
    /// Restrict the deformation to a named vertex group.
    pub vertex_group: Option<String>,
}

impl Default for WaveModifier {
    fn default() -> Self {
        // Host defaults for a freshly added wave modifier.
        Self {
            narrowness: 1.5,
            width: 1.5,
            time_offset: 0.0,
            lifetime: 0.0,
            damping_time: 10.0,
            speed: 0.25,
            use_x: true,
            use_y: true,
            use_cyclic: true,
            use_normal: false,
            use_normal_x: true,
            use_normal_y: true,
            use_normal_z: true,
            falloff_radius: 0.0,
            height: 0.5,
            vertex_group: None,
        }
    }
}
