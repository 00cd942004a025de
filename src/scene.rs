use bevy::prelude::*;

/// Scene frame range the speed and cycle derivations read.
///
/// Owned by the host timeline; the rig only reads it. Changing it
/// re-derives every rigged object on the next update.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneFrames {
    pub frame_start: i32,
    pub frame_end: i32,
}

impl Default for SceneFrames {
    fn default() -> Self {
        // Host default timeline.
        Self {
            frame_start: 1,
            frame_end: 250,
        }
    }
}

impl SceneFrames {
    pub fn new(frame_start: i32, frame_end: i32) -> Self {
        Self {
            frame_start,
            frame_end,
        }
    }

    /// Distance between the range endpoints.
    pub fn span(&self) -> i32 {
        self.frame_end - self.frame_start
    }
}
