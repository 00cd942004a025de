//! Configuration and parameters
//!
//! Constants and the artist-facing wave settings.

pub mod constants;
pub mod wave_params;

pub use constants::*;
pub use wave_params::*;
