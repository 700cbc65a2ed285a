/// Stereo rendering configuration.

use crate::compositor::AnaglyphMode;

/// Configuration for the stereo renderer.
#[derive(Debug, Clone)]
pub struct StereoConfig {
    /// Anaglyph combination mode the compositor starts with
    pub mode: AnaglyphMode,
    /// Distance between the two eyes in world units
    pub interocular: f32,
    /// Width of the offscreen eye targets in pixels
    pub width: u32,
    /// Height of the offscreen eye targets in pixels
    pub height: u32,
    /// Colour each eye pass clears its target to
    pub background_colour: [f32; 4],
}

impl Default for StereoConfig {
    fn default() -> Self {
        Self {
            mode: AnaglyphMode::Regular,
            interocular: 0.65,
            width: 1280,
            height: 960,
            background_colour: [0.2, 0.2, 0.3, 1.0],
        }
    }
}
