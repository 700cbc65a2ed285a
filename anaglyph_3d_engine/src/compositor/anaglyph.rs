/// Anaglyph combination modes.
///
/// Each mode is a pure per-pixel function from (left colour, right colour)
/// to the composited output colour. The GPU fragment shaders implement the
/// same formulas; the Rust functions are the reference used by tests and by
/// any CPU-side compositing.

use glam::{Vec3, Vec4};

/// Rec. 601 luma weights used by Greyscale mode.
pub const LUMINANCE_WEIGHTS: Vec3 = Vec3::new(0.299, 0.587, 0.114);

/// Weights feeding the red channel in Optimized mode. The red channel of the
/// left image is discarded entirely; red is rebuilt from green and blue.
pub const OPTIMIZED_RED_WEIGHTS: Vec3 = Vec3::new(0.0, 0.7, 0.3);

/// Contrast curve exponent applied to the rebuilt red channel in Optimized
/// mode, reduces ghosting through red filters.
pub const CONTRAST_POWER: f32 = 57.0;

/// How the left and right eye images are combined into one anaglyph image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnaglyphMode {
    /// Red channel from the left eye, green and blue from the right
    Regular,
    /// Luminance of the left eye in red, luminance of the right in cyan
    Greyscale,
    /// Red rebuilt from the left eye's green/blue with a contrast curve,
    /// green and blue from the right eye
    Optimized,
}

impl AnaglyphMode {
    /// Combine a left and right eye colour into the anaglyph output colour.
    ///
    /// Alpha is always 1.0.
    pub fn combine(&self, left: Vec3, right: Vec3) -> Vec4 {
        match self {
            AnaglyphMode::Regular => Vec4::new(left.x, right.y, right.z, 1.0),
            AnaglyphMode::Greyscale => {
                let left_luma = left.dot(LUMINANCE_WEIGHTS);
                let right_luma = right.dot(LUMINANCE_WEIGHTS);
                Vec4::new(left_luma, right_luma, right_luma, 1.0)
            }
            AnaglyphMode::Optimized => {
                let red = left.dot(OPTIMIZED_RED_WEIGHTS).powf(CONTRAST_POWER);
                Vec4::new(red, right.y, right.z, 1.0)
            }
        }
    }
}

#[cfg(test)]
#[path = "anaglyph_tests.rs"]
mod tests;
