/// Compositor module - anaglyph combination of the two eye images

pub mod anaglyph;
pub mod quad;
pub mod shaders;
pub mod compositor;

pub use anaglyph::*;
pub use quad::*;
pub use compositor::*;
