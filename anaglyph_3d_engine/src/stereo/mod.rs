/// Stereo module - dual eye targets, per-eye uniforms, and the stereo renderer

pub mod config;
pub mod eye_targets;
pub mod uniforms;
pub mod shaders;
pub mod stereo_renderer;

pub use config::*;
pub use eye_targets::*;
pub use uniforms::*;
pub use stereo_renderer::*;
