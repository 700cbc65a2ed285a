/*!
# Anaglyph 3D Engine

Stereoscopic rendering core: a single monoscopic camera is split into left
and right eye viewpoints, the scene is rendered once per eye into offscreen
colour targets sharing one depth target, and the two images are combined
into a red/cyan anaglyph on the presentation surface.

The crate is backend-agnostic: GPU resources are reached through the traits
in [`renderer`] (textures, buffers, pipelines, command lists, swapchain).
Window management, input, mesh/texture loading and device initialization
are external collaborators.

## Architecture

- **StereoCamera**: derives per-eye view matrices and eye positions from a
  monoscopic pose and an interocular distance
- **Scene / DrawList**: named entity registry producing ordered, per-frame
  draw snapshots
- **StereoRenderer**: renders the draw list twice, once per eye, into the
  offscreen eye targets
- **AnaglyphCompositor**: full-screen pass combining the two eye images
  per-pixel according to the configured [`compositor::AnaglyphMode`]
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod renderer;
pub mod camera;
pub mod scene;
pub mod stereo;
pub mod compositor;

// Main anaglyph3d namespace module
pub mod anaglyph3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Stereo rendering sub-module
    pub mod stereo {
        pub use crate::stereo::*;
    }

    // Anaglyph compositing sub-module
    pub mod compositor {
        pub use crate::compositor::*;
    }
}

// Re-export math library at crate root
pub use glam;
