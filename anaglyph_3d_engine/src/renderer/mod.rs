/// Renderer module - backend-agnostic GPU types and traits

// Module declarations
pub mod renderer;
pub mod texture;
pub mod buffer;
pub mod shader;
pub mod pipeline;
pub mod render_target;
pub mod swapchain;
pub mod command_list;

#[cfg(test)]
pub mod mock_renderer;

// Re-export everything
pub use renderer::*;
pub use texture::*;
pub use buffer::*;
pub use shader::*;
pub use pipeline::*;
pub use render_target::*;
pub use swapchain::*;
pub use command_list::*;
