/// Renderer trait - main rendering factory interface

use std::sync::Arc;
use winit::window::Window;

use crate::error::Result;
use crate::renderer::{
    Buffer, CommandList, Pipeline, RenderTarget, Shader, Swapchain, Texture,
    BufferDesc, PipelineDesc, ShaderDesc, TextureDesc,
};

// ============================================================================
// Configuration and statistics
// ============================================================================

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Enable validation/debug layers
    pub enable_validation: bool,
    /// Application name
    pub app_name: String,
    /// Application version (major, minor, patch)
    pub app_version: (u32, u32, u32),
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            enable_validation: cfg!(debug_assertions),
            app_name: "Anaglyph3D Application".to_string(),
            app_version: (1, 0, 0),
        }
    }
}

/// Renderer statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct RendererStats {
    /// Number of draw calls this frame
    pub draw_calls: u32,
    /// Number of triangles drawn this frame
    pub triangles: u32,
    /// GPU memory used (bytes)
    pub gpu_memory_used: u64,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Main renderer trait
///
/// This is the central factory interface for creating GPU resources and
/// submitting recorded command lists. Implemented by backend-specific
/// renderers.
pub trait Renderer: Send + Sync {
    /// Create a texture
    ///
    /// # Arguments
    ///
    /// * `desc` - Texture descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created texture
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create a buffer
    ///
    /// # Arguments
    ///
    /// * `desc` - Buffer descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created buffer
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Create a shader
    ///
    /// # Arguments
    ///
    /// * `desc` - Shader descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created shader
    fn create_shader(&mut self, desc: ShaderDesc) -> Result<Arc<dyn Shader>>;

    /// Create a graphics pipeline
    ///
    /// # Arguments
    ///
    /// * `desc` - Pipeline descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created pipeline
    fn create_pipeline(&mut self, desc: PipelineDesc) -> Result<Arc<dyn Pipeline>>;

    /// Create a command list for recording rendering commands
    fn create_command_list(&self) -> Result<Box<dyn CommandList>>;

    /// Create a render target view over a texture
    ///
    /// The texture must have been created with a render-target or
    /// depth-stencil usage.
    fn create_render_target_texture(&self, texture: &dyn Texture) -> Result<Arc<dyn RenderTarget>>;

    /// Create a swapchain for a window
    fn create_swapchain(&self, window: &Window) -> Result<Box<dyn Swapchain>>;

    /// Submit recorded command lists for execution
    fn submit(&self, commands: &[&dyn CommandList]) -> Result<()>;

    /// Submit recorded command lists and synchronize with a swapchain image
    ///
    /// Execution waits for the acquired image to become available and
    /// signals present readiness when the commands complete.
    fn submit_with_swapchain(
        &self,
        commands: &[&dyn CommandList],
        swapchain: &dyn Swapchain,
        image_index: u32,
    ) -> Result<()>;

    /// Wait for all GPU operations to complete
    fn wait_idle(&self) -> Result<()>;

    /// Get statistics about the renderer
    fn stats(&self) -> RendererStats;

    /// Notify renderer that the window has been resized
    ///
    /// # Arguments
    ///
    /// * `width` - New window width
    /// * `height` - New window height
    fn resize(&mut self, width: u32, height: u32);
}
