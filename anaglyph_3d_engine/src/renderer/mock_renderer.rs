/// Mock Renderer for unit tests (no GPU required)
///
/// This mock renderer allows testing the stereo renderer, the compositor and
/// other components without requiring a real GPU or graphics backend. Command
/// lists record their commands as readable strings so tests can assert on
/// pass structure and ordering.

use std::sync::{Arc, Mutex};
use winit::window::Window;

use crate::renderer::{
    Renderer, Buffer, Texture, Shader, Pipeline, CommandList,
    RenderTarget, Swapchain, RendererStats,
    BufferDesc, TextureDesc, ShaderDesc, ShaderStage, PipelineDesc,
    BlendMode, DepthMode, FilterMode, PrimitiveTopology,
    ClearValue, Viewport, TextureInfo, TextureFormat, TextureUsage,
};
use crate::error::{Error, Result};
use crate::engine_bail;

// ============================================================================
// Mock Buffer
// ============================================================================

#[derive(Debug)]
pub struct MockBuffer {
    pub size: u64,
    pub name: String,
    /// Data written via update(), latest write wins per offset 0 updates
    pub written: Mutex<Vec<u8>>,
}

impl MockBuffer {
    pub fn new(size: u64, name: String) -> Self {
        Self {
            size,
            name,
            written: Mutex::new(Vec::new()),
        }
    }
}

impl Buffer for MockBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        if offset + data.len() as u64 > self.size {
            engine_bail!("anaglyph3d::mock",
                "buffer update out of bounds: offset {} + len {} > size {}",
                offset, data.len(), self.size);
        }
        let mut written = self.written.lock().unwrap();
        let end = (offset as usize) + data.len();
        if written.len() < end {
            written.resize(end, 0);
        }
        written[offset as usize..end].copy_from_slice(data);
        Ok(())
    }
}

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
    pub name: String,
}

impl MockTexture {
    pub fn new(width: u32, height: u32, format: TextureFormat, usage: TextureUsage, name: String) -> Self {
        Self {
            info: TextureInfo {
                width,
                height,
                format,
                usage,
            },
            name,
        }
    }
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

// ============================================================================
// Mock Shader
// ============================================================================

#[derive(Debug)]
pub struct MockShader {
    pub stage: ShaderStage,
    pub name: String,
}

impl MockShader {
    pub fn new(stage: ShaderStage, name: String) -> Self {
        Self { stage, name }
    }
}

impl Shader for MockShader {}

// ============================================================================
// Mock Pipeline
// ============================================================================

/// Mock pipeline that remembers the descriptor state tests care about
#[derive(Debug)]
pub struct MockPipeline {
    pub name: String,
    pub topology: PrimitiveTopology,
    pub blend: BlendMode,
    pub depth: DepthMode,
    pub sampler_filter: FilterMode,
    pub has_vertex_input: bool,
}

impl MockPipeline {
    pub fn new(desc: &PipelineDesc) -> Self {
        Self {
            name: desc.name.clone(),
            topology: desc.topology,
            blend: desc.blend,
            depth: desc.depth,
            sampler_filter: desc.sampler_filter,
            has_vertex_input: !desc.vertex_layout.attributes.is_empty(),
        }
    }
}

impl Pipeline for MockPipeline {
    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Mock CommandList
// ============================================================================

/// Mock command list that records commands as strings
///
/// The log is shared with the MockRenderer that created the command list, so
/// tests can inspect commands recorded by command lists owned by the code
/// under test.
#[derive(Debug)]
pub struct MockCommandList {
    log: Arc<Mutex<Vec<String>>>,
}

impl MockCommandList {
    pub fn new(log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { log }
    }

    fn record(&self, command: String) {
        self.log.lock().unwrap().push(command);
    }

    /// Snapshot of all commands recorded so far
    pub fn commands(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl CommandList for MockCommandList {
    fn begin(&mut self) -> Result<()> {
        self.record("begin".to_string());
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.record("end".to_string());
        Ok(())
    }

    fn begin_render_pass(
        &mut self,
        color: &Arc<dyn RenderTarget>,
        depth: Option<&Arc<dyn RenderTarget>>,
        clear_values: &[ClearValue],
    ) -> Result<()> {
        self.record(format!(
            "begin_render_pass {}x{} depth={} clears={:?}",
            color.width(),
            color.height(),
            depth.is_some(),
            clear_values,
        ));
        Ok(())
    }

    fn end_render_pass(&mut self) -> Result<()> {
        self.record("end_render_pass".to_string());
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.record(format!("set_viewport {}x{}", viewport.width, viewport.height));
        Ok(())
    }

    fn bind_pipeline(&mut self, pipeline: &Arc<dyn Pipeline>) -> Result<()> {
        self.record(format!("bind_pipeline {}", pipeline.name()));
        Ok(())
    }

    fn bind_texture(&mut self, slot: u32, _texture: &Arc<dyn Texture>) -> Result<()> {
        self.record(format!("bind_texture slot={}", slot));
        Ok(())
    }

    fn bind_uniform_buffer(&mut self, slot: u32, _buffer: &Arc<dyn Buffer>) -> Result<()> {
        self.record(format!("bind_uniform_buffer slot={}", slot));
        Ok(())
    }

    fn bind_vertex_buffer(&mut self, _buffer: &Arc<dyn Buffer>, offset: u64) -> Result<()> {
        self.record(format!("bind_vertex_buffer offset={}", offset));
        Ok(())
    }

    fn push_constants(&mut self, _stages: &[ShaderStage], offset: u32, data: &[u8]) -> Result<()> {
        self.record(format!("push_constants offset={} len={}", offset, data.len()));
        Ok(())
    }

    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<()> {
        self.record(format!("draw {} {}", vertex_count, first_vertex));
        Ok(())
    }
}

// ============================================================================
// Mock RenderTarget
// ============================================================================

#[derive(Debug)]
pub struct MockRenderTarget {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
}

impl MockRenderTarget {
    pub fn new(width: u32, height: u32, format: TextureFormat) -> Self {
        Self { width, height, format }
    }
}

impl RenderTarget for MockRenderTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        self.format
    }
}

// ============================================================================
// Mock Swapchain
// ============================================================================

#[derive(Debug)]
pub struct MockSwapchain {
    pub image_count: u32,
    pub width: u32,
    pub height: u32,
    /// When true, acquire_next_image fails (simulates an out-of-date surface)
    pub fail_acquire: bool,
    /// When true, present fails
    pub fail_present: bool,
    /// Image indices that have been presented
    pub presented: Vec<u32>,
}

impl MockSwapchain {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image_count: 3,
            width,
            height,
            fail_acquire: false,
            fail_present: false,
            presented: Vec::new(),
        }
    }
}

impl Swapchain for MockSwapchain {
    fn acquire_next_image(&mut self) -> Result<(u32, Arc<dyn RenderTarget>)> {
        if self.fail_acquire {
            return Err(Error::BackendError("swapchain out of date".to_string()));
        }
        let target: Arc<dyn RenderTarget> = Arc::new(MockRenderTarget::new(
            self.width,
            self.height,
            TextureFormat::B8G8R8A8_UNORM,
        ));
        Ok((0, target))
    }

    fn present(&mut self, image_index: u32) -> Result<()> {
        if self.fail_present {
            return Err(Error::BackendError("present failed".to_string()));
        }
        self.presented.push(image_index);
        Ok(())
    }

    fn recreate(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn image_count(&self) -> usize {
        self.image_count as usize
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        TextureFormat::B8G8R8A8_UNORM
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

/// Mock Renderer that tracks created resources without GPU
#[derive(Debug)]
pub struct MockRenderer {
    /// Shared command log written by all command lists this renderer creates
    pub command_log: Arc<Mutex<Vec<String>>>,
    /// Track created buffers
    pub created_buffers: Arc<Mutex<Vec<Arc<MockBuffer>>>>,
    /// Track created textures
    pub created_textures: Arc<Mutex<Vec<String>>>,
    /// Track created shaders
    pub created_shaders: Arc<Mutex<Vec<String>>>,
    /// Track created pipelines
    pub created_pipelines: Arc<Mutex<Vec<Arc<MockPipeline>>>>,
    /// Number of submit/submit_with_swapchain calls
    pub submit_count: Arc<Mutex<u32>>,
    /// When true, submissions fail (simulates a lost device)
    pub fail_submit: bool,
}

impl MockRenderer {
    /// Create a new mock renderer
    pub fn new() -> Self {
        Self {
            command_log: Arc::new(Mutex::new(Vec::new())),
            created_buffers: Arc::new(Mutex::new(Vec::new())),
            created_textures: Arc::new(Mutex::new(Vec::new())),
            created_shaders: Arc::new(Mutex::new(Vec::new())),
            created_pipelines: Arc::new(Mutex::new(Vec::new())),
            submit_count: Arc::new(Mutex::new(0)),
            fail_submit: false,
        }
    }

    /// Snapshot of all recorded commands
    pub fn commands(&self) -> Vec<String> {
        self.command_log.lock().unwrap().clone()
    }

    /// Clear the recorded command log
    pub fn clear_commands(&self) {
        self.command_log.lock().unwrap().clear();
    }

    /// Get names of created textures
    pub fn get_created_textures(&self) -> Vec<String> {
        self.created_textures.lock().unwrap().clone()
    }

    /// Get names of created shaders
    pub fn get_created_shaders(&self) -> Vec<String> {
        self.created_shaders.lock().unwrap().clone()
    }

    /// Find a created pipeline by name
    pub fn find_pipeline(&self, name: &str) -> Option<Arc<MockPipeline>> {
        self.created_pipelines
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name == name)
            .cloned()
    }
}

impl Renderer for MockRenderer {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        let name = format!("texture_{}x{}_{:?}", desc.width, desc.height, desc.usage);
        self.created_textures.lock().unwrap().push(name.clone());
        Ok(Arc::new(MockTexture::new(desc.width, desc.height, desc.format, desc.usage, name)))
    }

    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        let name = format!("buffer_{:?}_{}", desc.usage, desc.size);
        let buffer = Arc::new(MockBuffer::new(desc.size, name));
        self.created_buffers.lock().unwrap().push(buffer.clone());
        Ok(buffer)
    }

    fn create_shader(&mut self, desc: ShaderDesc) -> Result<Arc<dyn Shader>> {
        let name = format!("shader_{:?}_{}", desc.stage, desc.entry_point);
        self.created_shaders.lock().unwrap().push(name.clone());
        Ok(Arc::new(MockShader::new(desc.stage, name)))
    }

    fn create_pipeline(&mut self, desc: PipelineDesc) -> Result<Arc<dyn Pipeline>> {
        let pipeline = Arc::new(MockPipeline::new(&desc));
        self.created_pipelines.lock().unwrap().push(pipeline.clone());
        Ok(pipeline)
    }

    fn create_command_list(&self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(MockCommandList::new(self.command_log.clone())))
    }

    fn create_render_target_texture(&self, texture: &dyn Texture) -> Result<Arc<dyn RenderTarget>> {
        let info = texture.info();
        match info.usage {
            TextureUsage::RenderTarget
            | TextureUsage::SampledAndRenderTarget
            | TextureUsage::DepthStencil => {}
            _ => {
                engine_bail!("anaglyph3d::mock",
                    "create_render_target_texture: incompatible texture usage {:?}",
                    info.usage);
            }
        }
        Ok(Arc::new(MockRenderTarget::new(info.width, info.height, info.format)))
    }

    fn create_swapchain(&self, _window: &Window) -> Result<Box<dyn Swapchain>> {
        Ok(Box::new(MockSwapchain::new(800, 600)))
    }

    fn submit(&self, _commands: &[&dyn CommandList]) -> Result<()> {
        if self.fail_submit {
            return Err(Error::BackendError("device lost".to_string()));
        }
        *self.submit_count.lock().unwrap() += 1;
        Ok(())
    }

    fn submit_with_swapchain(
        &self,
        _commands: &[&dyn CommandList],
        _swapchain: &dyn Swapchain,
        _image_index: u32,
    ) -> Result<()> {
        if self.fail_submit {
            return Err(Error::BackendError("device lost".to_string()));
        }
        *self.submit_count.lock().unwrap() += 1;
        Ok(())
    }

    fn wait_idle(&self) -> Result<()> {
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        RendererStats::default()
    }

    fn resize(&mut self, _width: u32, _height: u32) {
        // No-op for mock
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
