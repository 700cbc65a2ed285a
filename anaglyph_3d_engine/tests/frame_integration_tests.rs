//! Integration tests for the stereo frame loop through Engine.
//!
//! These tests drive the public API only, using a no-op renderer backend
//! implemented against the public traits, so no GPU is required.

use std::sync::{Arc, Mutex};

use glam::{Mat4, Vec3};
use serial_test::serial;

use anaglyph_3d_engine::anaglyph3d::Engine;
use anaglyph_3d_engine::anaglyph3d::Error;
use anaglyph_3d_engine::anaglyph3d::camera::StereoCamera;
use anaglyph_3d_engine::anaglyph3d::compositor::AnaglyphMode;
use anaglyph_3d_engine::anaglyph3d::render::{
    Renderer, Buffer, Texture, Shader, Pipeline, CommandList, RenderTarget, Swapchain,
    BufferDesc, BufferUsage, TextureDesc, TextureFormat, TextureInfo, TextureUsage,
    ShaderDesc, ShaderStage, PipelineDesc, ClearValue, Viewport, RendererStats,
};
use anaglyph_3d_engine::anaglyph3d::scene::{DrawEntity, Light, Scene, Technique};
use anaglyph_3d_engine::anaglyph3d::stereo::{StereoConfig, StereoRenderer};
use anaglyph_3d_engine::anaglyph3d::Result;

// ============================================================================
// No-op backend
// ============================================================================

struct NullTexture {
    info: TextureInfo,
}

impl Texture for NullTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

struct NullBuffer;

impl Buffer for NullBuffer {
    fn update(&self, _offset: u64, _data: &[u8]) -> Result<()> {
        Ok(())
    }
}

struct NullShader;
impl Shader for NullShader {}

struct NullPipeline {
    name: String,
}

impl Pipeline for NullPipeline {
    fn name(&self) -> &str {
        &self.name
    }
}

struct NullRenderTarget {
    width: u32,
    height: u32,
    format: TextureFormat,
}

impl RenderTarget for NullRenderTarget {
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

#[derive(Default)]
struct NullCommandList;

impl CommandList for NullCommandList {
    fn begin(&mut self) -> Result<()> { Ok(()) }
    fn end(&mut self) -> Result<()> { Ok(()) }

    fn begin_render_pass(
        &mut self,
        _color: &Arc<dyn RenderTarget>,
        _depth: Option<&Arc<dyn RenderTarget>>,
        _clear_values: &[ClearValue],
    ) -> Result<()> {
        Ok(())
    }

    fn end_render_pass(&mut self) -> Result<()> { Ok(()) }
    fn set_viewport(&mut self, _viewport: Viewport) -> Result<()> { Ok(()) }
    fn bind_pipeline(&mut self, _pipeline: &Arc<dyn Pipeline>) -> Result<()> { Ok(()) }
    fn bind_texture(&mut self, _slot: u32, _texture: &Arc<dyn Texture>) -> Result<()> { Ok(()) }
    fn bind_uniform_buffer(&mut self, _slot: u32, _buffer: &Arc<dyn Buffer>) -> Result<()> { Ok(()) }
    fn bind_vertex_buffer(&mut self, _buffer: &Arc<dyn Buffer>, _offset: u64) -> Result<()> { Ok(()) }
    fn push_constants(&mut self, _stages: &[ShaderStage], _offset: u32, _data: &[u8]) -> Result<()> { Ok(()) }
    fn draw(&mut self, _vertex_count: u32, _first_vertex: u32) -> Result<()> { Ok(()) }
}

struct NullSwapchain {
    width: u32,
    height: u32,
    presented: Arc<Mutex<Vec<u32>>>,
}

impl NullSwapchain {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            presented: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Swapchain for NullSwapchain {
    fn acquire_next_image(&mut self) -> Result<(u32, Arc<dyn RenderTarget>)> {
        let target: Arc<dyn RenderTarget> = Arc::new(NullRenderTarget {
            width: self.width,
            height: self.height,
            format: TextureFormat::B8G8R8A8_UNORM,
        });
        Ok((0, target))
    }

    fn present(&mut self, image_index: u32) -> Result<()> {
        self.presented.lock().unwrap().push(image_index);
        Ok(())
    }

    fn recreate(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn image_count(&self) -> usize { 3 }
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }
    fn format(&self) -> TextureFormat { TextureFormat::B8G8R8A8_UNORM }
}

struct NullRenderer {
    submits: Arc<Mutex<u32>>,
}

impl NullRenderer {
    fn new() -> Self {
        Self {
            submits: Arc::new(Mutex::new(0)),
        }
    }
}

impl Renderer for NullRenderer {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        Ok(Arc::new(NullTexture {
            info: TextureInfo {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                usage: desc.usage,
            },
        }))
    }

    fn create_buffer(&mut self, _desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        Ok(Arc::new(NullBuffer))
    }

    fn create_shader(&mut self, _desc: ShaderDesc) -> Result<Arc<dyn Shader>> {
        Ok(Arc::new(NullShader))
    }

    fn create_pipeline(&mut self, desc: PipelineDesc) -> Result<Arc<dyn Pipeline>> {
        Ok(Arc::new(NullPipeline { name: desc.name }))
    }

    fn create_command_list(&self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(NullCommandList))
    }

    fn create_render_target_texture(&self, texture: &dyn Texture) -> Result<Arc<dyn RenderTarget>> {
        let info = texture.info();
        Ok(Arc::new(NullRenderTarget {
            width: info.width,
            height: info.height,
            format: info.format,
        }))
    }

    fn create_swapchain(&self, _window: &winit::window::Window) -> Result<Box<dyn Swapchain>> {
        Ok(Box::new(NullSwapchain::new(1280, 960)))
    }

    fn submit(&self, _commands: &[&dyn CommandList]) -> Result<()> {
        *self.submits.lock().unwrap() += 1;
        Ok(())
    }

    fn submit_with_swapchain(
        &self,
        _commands: &[&dyn CommandList],
        _swapchain: &dyn Swapchain,
        _image_index: u32,
    ) -> Result<()> {
        *self.submits.lock().unwrap() += 1;
        Ok(())
    }

    fn wait_idle(&self) -> Result<()> { Ok(()) }
    fn stats(&self) -> RendererStats { RendererStats::default() }
    fn resize(&mut self, _width: u32, _height: u32) {}
}

// ============================================================================
// Helpers
// ============================================================================

fn build_scene(renderer: &Arc<Mutex<dyn Renderer>>) -> Scene {
    let mut lock = renderer.lock().unwrap();

    let vertex_buffer = lock.create_buffer(BufferDesc {
        size: 36 * 32,
        usage: BufferUsage::Vertex,
    }).unwrap();
    let diffuse_map = lock.create_texture(TextureDesc {
        width: 64,
        height: 64,
        format: TextureFormat::R8G8B8A8_SRGB,
        usage: TextureUsage::Sampled,
        data: None,
    }).unwrap();
    drop(lock);

    let mut scene = Scene::new();
    scene.insert("planet", DrawEntity {
        world_matrix: Mat4::from_translation(Vec3::new(0.0, 0.0, -50.0)),
        vertex_buffer: vertex_buffer.clone(),
        vertex_count: 36,
        diffuse_map: diffuse_map.clone(),
        technique: Technique::VertexLitTex,
        tint_colour: Vec3::ONE,
    }).unwrap();
    scene.insert("sun_glow", DrawEntity {
        world_matrix: Mat4::from_translation(Vec3::new(20.0, 0.0, -80.0)),
        vertex_buffer,
        vertex_count: 36,
        diffuse_map,
        technique: Technique::AdditiveTexTint,
        tint_colour: Vec3::new(1.0, 0.8, 0.4),
    }).unwrap();
    scene.lighting_mut().add_light(Light {
        position: Vec3::new(20.0, 0.0, -80.0),
        colour: Vec3::new(1.0, 0.95, 0.9),
    }).unwrap();
    scene
}

// ============================================================================
// Frame loop through Engine
// ============================================================================

#[test]
#[serial]
fn test_integration_stereo_frame_loop() {
    Engine::initialize().unwrap();
    Engine::create_renderer(NullRenderer::new()).unwrap();

    let renderer = Engine::renderer().unwrap();
    let scene = build_scene(&renderer);
    let camera = StereoCamera::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(-0.1, 0.0, 0.0));

    let mut stereo = StereoRenderer::new(renderer, StereoConfig::default()).unwrap();
    let mut swapchain = NullSwapchain::new(1280, 960);
    let presented = swapchain.presented.clone();

    for _ in 0..3 {
        stereo.render_frame(&mut swapchain, &scene, &camera).unwrap();
    }

    assert_eq!(presented.lock().unwrap().len(), 3);

    Engine::destroy_renderer().unwrap();
    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_mode_switch_between_frames() {
    Engine::initialize().unwrap();
    Engine::create_renderer(NullRenderer::new()).unwrap();

    let renderer = Engine::renderer().unwrap();
    let scene = build_scene(&renderer);
    let camera = StereoCamera::default();

    let mut stereo = StereoRenderer::new(renderer, StereoConfig::default()).unwrap();
    let mut swapchain = NullSwapchain::new(1280, 960);

    for mode in [AnaglyphMode::Regular, AnaglyphMode::Greyscale, AnaglyphMode::Optimized] {
        stereo.set_mode(mode);
        stereo.render_frame(&mut swapchain, &scene, &camera).unwrap();
        assert_eq!(stereo.mode(), mode);
    }

    Engine::destroy_renderer().unwrap();
    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_resize_mid_session() {
    Engine::initialize().unwrap();
    Engine::create_renderer(NullRenderer::new()).unwrap();

    let renderer = Engine::renderer().unwrap();
    let scene = build_scene(&renderer);
    let camera = StereoCamera::default();

    let mut stereo = StereoRenderer::new(renderer, StereoConfig::default()).unwrap();
    let mut swapchain = NullSwapchain::new(1280, 960);

    stereo.render_frame(&mut swapchain, &scene, &camera).unwrap();

    swapchain.recreate(1920, 1080).unwrap();
    stereo.resize(1920, 1080).unwrap();

    stereo.render_frame(&mut swapchain, &scene, &camera).unwrap();
    assert_eq!(stereo.targets().width(), 1920);

    Engine::destroy_renderer().unwrap();
    Engine::shutdown();
}

#[test]
#[serial]
fn test_integration_missing_renderer_is_initialization_error() {
    Engine::initialize().unwrap();

    // No renderer created yet.
    let result = Engine::renderer();
    assert!(matches!(result, Err(Error::InitializationFailed(_))));

    Engine::shutdown();
}
