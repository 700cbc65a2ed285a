/// StereoRenderer: renders the scene once per eye and composites the result.
///
/// A frame is: update the per-eye uniform buffers, acquire a swapchain image,
/// record the left eye pass, the right eye pass, and the composite pass into
/// one command list, submit, present. Failures after setup abandon the frame
/// (logged as a warning, surfaced as `Error::FrameAbandoned`); the next
/// render_frame call starts fresh.

use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::engine_warn;
use crate::camera::{Eye, StereoCamera};
use crate::compositor::{AnaglyphCompositor, AnaglyphMode};
use crate::renderer::{
    Renderer, Buffer, CommandList, Pipeline, Swapchain,
    BufferDesc, BufferUsage, ShaderDesc, ShaderStage, PipelineDesc,
    BlendMode, ClearValue, DepthMode, FilterMode, PrimitiveTopology,
    TextureFormat, VertexAttribute, VertexLayout, Viewport,
};
use crate::scene::{DrawEntity, Scene, Technique};
use super::config::StereoConfig;
use super::eye_targets::EyeTargets;
use super::shaders;
use super::uniforms::{DrawPushConstants, EyeUniforms};

/// Uniform slot the per-eye block is bound to.
pub const EYE_UNIFORM_SLOT: u32 = 0;
/// Texture slot the diffuse map is bound to.
pub const DIFFUSE_MAP_SLOT: u32 = 1;

/// Scene vertex layout: position, normal, uv.
fn scene_vertex_layout() -> VertexLayout {
    VertexLayout {
        stride: 32,
        attributes: vec![
            VertexAttribute {
                location: 0,
                format: TextureFormat::R32G32B32_SFLOAT,
                offset: 0,
            },
            VertexAttribute {
                location: 1,
                format: TextureFormat::R32G32B32_SFLOAT,
                offset: 12,
            },
            VertexAttribute {
                location: 2,
                format: TextureFormat::R32G32_SFLOAT,
                offset: 24,
            },
        ],
    }
}

/// Stereoscopic scene renderer.
///
/// Owns the offscreen eye targets, the scene technique pipelines, one
/// uniform buffer per eye, and the anaglyph compositor.
pub struct StereoRenderer {
    renderer: Arc<Mutex<dyn Renderer>>,
    config: StereoConfig,
    targets: EyeTargets,
    lit_pipeline: Arc<dyn Pipeline>,
    additive_pipeline: Arc<dyn Pipeline>,
    /// Index 0 = left eye, index 1 = right eye. Separate buffers so the
    /// right eye's values never overwrite what the left eye's draws read.
    eye_uniform_buffers: [Arc<dyn Buffer>; 2],
    compositor: AnaglyphCompositor,
}

impl StereoRenderer {
    /// Build the stereo renderer and all its GPU resources.
    ///
    /// # Errors
    ///
    /// Returns an error if any resource creation fails. Setup failures are
    /// fatal; the renderer is unusable if this fails.
    pub fn new(renderer: Arc<Mutex<dyn Renderer>>, config: StereoConfig) -> Result<Self> {
        let (targets, lit_pipeline, additive_pipeline, eye_uniform_buffers, compositor) = {
            let mut lock = renderer.lock()
                .map_err(|_| Error::BackendError("renderer lock poisoned".to_string()))?;

            let targets = EyeTargets::new(&mut *lock, config.width, config.height)?;

            let vertex_shader = lock.create_shader(ShaderDesc {
                stage: ShaderStage::Vertex,
                source: shaders::SCENE_VERT.to_string(),
                entry_point: "main".to_string(),
            })?;
            let lit_fragment = lock.create_shader(ShaderDesc {
                stage: ShaderStage::Fragment,
                source: shaders::VERTEX_LIT_TEX_FRAG.to_string(),
                entry_point: "main".to_string(),
            })?;
            let additive_fragment = lock.create_shader(ShaderDesc {
                stage: ShaderStage::Fragment,
                source: shaders::ADDITIVE_TEX_TINT_FRAG.to_string(),
                entry_point: "main".to_string(),
            })?;

            let lit_pipeline = lock.create_pipeline(PipelineDesc {
                name: "vertex_lit_tex".to_string(),
                vertex_shader: vertex_shader.clone(),
                fragment_shader: lit_fragment,
                topology: PrimitiveTopology::TriangleList,
                blend: BlendMode::Opaque,
                depth: DepthMode::ReadWrite,
                sampler_filter: FilterMode::Linear,
                vertex_layout: scene_vertex_layout(),
            })?;

            // Glows are depth-tested against the opaque geometry but do not
            // write depth themselves.
            let additive_pipeline = lock.create_pipeline(PipelineDesc {
                name: "additive_tex_tint".to_string(),
                vertex_shader,
                fragment_shader: additive_fragment,
                topology: PrimitiveTopology::TriangleList,
                blend: BlendMode::Additive,
                depth: DepthMode::ReadOnly,
                sampler_filter: FilterMode::Linear,
                vertex_layout: scene_vertex_layout(),
            })?;

            let uniform_size = std::mem::size_of::<EyeUniforms>() as u64;
            let left_uniforms = lock.create_buffer(BufferDesc {
                size: uniform_size,
                usage: BufferUsage::Uniform,
            })?;
            let right_uniforms = lock.create_buffer(BufferDesc {
                size: uniform_size,
                usage: BufferUsage::Uniform,
            })?;

            let compositor = AnaglyphCompositor::new(&mut *lock, config.mode)?;

            (targets, lit_pipeline, additive_pipeline, [left_uniforms, right_uniforms], compositor)
        };

        Ok(Self {
            renderer,
            config,
            targets,
            lit_pipeline,
            additive_pipeline,
            eye_uniform_buffers,
            compositor,
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &StereoConfig {
        &self.config
    }

    /// Offscreen eye targets.
    pub fn targets(&self) -> &EyeTargets {
        &self.targets
    }

    /// Currently selected anaglyph mode.
    pub fn mode(&self) -> AnaglyphMode {
        self.compositor.mode()
    }

    /// Select the anaglyph mode used from the next frame on.
    pub fn set_mode(&mut self, mode: AnaglyphMode) {
        self.config.mode = mode;
        self.compositor.set_mode(mode);
    }

    /// Set the interocular distance in world units.
    ///
    /// The value is not clamped; zero collapses both eyes onto the camera
    /// position and a negative value swaps the eyes.
    pub fn set_interocular(&mut self, interocular: f32) {
        self.config.interocular = interocular;
    }

    /// Reallocate the eye targets at a new resolution.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let mut lock = self.renderer.lock()
            .map_err(|_| Error::BackendError("renderer lock poisoned".to_string()))?;
        self.targets.resize(&mut *lock, width, height)?;
        self.config.width = width;
        self.config.height = height;
        Ok(())
    }

    /// Wrap a per-frame failure: log it and mark the frame abandoned.
    fn abandon(stage: &str, error: Error) -> Error {
        engine_warn!("anaglyph3d::StereoRenderer",
            "frame abandoned at {}: {}", stage, error);
        Error::FrameAbandoned(format!("{}: {}", stage, error))
    }

    fn uniform_buffer(&self, eye: Eye) -> &Arc<dyn Buffer> {
        match eye {
            Eye::Left => &self.eye_uniform_buffers[0],
            Eye::Right => &self.eye_uniform_buffers[1],
            Eye::Mono => panic!("stereo rendering has no Mono pass"),
        }
    }

    /// Record one eye's scene pass.
    ///
    /// Clears the eye's colour target to the background colour and the
    /// shared depth target to far, then draws the snapshot in order.
    fn record_eye_pass(
        &self,
        cmd: &mut dyn CommandList,
        eye: Eye,
        draw_list: &[DrawEntity],
    ) -> Result<()> {
        cmd.begin_render_pass(
            self.targets.colour_target(eye),
            Some(self.targets.depth_target()),
            &[
                ClearValue::Color(self.config.background_colour),
                ClearValue::DepthStencil { depth: 1.0, stencil: 0 },
            ],
        )?;
        cmd.set_viewport(Viewport::full(self.targets.width(), self.targets.height()))?;

        for entity in draw_list {
            let pipeline = match entity.technique {
                Technique::VertexLitTex => &self.lit_pipeline,
                Technique::AdditiveTexTint => &self.additive_pipeline,
            };
            cmd.bind_pipeline(pipeline)?;
            cmd.bind_uniform_buffer(EYE_UNIFORM_SLOT, self.uniform_buffer(eye))?;
            cmd.bind_texture(DIFFUSE_MAP_SLOT, &entity.diffuse_map)?;
            cmd.bind_vertex_buffer(&entity.vertex_buffer, 0)?;

            let push = DrawPushConstants {
                world: entity.world_matrix,
                tint_colour: entity.tint_colour.extend(1.0),
            };
            cmd.push_constants(
                &[ShaderStage::Vertex, ShaderStage::Fragment],
                0,
                bytemuck::bytes_of(&push),
            )?;
            cmd.draw(entity.vertex_count, 0)?;
        }

        cmd.end_render_pass()?;
        Ok(())
    }

    /// Render one stereo frame and present it.
    ///
    /// Both eye passes render the same scene snapshot, so entities mutated
    /// concurrently can never differ between the eyes of one frame.
    ///
    /// # Errors
    ///
    /// Any failure abandons the frame and returns `Error::FrameAbandoned`;
    /// the renderer stays usable and the next call starts a fresh frame.
    pub fn render_frame(
        &mut self,
        swapchain: &mut dyn Swapchain,
        scene: &Scene,
        camera: &StereoCamera,
    ) -> Result<()> {
        let draw_list = scene.draw_list();

        for eye in [Eye::Left, Eye::Right] {
            let uniforms = EyeUniforms::build(
                camera, eye, self.config.interocular, scene.lighting());
            self.uniform_buffer(eye)
                .update(0, bytemuck::bytes_of(&uniforms))
                .map_err(|e| Self::abandon("uniform update", e))?;
        }

        let (image_index, backbuffer) = swapchain.acquire_next_image()
            .map_err(|e| Self::abandon("acquire", e))?;

        {
            let renderer = self.renderer.lock()
                .map_err(|_| Self::abandon(
                    "lock",
                    Error::BackendError("renderer lock poisoned".to_string()),
                ))?;

            let mut cmd = renderer.create_command_list()
                .map_err(|e| Self::abandon("command list creation", e))?;

            cmd.begin().map_err(|e| Self::abandon("record", e))?;
            self.record_eye_pass(cmd.as_mut(), Eye::Left, &draw_list)
                .map_err(|e| Self::abandon("left eye pass", e))?;
            self.record_eye_pass(cmd.as_mut(), Eye::Right, &draw_list)
                .map_err(|e| Self::abandon("right eye pass", e))?;
            self.compositor.composite(cmd.as_mut(), &self.targets, &backbuffer)
                .map_err(|e| Self::abandon("composite", e))?;
            cmd.end().map_err(|e| Self::abandon("record", e))?;

            renderer.submit_with_swapchain(&[cmd.as_ref()], &*swapchain, image_index)
                .map_err(|e| Self::abandon("submit", e))?;
        }

        swapchain.present(image_index)
            .map_err(|e| Self::abandon("present", e))?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "stereo_renderer_tests.rs"]
mod tests;
