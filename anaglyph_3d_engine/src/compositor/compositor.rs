/// AnaglyphCompositor: full-screen pass combining the two eye images.
///
/// The pass renders directly onto the presentation surface with depth
/// disabled and no clear: every pixel of the quad is overwritten, so loading
/// the previous contents is never visible. The eye images are point sampled
/// because source and destination are the same size.

use std::sync::Arc;

use crate::error::Result;
use crate::renderer::{
    Renderer, CommandList, Pipeline, RenderTarget, Shader,
    ShaderDesc, ShaderStage, PipelineDesc,
    BlendMode, DepthMode, FilterMode, PrimitiveTopology, VertexLayout,
    Viewport,
};
use crate::camera::Eye;
use crate::stereo::EyeTargets;
use super::anaglyph::AnaglyphMode;
use super::quad::QUAD_VERTEX_COUNT;
use super::shaders;

/// Texture slot the left eye image is bound to.
pub const LEFT_IMAGE_SLOT: u32 = 0;
/// Texture slot the right eye image is bound to.
pub const RIGHT_IMAGE_SLOT: u32 = 1;

const MODES: [AnaglyphMode; 3] = [
    AnaglyphMode::Regular,
    AnaglyphMode::Greyscale,
    AnaglyphMode::Optimized,
];

/// Full-screen anaglyph compositor.
///
/// One pipeline per mode is built up front; switching modes between frames
/// is a plain field assignment and cannot fail.
pub struct AnaglyphCompositor {
    mode: AnaglyphMode,
    pipelines: [Arc<dyn Pipeline>; 3],
}

impl AnaglyphCompositor {
    /// Build the compositor's pipelines.
    ///
    /// # Errors
    ///
    /// Returns an error if shader or pipeline creation fails. This is a
    /// setup failure and is fatal for the caller.
    pub fn new(renderer: &mut dyn Renderer, mode: AnaglyphMode) -> Result<Self> {
        let vertex_shader = renderer.create_shader(ShaderDesc {
            stage: ShaderStage::Vertex,
            source: shaders::ANAGLYPH_QUAD_VERT.to_string(),
            entry_point: "main".to_string(),
        })?;

        let regular = Self::create_mode_pipeline(
            renderer, &vertex_shader, "anaglyph_regular", shaders::ANAGLYPH_REGULAR_FRAG)?;
        let greyscale = Self::create_mode_pipeline(
            renderer, &vertex_shader, "anaglyph_greyscale", shaders::ANAGLYPH_GREYSCALE_FRAG)?;
        let optimized = Self::create_mode_pipeline(
            renderer, &vertex_shader, "anaglyph_optimized", shaders::ANAGLYPH_OPTIMIZED_FRAG)?;

        Ok(Self {
            mode,
            pipelines: [regular, greyscale, optimized],
        })
    }

    fn create_mode_pipeline(
        renderer: &mut dyn Renderer,
        vertex_shader: &Arc<dyn Shader>,
        name: &str,
        fragment_source: &str,
    ) -> Result<Arc<dyn Pipeline>> {
        let fragment_shader = renderer.create_shader(ShaderDesc {
            stage: ShaderStage::Fragment,
            source: fragment_source.to_string(),
            entry_point: "main".to_string(),
        })?;

        renderer.create_pipeline(PipelineDesc {
            name: name.to_string(),
            vertex_shader: vertex_shader.clone(),
            fragment_shader,
            topology: PrimitiveTopology::TriangleStrip,
            blend: BlendMode::Opaque,
            depth: DepthMode::Disabled,
            sampler_filter: FilterMode::Nearest,
            vertex_layout: VertexLayout::none(),
        })
    }

    /// Currently selected combination mode.
    pub fn mode(&self) -> AnaglyphMode {
        self.mode
    }

    /// Select the combination mode used by subsequent composite() calls.
    pub fn set_mode(&mut self, mode: AnaglyphMode) {
        self.mode = mode;
    }

    fn pipeline(&self) -> &Arc<dyn Pipeline> {
        let index = MODES.iter().position(|&m| m == self.mode).unwrap_or(0);
        &self.pipelines[index]
    }

    /// Record the composite pass into a command list.
    ///
    /// Combines the two eye images of `targets` onto `backbuffer` using the
    /// selected mode. The pass has no depth attachment and performs no
    /// clear.
    pub fn composite(
        &self,
        cmd: &mut dyn CommandList,
        targets: &EyeTargets,
        backbuffer: &Arc<dyn RenderTarget>,
    ) -> Result<()> {
        cmd.begin_render_pass(backbuffer, None, &[])?;
        cmd.set_viewport(Viewport::full(backbuffer.width(), backbuffer.height()))?;
        cmd.bind_pipeline(self.pipeline())?;
        cmd.bind_texture(LEFT_IMAGE_SLOT, targets.colour_texture(Eye::Left))?;
        cmd.bind_texture(RIGHT_IMAGE_SLOT, targets.colour_texture(Eye::Right))?;
        cmd.draw(QUAD_VERTEX_COUNT, 0)?;
        cmd.end_render_pass()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "compositor_tests.rs"]
mod tests;
