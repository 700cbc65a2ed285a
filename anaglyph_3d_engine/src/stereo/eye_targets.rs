/// EyeTargets: the offscreen surfaces the two eye passes render into.
///
/// Two colour textures (one per eye) share a single depth texture: the depth
/// buffer is cleared at the start of each eye pass, so its contents never
/// leak between eyes and only one allocation is needed.

use std::sync::Arc;

use crate::error::Result;
use crate::camera::Eye;
use crate::renderer::{
    Renderer, RenderTarget, Texture,
    TextureDesc, TextureFormat, TextureUsage,
};

/// Pixel format of the eye colour targets.
pub const EYE_COLOUR_FORMAT: TextureFormat = TextureFormat::R8G8B8A8_UNORM;
/// Pixel format of the shared depth target.
pub const EYE_DEPTH_FORMAT: TextureFormat = TextureFormat::D32_FLOAT;

struct EyeSurface {
    texture: Arc<dyn Texture>,
    target: Arc<dyn RenderTarget>,
}

/// Offscreen render targets for stereo rendering.
///
/// The colour textures are sampleable so the compositor can read them back;
/// the depth texture is render-only.
pub struct EyeTargets {
    width: u32,
    height: u32,
    left: EyeSurface,
    right: EyeSurface,
    depth: EyeSurface,
}

impl EyeTargets {
    /// Allocate the eye targets at the given resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if texture or render target creation fails. This is
    /// a setup failure and is fatal for the caller.
    pub fn new(renderer: &mut dyn Renderer, width: u32, height: u32) -> Result<Self> {
        let left = Self::create_colour_surface(renderer, width, height)?;
        let right = Self::create_colour_surface(renderer, width, height)?;
        let depth = Self::create_depth_surface(renderer, width, height)?;

        Ok(Self {
            width,
            height,
            left,
            right,
            depth,
        })
    }

    fn create_colour_surface(
        renderer: &mut dyn Renderer,
        width: u32,
        height: u32,
    ) -> Result<EyeSurface> {
        let texture = renderer.create_texture(TextureDesc {
            width,
            height,
            format: EYE_COLOUR_FORMAT,
            usage: TextureUsage::SampledAndRenderTarget,
            data: None,
        })?;
        let target = renderer.create_render_target_texture(texture.as_ref())?;
        Ok(EyeSurface { texture, target })
    }

    fn create_depth_surface(
        renderer: &mut dyn Renderer,
        width: u32,
        height: u32,
    ) -> Result<EyeSurface> {
        let texture = renderer.create_texture(TextureDesc {
            width,
            height,
            format: EYE_DEPTH_FORMAT,
            usage: TextureUsage::DepthStencil,
            data: None,
        })?;
        let target = renderer.create_render_target_texture(texture.as_ref())?;
        Ok(EyeSurface { texture, target })
    }

    fn surface(&self, eye: Eye) -> &EyeSurface {
        match eye {
            Eye::Left => &self.left,
            Eye::Right => &self.right,
            Eye::Mono => panic!("EyeTargets holds no surface for Eye::Mono"),
        }
    }

    /// Colour texture of an eye, sampled by the compositor.
    ///
    /// # Panics
    ///
    /// Panics if `eye` is `Eye::Mono`.
    pub fn colour_texture(&self, eye: Eye) -> &Arc<dyn Texture> {
        &self.surface(eye).texture
    }

    /// Colour render target of an eye.
    ///
    /// # Panics
    ///
    /// Panics if `eye` is `Eye::Mono`.
    pub fn colour_target(&self, eye: Eye) -> &Arc<dyn RenderTarget> {
        &self.surface(eye).target
    }

    /// Depth render target shared by both eye passes.
    pub fn depth_target(&self) -> &Arc<dyn RenderTarget> {
        &self.depth.target
    }

    /// Width of the targets in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the targets in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reallocate all targets at a new resolution.
    ///
    /// The old textures stay alive until every reference to them is dropped,
    /// so in-flight frames are unaffected.
    pub fn resize(&mut self, renderer: &mut dyn Renderer, width: u32, height: u32) -> Result<()> {
        self.left = Self::create_colour_surface(renderer, width, height)?;
        self.right = Self::create_colour_surface(renderer, width, height)?;
        self.depth = Self::create_depth_surface(renderer, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }
}

#[cfg(test)]
#[path = "eye_targets_tests.rs"]
mod tests;
