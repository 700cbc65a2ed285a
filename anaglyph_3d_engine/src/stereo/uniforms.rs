/// GPU-side uniform layouts for the eye passes.
///
/// Layouts are repr(C) and mirrored exactly by the GLSL uniform blocks in
/// [`super::shaders`]. All vectors are padded to 16 bytes (std140), which is
/// why Vec3 quantities are stored as Vec4.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

use crate::camera::{Eye, StereoCamera};
use crate::scene::{Lighting, MAX_LIGHTS};

/// One point light as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightUniform {
    /// World-space position (w unused)
    pub position: Vec4,
    /// Diffuse/specular colour (w unused)
    pub colour: Vec4,
}

/// Per-eye uniform block, bound at slot 0 of both scene techniques.
///
/// Each eye pass has its own buffer holding one of these, so recording the
/// right eye never overwrites the values the left eye's draws will read at
/// submit time.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct EyeUniforms {
    /// View matrix of the eye
    pub view: Mat4,
    /// Projection matrix (identical for both eyes)
    pub proj: Mat4,
    /// World-space eye position, for specular (w unused)
    pub eye_position: Vec4,
    /// Ambient colour (w unused)
    pub ambient_colour: Vec4,
    /// x = specular power, y = active light count, z/w unused
    pub params: Vec4,
    /// Point lights; only the first `params.y` entries are active
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl EyeUniforms {
    /// Build the uniform block for one eye from the camera and lighting
    /// state.
    pub fn build(
        camera: &StereoCamera,
        eye: Eye,
        interocular: f32,
        lighting: &Lighting,
    ) -> Self {
        let mut lights = [LightUniform {
            position: Vec4::ZERO,
            colour: Vec4::ZERO,
        }; MAX_LIGHTS];
        for (slot, light) in lights.iter_mut().zip(lighting.lights()) {
            slot.position = light.position.extend(1.0);
            slot.colour = light.colour.extend(1.0);
        }

        Self {
            view: camera.view_matrix(eye, interocular),
            proj: camera.projection_matrix(),
            eye_position: camera.eye_position(eye, interocular).extend(1.0),
            ambient_colour: lighting.ambient_colour.extend(1.0),
            params: Vec4::new(
                lighting.specular_power,
                lighting.light_count() as f32,
                0.0,
                0.0,
            ),
            lights,
        }
    }
}

/// Per-draw push constants, shared by both scene techniques.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct DrawPushConstants {
    /// World transform of the entity
    pub world: Mat4,
    /// Tint colour, used by AdditiveTexTint (w unused)
    pub tint_colour: Vec4,
}

#[cfg(test)]
#[path = "uniforms_tests.rs"]
mod tests;
