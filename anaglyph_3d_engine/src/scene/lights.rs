/// Scene lighting: point lights plus global ambient and specular terms.

use glam::Vec3;
use crate::error::Result;
use crate::engine_bail;

/// Maximum number of point lights uploaded to the GPU per frame.
pub const MAX_LIGHTS: usize = 8;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space position
    pub position: Vec3,
    /// Diffuse colour (also used for the specular highlight)
    pub colour: Vec3,
}

/// Global lighting state for a scene.
#[derive(Debug, Clone)]
pub struct Lighting {
    /// Ambient colour applied to all lit geometry
    pub ambient_colour: Vec3,
    /// Blinn specular exponent shared by all lit geometry
    pub specular_power: f32,
    lights: Vec<Light>,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient_colour: Vec3::new(0.4, 0.4, 0.5),
            specular_power: 256.0,
            lights: Vec::new(),
        }
    }
}

impl Lighting {
    /// Add a point light.
    ///
    /// # Errors
    ///
    /// Returns an error if MAX_LIGHTS lights already exist.
    pub fn add_light(&mut self, light: Light) -> Result<usize> {
        if self.lights.len() >= MAX_LIGHTS {
            engine_bail!("anaglyph3d::Lighting",
                "cannot add light: limit of {} lights reached", MAX_LIGHTS);
        }
        self.lights.push(light);
        Ok(self.lights.len() - 1)
    }

    /// Get a light by index.
    pub fn light(&self, index: usize) -> Option<&Light> {
        self.lights.get(index)
    }

    /// Get a light by index for mutation.
    pub fn light_mut(&mut self, index: usize) -> Option<&mut Light> {
        self.lights.get_mut(index)
    }

    /// All lights in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Remove all lights.
    pub fn clear_lights(&mut self) {
        self.lights.clear();
    }
}
