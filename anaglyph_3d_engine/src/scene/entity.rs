/// DrawEntity: a renderable model instance in the scene.

use std::sync::Arc;
use glam::{Mat4, Vec3};
use slotmap::new_key_type;
use crate::renderer::{Buffer, Texture};

new_key_type! {
    /// Stable key identifying a DrawEntity in a Scene.
    pub struct EntityKey;
}

/// Shading technique used to draw an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    /// Opaque, textured, per-pixel lit geometry
    VertexLitTex,
    /// Additively blended, textured, tinted geometry (light glows)
    AdditiveTexTint,
}

/// A renderable model instance.
///
/// The entity owns shared references to its GPU resources; the vertex data
/// and texture can be shared between many entities.
#[derive(Clone)]
pub struct DrawEntity {
    /// World transform matrix
    pub world_matrix: Mat4,
    /// Vertex buffer holding the entity's geometry
    pub vertex_buffer: Arc<dyn Buffer>,
    /// Number of vertices to draw
    pub vertex_count: u32,
    /// Diffuse texture sampled by the technique
    pub diffuse_map: Arc<dyn Texture>,
    /// Shading technique
    pub technique: Technique,
    /// Tint colour, multiplied into AdditiveTexTint output (ignored by
    /// VertexLitTex)
    pub tint_colour: Vec3,
}
