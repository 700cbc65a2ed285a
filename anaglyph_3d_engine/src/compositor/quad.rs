/// Procedural full-screen quad.
///
/// The composite pass reads no vertex buffer: the vertex shader derives
/// position and texture coordinates from the vertex index alone, drawing
/// four vertices as a triangle strip. The functions here mirror that
/// derivation for tests and CPU-side consumers.

use glam::Vec2;

/// Number of vertices in the full-screen strip.
pub const QUAD_VERTEX_COUNT: u32 = 4;

/// A vertex of the full-screen quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadVertex {
    /// Clip-space position (z = 0, w = 1 implied)
    pub position: Vec2,
    /// Texture coordinate, (0,0) at the top-left of the image
    pub uv: Vec2,
}

/// Vertex of the full-screen strip for a vertex index in 0..4.
///
/// Index 0 is the top-left corner; the strip order is top-left, top-right,
/// bottom-left, bottom-right, which yields two counter-clockwise triangles
/// covering the whole clip space.
pub fn fullscreen_quad_vertex(index: u32) -> QuadVertex {
    debug_assert!(
        index < QUAD_VERTEX_COUNT,
        "quad vertex index {} out of range",
        index,
    );
    let u = (index % 2) as f32;
    let v = (index / 2) as f32;
    QuadVertex {
        position: Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0),
        uv: Vec2::new(u, v),
    }
}

#[cfg(test)]
#[path = "quad_tests.rs"]
mod tests;
