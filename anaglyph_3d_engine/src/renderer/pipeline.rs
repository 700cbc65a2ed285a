/// Pipeline trait and pipeline descriptor

use std::sync::Arc;
use crate::renderer::{Shader, TextureFormat};

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Triangle list
    TriangleList,
    /// Triangle strip (used by the full-screen compositing quad)
    TriangleStrip,
}

/// Colour blend mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// No blending, source overwrites destination
    Opaque,
    /// Additive blending (src + dst), used for light glow models
    Additive,
}

/// Depth test/write configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthMode {
    /// Depth test and depth write enabled
    ReadWrite,
    /// Depth test enabled, depth write disabled (additive glows)
    ReadOnly,
    /// Depth test disabled entirely (compositing pass)
    Disabled,
}

/// Texture sampling filter for textures bound to this pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Nearest-neighbour (point) sampling
    Nearest,
    /// Bilinear sampling
    Linear,
}

/// Vertex attribute description
#[derive(Debug, Clone, Copy)]
pub struct VertexAttribute {
    /// Attribute location in shader
    pub location: u32,
    /// Format of the attribute (data type and component count)
    pub format: TextureFormat,
    /// Offset in bytes from the start of the vertex
    pub offset: u32,
}

/// Vertex input layout
///
/// An empty layout (no attributes, zero stride) means the pipeline reads no
/// vertex buffer at all: vertices are generated in the vertex shader from
/// the vertex index.
#[derive(Debug, Clone, Default)]
pub struct VertexLayout {
    /// Stride in bytes between consecutive vertices
    pub stride: u32,
    /// Vertex attributes
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Layout for pipelines that generate their vertices procedurally
    pub fn none() -> Self {
        Self::default()
    }
}

/// Descriptor for creating a graphics pipeline
#[derive(Clone)]
pub struct PipelineDesc {
    /// Debug name
    pub name: String,
    /// Vertex shader
    pub vertex_shader: Arc<dyn Shader>,
    /// Fragment shader
    pub fragment_shader: Arc<dyn Shader>,
    /// Primitive topology
    pub topology: PrimitiveTopology,
    /// Colour blend mode
    pub blend: BlendMode,
    /// Depth test/write configuration
    pub depth: DepthMode,
    /// Sampling filter for textures bound to this pipeline
    pub sampler_filter: FilterMode,
    /// Vertex input layout
    pub vertex_layout: VertexLayout,
}

/// Graphics pipeline trait
///
/// Implemented by backend-specific pipeline types.
pub trait Pipeline: Send + Sync {
    /// Debug name given at creation time
    fn name(&self) -> &str;
}
