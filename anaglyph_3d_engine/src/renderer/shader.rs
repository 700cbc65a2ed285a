/// Shader trait and shader descriptor

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment (pixel) shader
    Fragment,
}

/// Descriptor for creating a shader
///
/// The source is GLSL text; compilation to the backend's native form
/// (SPIR-V, DXIL, ...) is the backend's concern.
#[derive(Debug, Clone)]
pub struct ShaderDesc {
    /// Shader stage
    pub stage: ShaderStage,
    /// GLSL source text
    pub source: String,
    /// Entry point function name
    pub entry_point: String,
}

/// Shader module trait
///
/// Implemented by backend-specific shader types.
pub trait Shader: Send + Sync {}
