/// GLSL sources for the anaglyph composite pass.
///
/// The vertex shader generates the full-screen strip from gl_VertexIndex;
/// there is no vertex buffer. One fragment shader exists per AnaglyphMode,
/// each mirroring the corresponding formula in [`super::anaglyph`].

/// Full-screen strip vertex shader, position and UV from the vertex index.
pub const ANAGLYPH_QUAD_VERT: &str = r#"
#version 450

layout(location = 0) out vec2 out_uv;

void main() {
    float u = float(gl_VertexIndex % 2);
    float v = float(gl_VertexIndex / 2);
    out_uv = vec2(u, v);
    gl_Position = vec4(u * 2.0 - 1.0, 1.0 - v * 2.0, 0.0, 1.0);
}
"#;

/// Regular mode: red from the left eye, green and blue from the right.
pub const ANAGLYPH_REGULAR_FRAG: &str = r#"
#version 450

layout(binding = 0) uniform sampler2D left_image;
layout(binding = 1) uniform sampler2D right_image;

layout(location = 0) in vec2 in_uv;
layout(location = 0) out vec4 out_colour;

void main() {
    vec3 left = texture(left_image, in_uv).rgb;
    vec3 right = texture(right_image, in_uv).rgb;
    out_colour = vec4(left.r, right.g, right.b, 1.0);
}
"#;

/// Greyscale mode: per-eye luminance into red and cyan.
pub const ANAGLYPH_GREYSCALE_FRAG: &str = r#"
#version 450

layout(binding = 0) uniform sampler2D left_image;
layout(binding = 1) uniform sampler2D right_image;

layout(location = 0) in vec2 in_uv;
layout(location = 0) out vec4 out_colour;

const vec3 LUMA = vec3(0.299, 0.587, 0.114);

void main() {
    float left_luma = dot(texture(left_image, in_uv).rgb, LUMA);
    float right_luma = dot(texture(right_image, in_uv).rgb, LUMA);
    out_colour = vec4(left_luma, right_luma, right_luma, 1.0);
}
"#;

/// Optimized mode: red rebuilt from the left eye's green/blue channels with
/// a contrast curve, green and blue from the right eye.
pub const ANAGLYPH_OPTIMIZED_FRAG: &str = r#"
#version 450

layout(binding = 0) uniform sampler2D left_image;
layout(binding = 1) uniform sampler2D right_image;

layout(location = 0) in vec2 in_uv;
layout(location = 0) out vec4 out_colour;

const vec3 RED_WEIGHTS = vec3(0.0, 0.7, 0.3);
const float CONTRAST_POWER = 57.0;

void main() {
    vec3 left = texture(left_image, in_uv).rgb;
    vec3 right = texture(right_image, in_uv).rgb;
    float red = pow(dot(left, RED_WEIGHTS), CONTRAST_POWER);
    out_colour = vec4(red, right.g, right.b, 1.0);
}
"#;
