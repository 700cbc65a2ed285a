/// GLSL sources for the scene techniques.
///
/// The `EyeUniforms` block layout matches [`super::uniforms::EyeUniforms`]
/// and the push constant block matches
/// [`super::uniforms::DrawPushConstants`]; change them together.

/// Shared vertex shader for both techniques.
pub const SCENE_VERT: &str = r#"
#version 450

const int MAX_LIGHTS = 8;

struct Light {
    vec4 position;
    vec4 colour;
};

layout(binding = 0) uniform EyeUniforms {
    mat4 view;
    mat4 proj;
    vec4 eye_position;
    vec4 ambient_colour;
    vec4 params;
    Light lights[MAX_LIGHTS];
} eye;

layout(push_constant) uniform DrawPushConstants {
    mat4 world;
    vec4 tint_colour;
} draw;

layout(location = 0) in vec3 in_position;
layout(location = 1) in vec3 in_normal;
layout(location = 2) in vec2 in_uv;

layout(location = 0) out vec3 out_world_position;
layout(location = 1) out vec3 out_world_normal;
layout(location = 2) out vec2 out_uv;

void main() {
    vec4 world_position = draw.world * vec4(in_position, 1.0);
    out_world_position = world_position.xyz;
    out_world_normal = mat3(draw.world) * in_normal;
    out_uv = in_uv;
    gl_Position = eye.proj * eye.view * world_position;
}
"#;

/// Opaque textured geometry with per-pixel Blinn lighting.
pub const VERTEX_LIT_TEX_FRAG: &str = r#"
#version 450

const int MAX_LIGHTS = 8;

struct Light {
    vec4 position;
    vec4 colour;
};

layout(binding = 0) uniform EyeUniforms {
    mat4 view;
    mat4 proj;
    vec4 eye_position;
    vec4 ambient_colour;
    vec4 params;
    Light lights[MAX_LIGHTS];
} eye;

layout(binding = 1) uniform sampler2D diffuse_map;

layout(location = 0) in vec3 in_world_position;
layout(location = 1) in vec3 in_world_normal;
layout(location = 2) in vec2 in_uv;

layout(location = 0) out vec4 out_colour;

void main() {
    vec3 normal = normalize(in_world_normal);
    vec3 to_eye = normalize(eye.eye_position.xyz - in_world_position);
    float specular_power = eye.params.x;
    int light_count = int(eye.params.y);

    vec3 diffuse = eye.ambient_colour.rgb;
    vec3 specular = vec3(0.0);
    for (int i = 0; i < light_count; i++) {
        vec3 to_light = normalize(eye.lights[i].position.xyz - in_world_position);
        float lambert = max(dot(normal, to_light), 0.0);
        diffuse += eye.lights[i].colour.rgb * lambert;

        vec3 half_vector = normalize(to_light + to_eye);
        float highlight = pow(max(dot(normal, half_vector), 0.0), specular_power);
        specular += eye.lights[i].colour.rgb * highlight;
    }

    vec3 base = texture(diffuse_map, in_uv).rgb;
    out_colour = vec4(base * diffuse + specular, 1.0);
}
"#;

/// Additively blended textured geometry multiplied by a tint colour.
pub const ADDITIVE_TEX_TINT_FRAG: &str = r#"
#version 450

layout(push_constant) uniform DrawPushConstants {
    mat4 world;
    vec4 tint_colour;
} draw;

layout(binding = 1) uniform sampler2D diffuse_map;

layout(location = 0) in vec3 in_world_position;
layout(location = 1) in vec3 in_world_normal;
layout(location = 2) in vec2 in_uv;

layout(location = 0) out vec4 out_colour;

void main() {
    vec3 base = texture(diffuse_map, in_uv).rgb;
    out_colour = vec4(base * draw.tint_colour.rgb, 1.0);
}
"#;
