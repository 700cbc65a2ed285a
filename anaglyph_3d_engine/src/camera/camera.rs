/// StereoCamera: monoscopic pose that derives per-eye view matrices.
///
/// The camera stores a single position and rotation. Each eye's view matrix
/// is derived on demand by displacing the position along the camera's local
/// right axis by half the interocular distance. Both eyes share the same
/// symmetric perspective projection.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Which eye a view matrix, render pass, or colour target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    /// Monoscopic rendering, no lateral offset
    Mono,
    /// Left eye, offset along negative local right axis
    Left,
    /// Right eye, offset along positive local right axis
    Right,
}

impl Eye {
    /// Sign of the lateral offset applied to this eye.
    pub fn offset_sign(&self) -> f32 {
        match self {
            Eye::Mono => 0.0,
            Eye::Left => -1.0,
            Eye::Right => 1.0,
        }
    }
}

/// Stereoscopic camera.
///
/// Holds a monoscopic pose (position and Euler rotation) plus projection
/// parameters, and derives per-eye view matrices on demand. The rotation is
/// applied yaw first, then pitch, then roll, with all angles in radians.
///
/// A negative interocular distance is accepted and simply swaps which eye
/// sees which viewpoint.
#[derive(Debug, Clone)]
pub struct StereoCamera {
    /// Centre position between the two eyes
    pub position: Vec3,
    /// Euler rotation in radians (x = pitch, y = yaw, z = roll)
    pub rotation: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
}

impl Default for StereoCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect: 4.0 / 3.0,
            near: 1.0,
            far: 100000.0,
        }
    }
}

impl StereoCamera {
    /// Create a camera at a position with a rotation, using default
    /// projection parameters.
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            ..Self::default()
        }
    }

    /// Orientation quaternion derived from the Euler rotation (yaw, pitch,
    /// roll order).
    fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        )
    }

    /// World-space forward vector (negative local Z).
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// World-space right vector (positive local X).
    pub fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }

    /// World-space up vector (positive local Y).
    pub fn up(&self) -> Vec3 {
        self.orientation() * Vec3::Y
    }

    /// World-space position of an eye.
    ///
    /// The eye is displaced from the camera position along the local right
    /// axis by half the interocular distance; `Eye::Mono` is not displaced
    /// at all. The offset follows the camera's rotation, so the eyes stay
    /// level with the view regardless of orientation.
    pub fn eye_position(&self, eye: Eye, interocular: f32) -> Vec3 {
        self.position + self.right() * (eye.offset_sign() * interocular * 0.5)
    }

    /// View matrix for an eye.
    ///
    /// Both eyes look along the same forward direction (parallel axes, no
    /// convergence); only the viewpoint differs.
    pub fn view_matrix(&self, eye: Eye, interocular: f32) -> Mat4 {
        Mat4::look_to_rh(self.eye_position(eye, interocular), self.forward(), self.up())
    }

    /// Perspective projection matrix, shared by both eyes.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
