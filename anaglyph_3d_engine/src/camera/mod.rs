/// Camera module - stereoscopic camera

pub mod camera;

pub use camera::*;
