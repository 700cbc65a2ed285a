/// Scene module - draw entities, lighting, and the scene registry

pub mod entity;
pub mod lights;
pub mod scene;

pub use entity::*;
pub use lights::*;
pub use scene::*;
