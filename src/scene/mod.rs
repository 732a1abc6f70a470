pub mod camera;
pub mod primitives;
pub mod render;
pub mod surface;

pub use camera::{CameraState, SceneLayout};
pub use render::{Palette, render_scene};
pub use surface::{DrawSurface, MatrixStack, Rgb};
