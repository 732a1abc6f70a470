pub mod frame;
pub mod line_vertex;
pub mod render;
pub mod renderer;

pub use frame::FrameRecorder;
pub use line_vertex::LineVertex;
pub use renderer::Renderer;
