pub mod app;
pub mod handler;
pub mod screen;

pub use handler::AppHandler;
