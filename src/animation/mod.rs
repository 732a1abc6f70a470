// Scripted joint-angle animation

pub mod choreography;
pub mod director;

pub use choreography::{hip_sway, jump, macarena, wave};
pub use director::{Cue, Director, PacingMode, Stage};
