pub mod figure;
pub mod pose;

pub use figure::{Blob, Op, Segment, Tint, blobby_man};
pub use pose::{Joint, Pose, Side};
