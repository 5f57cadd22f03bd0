pub mod status;
pub mod video;

pub use status::*;
pub use video::*;
