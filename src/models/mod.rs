mod vector_2d;
mod ball;

pub use vector_2d::*;
pub use ball::*;
