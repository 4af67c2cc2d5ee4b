mod arena;
mod stroke;

pub use arena::*;
pub use stroke::*;

#[cfg(test)]
mod stroke_tests;
