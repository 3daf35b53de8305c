pub mod bit_matrix;
pub mod matrix;
pub mod version;

pub use bit_matrix::BitMatrix;
pub use matrix::{Matrix, Module};
pub use version::Version;
