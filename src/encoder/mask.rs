/// Fixed checkerboard mask over the data region
use crate::models::Matrix;

/// Applies the single mask pattern used by this encoder
pub struct Masker;

impl Masker {
    /// Toggle every non-reserved module where `(row + col) % 2 == 0`.
    ///
    /// Applying the mask twice restores the original grid.
    pub fn apply(matrix: &mut Matrix) {
        let size = matrix.size();
        for row in 0..size {
            for col in 0..size {
                if !matrix.is_reserved(row, col) && Self::is_masked(row, col) {
                    let toggled = matrix.get(row, col).toggled();
                    matrix.set(row, col, toggled);
                }
            }
        }
    }

    /// Whether the mask flips (row, col)
    pub fn is_masked(row: usize, col: usize) -> bool {
        (row + col) % 2 == 0
    }
}
