/// Zigzag placement of data bits into the symbol
use crate::models::{Matrix, Module};

/// Flows a bit stream into the unset cells of a matrix
pub struct DataPlacer;

impl DataPlacer {
    /// Fill every unset cell in zigzag order.
    ///
    /// Each unset cell takes the next bit (1 = dark); once `bits` runs out the
    /// remaining cells become light. Returns the number of bits consumed.
    pub fn place(matrix: &mut Matrix, bits: &[bool]) -> usize {
        let mut next = bits.iter().copied();
        let mut consumed = 0;

        for (row, col) in zigzag_order(matrix.size()) {
            if matrix.get(row, col) != Module::Unset {
                continue;
            }
            let module = match next.next() {
                Some(bit) => {
                    consumed += 1;
                    Module::from_bit(bit)
                }
                None => Module::Light,
            };
            matrix.set(row, col, module);
        }

        consumed
    }

    /// Read the non-reserved cells back in placement order (dark = 1).
    ///
    /// The matrix must be unmasked for this to reproduce the placed bits.
    pub fn extract(matrix: &Matrix) -> Vec<bool> {
        zigzag_order(matrix.size())
            .into_iter()
            .filter(|&(row, col)| !matrix.is_reserved(row, col))
            .map(|(row, col)| matrix.get(row, col).is_dark())
            .collect()
    }
}

/// Cell visiting order for a `size` x `size` grid.
///
/// Column pairs run right to left with column 6 skipped; rows alternate
/// bottom-up and top-down, right cell of each pair first.
pub fn zigzag_order(size: usize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(size * size);
    let mut upward = true;
    let mut col = size as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }

        let right = col as usize;
        let left = right - 1;
        let mut visit = |row: usize| {
            order.push((row, right));
            order.push((row, left));
        };

        if upward {
            (0..size).rev().for_each(&mut visit);
        } else {
            (0..size).for_each(&mut visit);
        }

        upward = !upward;
        col -= 2;
    }

    order
}
