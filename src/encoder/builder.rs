/// Structural pattern stamping (finder, timing, alignment, format info)
use super::tables::format_bit;
use crate::models::{Matrix, Module, Version};

/// Side length of a finder pattern
pub const FINDER_SIZE: usize = 7;

/// Allocates a grid and stamps every non-data pattern
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Build an empty symbol for `version`; only data cells remain unset.
    pub fn build(version: Version) -> Matrix {
        let mut matrix = Matrix::new(version);
        let size = version.size();

        Self::stamp_finder(&mut matrix, 0, 0);
        Self::stamp_finder(&mut matrix, size - FINDER_SIZE, 0);
        Self::stamp_finder(&mut matrix, 0, size - FINDER_SIZE);

        Self::stamp_timing(&mut matrix);

        if let Some(center) = version.alignment_center() {
            Self::stamp_alignment(&mut matrix, center, center);
        }

        Self::stamp_format_info(&mut matrix);

        matrix
    }

    /// Whether (r, c) inside a 7x7 finder block is dark
    pub fn finder_module(r: usize, c: usize) -> bool {
        let ring = r == 0 || r == FINDER_SIZE - 1 || c == 0 || c == FINDER_SIZE - 1;
        let core = (2..=4).contains(&r) && (2..=4).contains(&c);
        ring || core
    }

    fn stamp_finder(matrix: &mut Matrix, row: usize, col: usize) {
        for r in 0..FINDER_SIZE {
            for c in 0..FINDER_SIZE {
                matrix.reserve(row + r, col + c, Module::from_bit(Self::finder_module(r, c)));
            }
        }

        // Light separator ring one module outside the block, clipped at the edges
        let size = matrix.size() as isize;
        let edge = FINDER_SIZE as isize;
        let (row, col) = (row as isize, col as isize);
        for dr in -1..=edge {
            for dc in -1..=edge {
                let on_ring = dr == -1 || dr == edge || dc == -1 || dc == edge;
                let (r, c) = (row + dr, col + dc);
                if on_ring && (0..size).contains(&r) && (0..size).contains(&c) {
                    matrix.reserve(r as usize, c as usize, Module::Light);
                }
            }
        }
    }

    fn stamp_timing(matrix: &mut Matrix) {
        let size = matrix.size();
        for i in 8..size - 8 {
            let module = Module::from_bit(i % 2 == 0);
            matrix.reserve(6, i, module);
            matrix.reserve(i, 6, module);
        }
    }

    fn stamp_alignment(matrix: &mut Matrix, row: usize, col: usize) {
        for dr in -2isize..=2 {
            for dc in -2isize..=2 {
                let r = (row as isize + dr) as usize;
                let c = (col as isize + dc) as usize;
                if matrix.get(r, c) != Module::Unset {
                    continue;
                }
                let dark = dr.abs() == 2 || dc.abs() == 2 || (dr == 0 && dc == 0);
                matrix.reserve(r, c, Module::from_bit(dark));
            }
        }
    }

    fn stamp_format_info(matrix: &mut Matrix) {
        let size = matrix.size();
        let bit = |i: usize| Module::from_bit(format_bit(i));

        // Around the top-left finder, skipping the timing row/column
        for i in 0..6 {
            matrix.reserve(8, i, bit(i));
        }
        matrix.reserve(8, 7, bit(6));
        matrix.reserve(8, 8, bit(7));
        matrix.reserve(7, 8, bit(8));
        for i in 0..6 {
            matrix.reserve(5 - i, 8, bit(9 + i));
        }

        // Mirrored copy: bottom-left column, then top-right row
        for i in 0..7 {
            matrix.reserve(size - 1 - i, 8, bit(i));
        }
        matrix.reserve(size - 8, 8, Module::Dark);
        for i in 0..8 {
            matrix.reserve(8, size - 8 + i, bit(7 + i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder_matches(matrix: &Matrix, row: usize, col: usize) -> bool {
        (0..FINDER_SIZE).all(|r| {
            (0..FINDER_SIZE).all(|c| {
                matrix.get(row + r, col + c).is_dark() == MatrixBuilder::finder_module(r, c)
            })
        })
    }

    #[test]
    fn test_finder_corners_all_versions() {
        for version in Version::all() {
            let matrix = MatrixBuilder::build(version);
            let size = matrix.size();
            assert_eq!(size, 4 * version.number() as usize + 17);
            assert!(finder_matches(&matrix, 0, 0), "top-left v{version}");
            assert!(finder_matches(&matrix, 0, size - 7), "top-right v{version}");
            assert!(finder_matches(&matrix, size - 7, 0), "bottom-left v{version}");
        }
    }

    #[test]
    fn test_separators_are_light() {
        let matrix = MatrixBuilder::build(Version::MIN);
        let size = matrix.size();
        for i in 0..7 {
            assert_eq!(matrix.get(7, i), Module::Light);
            assert_eq!(matrix.get(i, 7), Module::Light);
            assert_eq!(matrix.get(i, size - 8), Module::Light);
            assert_eq!(matrix.get(size - 8, i), Module::Light);
        }
        // (7, 7) is a corner of the top-left separator ring
        assert_eq!(matrix.get(7, 7), Module::Light);
        assert!(matrix.is_reserved(7, 7));
    }

    #[test]
    fn test_timing_pattern() {
        let matrix = MatrixBuilder::build(Version::new(3).unwrap());
        let size = matrix.size();
        for i in 8..size - 8 {
            let expected = Module::from_bit(i % 2 == 0);
            assert_eq!(matrix.get(6, i), expected);
            assert_eq!(matrix.get(i, 6), expected);
        }
    }

    #[test]
    fn test_alignment_pattern() {
        assert!(MatrixBuilder::build(Version::MIN).count_unset() > 0);

        for version in Version::all().skip(1) {
            let matrix = MatrixBuilder::build(version);
            let p = version.alignment_center().unwrap();
            assert_eq!(matrix.get(p, p), Module::Dark);
            assert_eq!(matrix.get(p - 1, p), Module::Light);
            assert_eq!(matrix.get(p + 1, p + 1), Module::Light);
            assert_eq!(matrix.get(p - 2, p + 2), Module::Dark);
            assert_eq!(matrix.get(p + 2, p), Module::Dark);
            for r in p - 2..=p + 2 {
                for c in p - 2..=p + 2 {
                    assert!(matrix.is_reserved(r, c));
                }
            }
        }
    }

    #[test]
    fn test_format_info_and_dark_module() {
        let matrix = MatrixBuilder::build(Version::MIN);
        let size = matrix.size();
        let row: Vec<bool> = (0..6).map(|c| matrix.get(8, c).is_dark()).collect();
        assert_eq!(row, vec![true, false, true, false, true, false]);
        assert_eq!(matrix.get(size - 8, 8), Module::Dark);
        assert!(matrix.is_reserved(size - 8, 8));
        // Last format bit lands in the top-right corner of row 8
        assert_eq!(matrix.get(8, size - 1), Module::Light);
        assert_eq!(matrix.get(8, size - 2), Module::Dark);
    }

    #[test]
    fn test_unset_cells_are_exactly_unreserved() {
        for version in Version::all() {
            let matrix = MatrixBuilder::build(version);
            let size = matrix.size();
            for r in 0..size {
                for c in 0..size {
                    assert_eq!(
                        matrix.get(r, c) == Module::Unset,
                        !matrix.is_reserved(r, c),
                        "cell ({r}, {c}) v{version}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_data_cell_counts() {
        let counts: Vec<usize> = Version::all()
            .map(|v| MatrixBuilder::build(v).count_unset())
            .collect();
        assert_eq!(counts, vec![208, 359, 567, 807, 1079]);
        for (count, version) in counts.iter().zip(Version::all()) {
            assert!(*count >= version.capacity_bits());
        }
    }
}
