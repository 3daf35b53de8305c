/// Compact square bit matrix, addressed by (row, col)
///
/// Used as the reserved-cell mask of a [`Matrix`](super::Matrix) and as the
/// dark/light snapshot handed to raster output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a cleared `size` x `size` matrix
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get bit at (row, col); out of range reads as unset
    pub fn get(&self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(index) => (self.data[index / 8] >> (index % 8)) & 1 == 1,
            None => false,
        }
    }

    /// Set bit at (row, col); out of range writes are dropped
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let Some(index) = self.index(row, col) else {
            return;
        };
        if value {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }
}
