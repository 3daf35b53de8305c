use super::{BitMatrix, Version};

/// State of a single module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Module {
    /// Not yet written by the builder or the data placer
    #[default]
    Unset,
    /// Light (background) module
    Light,
    /// Dark module
    Dark,
}

impl Module {
    /// Module for a data bit (1 = dark)
    pub fn from_bit(bit: bool) -> Self {
        if bit { Module::Dark } else { Module::Light }
    }

    /// True for dark modules only
    pub fn is_dark(self) -> bool {
        matches!(self, Module::Dark)
    }

    /// Swap light and dark; unset stays unset
    pub fn toggled(self) -> Self {
        match self {
            Module::Unset => Module::Unset,
            Module::Light => Module::Dark,
            Module::Dark => Module::Light,
        }
    }
}

/// Square module grid for one symbol
///
/// Cells written through the builder are flagged as reserved; only the
/// remaining cells take data and masking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    version: Version,
    size: usize,
    modules: Vec<Module>,
    reserved: BitMatrix,
}

impl Matrix {
    /// Create an all-unset grid sized for `version`
    pub fn new(version: Version) -> Self {
        let size = version.size();
        Self {
            version,
            size,
            modules: vec![Module::Unset; size * size],
            reserved: BitMatrix::new(size),
        }
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at (row, col). Cells outside the grid read as `Light` (quiet zone).
    pub fn get(&self, row: usize, col: usize) -> Module {
        if row >= self.size || col >= self.size {
            return Module::Light;
        }
        self.modules[row * self.size + col]
    }

    /// Whether (row, col) belongs to a structural pattern
    pub fn is_reserved(&self, row: usize, col: usize) -> bool {
        self.reserved.get(row, col)
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Module]> {
        self.modules.chunks(self.size)
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.count(Module::Dark)
    }

    /// Number of cells still unset
    pub fn count_unset(&self) -> usize {
        self.count(Module::Unset)
    }

    /// Number of reserved cells
    pub fn count_reserved(&self) -> usize {
        self.reserved.count_ones()
    }

    /// Dark modules as a bit matrix (true = dark)
    pub fn to_bit_matrix(&self) -> BitMatrix {
        let mut bits = BitMatrix::new(self.size);
        for (row, modules) in self.rows().enumerate() {
            for (col, module) in modules.iter().enumerate() {
                if module.is_dark() {
                    bits.set(row, col, true);
                }
            }
        }
        bits
    }

    /// Write a data/mask module; out of range writes are dropped
    pub(crate) fn set(&mut self, row: usize, col: usize, module: Module) {
        if row < self.size && col < self.size {
            self.modules[row * self.size + col] = module;
        }
    }

    /// Write a structural module and flag it reserved; out of range writes are dropped
    pub(crate) fn reserve(&mut self, row: usize, col: usize, module: Module) {
        if row < self.size && col < self.size {
            self.modules[row * self.size + col] = module;
            self.reserved.set(row, col, true);
        }
    }

    fn count(&self, wanted: Module) -> usize {
        self.modules.iter().filter(|&&m| m == wanted).count()
    }
}
