use std::fmt;

use crate::encoder::tables::{ALIGNMENT_CENTERS, CAPACITY_BITS};
use crate::error::QrError;

/// Symbol version (1-5 only; larger versions are never produced)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version (21x21)
    pub const MIN: Version = Version(1);
    /// Largest supported version (37x37)
    pub const MAX: Version = Version(5);

    /// Create a version, `None` outside 1..=5
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Self(number))
    }

    /// All supported versions, smallest first
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }

    /// Get the version number
    pub fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Bit capacity ceiling for this version
    pub fn capacity_bits(self) -> usize {
        CAPACITY_BITS[self.index()]
    }

    /// Center (row = col) of the single alignment pattern, if any
    pub fn alignment_center(self) -> Option<usize> {
        ALIGNMENT_CENTERS[self.index()]
    }

    fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for Version {
    type Error = QrError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Version::new(number).ok_or(QrError::InvalidVersion(number))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        let sizes: Vec<usize> = Version::all().map(Version::size).collect();
        assert_eq!(sizes, vec![21, 25, 29, 33, 37]);
    }

    #[test]
    fn test_version_bounds() {
        assert!(Version::new(0).is_none());
        assert!(Version::new(6).is_none());
        assert_eq!(Version::new(3).map(Version::number), Some(3));
        assert!(matches!(
            Version::try_from(40),
            Err(QrError::InvalidVersion(40))
        ));
    }

    #[test]
    fn test_capacity_and_alignment() {
        assert_eq!(Version::MIN.capacity_bits(), 152);
        assert_eq!(Version::MAX.capacity_bits(), 864);
        assert_eq!(Version::MIN.alignment_center(), None);
        assert_eq!(Version::new(2).and_then(Version::alignment_center), Some(18));
        assert_eq!(Version::MAX.alignment_center(), Some(30));
    }
}
