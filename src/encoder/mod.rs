//! QR matrix encoding modules
//!
//! The pipeline runs leaves first, once per call:
//! - Bit stream construction (mode, count, data, terminator, padding)
//! - Version selection by bit capacity
//! - Structural pattern stamping (finder, timing, alignment, format info)
//! - Zigzag data placement
//! - Fixed checkerboard masking

/// Structural pattern stamping
pub mod builder;
/// Payload to bit stream
pub mod bitstream;
/// Environment-driven defaults
pub mod config;
/// Fixed mask pattern
pub mod mask;
/// Zigzag data placement
pub mod placement;
/// Capacity, alignment and format tables
pub mod tables;
/// Version selection and overflow policy
pub mod version;

pub use bitstream::{BitStream, BitStreamEncoder};
pub use builder::MatrixBuilder;
pub use mask::Masker;
pub use placement::DataPlacer;
pub use version::{OverflowPolicy, VersionSelector};
