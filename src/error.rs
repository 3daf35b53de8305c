//! Error types for the encoder and its calling layer.

use thiserror::Error;

/// The error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum QrError {
    /// The payload has more code units than the 8-bit count field can describe.
    #[error("payload length {length} exceeds the 255-character count field")]
    PayloadTooLong {
        /// UTF-16 code units in the payload
        length: usize,
    },

    /// Header, data and terminator do not fit the largest supported version.
    #[error("payload needs {required_bits} bits but the largest version holds {max_bits}")]
    CapacityExceeded {
        /// Header, data and terminator bits
        required_bits: usize,
        /// Capacity of the largest version
        max_bits: usize,
    },

    /// A version number outside 1..=5.
    #[error("unsupported version {0}; only versions 1-5 are produced")]
    InvalidVersion(u8),

    /// Scale and margin give a raster side past the supported maximum.
    #[error("raster side of {side} px exceeds the {max} px limit")]
    RasterTooLarge {
        /// Requested side length in pixels (saturated)
        side: u64,
        /// Largest accepted side length
        max: u32,
    },

    /// Raster encoding failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// JSON response serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The short code is unknown to the link store.
    #[error("short URL not found: {0}")]
    NotFound(String),
}

/// A convenience `Result` alias using [`QrError`].
pub type Result<T> = std::result::Result<T, QrError>;
