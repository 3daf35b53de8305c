//! qr_svg - QR matrices for short URLs
//!
//! A small byte-mode QR encoder that turns a short text payload into a module
//! grid (versions 1-5) and renders it as SVG, PNG or a data URI.
//!
//! The encoder is deliberately simplified: one fixed checkerboard mask,
//! constant format information and no error-correction codewords. Output is
//! deterministic but is not guaranteed to scan on strict readers.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR matrix encoding modules (bit stream, version, patterns, placement, mask)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Matrix, Module, Version, BitMatrix)
pub mod models;
/// Output formats (SVG, data URI, PNG)
pub mod render;
/// QR endpoint logic for the short-link service
pub mod service;

pub use encoder::OverflowPolicy;
pub use error::{QrError, Result};
pub use models::{BitMatrix, Matrix, Module, Version};
pub use render::RenderOptions;

use encoder::{BitStreamEncoder, DataPlacer, Masker, MatrixBuilder, config};
use rayon::prelude::*;
use render::{SvgRenderer, to_data_url, to_png};
use tracing::{debug, warn};

/// Encode `payload` into a finished matrix using the configured overflow policy
///
/// # Example
/// ```
/// let matrix = qr_svg::encode("https://s.tt/abc123").unwrap();
/// assert_eq!(matrix.size(), 25);
/// ```
pub fn encode(payload: &str) -> Result<Matrix> {
    Encoder::new().encode(payload)
}

/// Encode `payload` and render it as an SVG document
pub fn generate_svg(payload: &str, options: &RenderOptions) -> Result<String> {
    Encoder::new().render_svg(payload, options)
}

/// Encode `payload` and render it as an SVG data URI
pub fn generate_data_url(payload: &str, options: &RenderOptions) -> Result<String> {
    Encoder::new().render_data_url(payload, options)
}

/// Encoder with a fixed overflow policy
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    policy: OverflowPolicy,
}

impl Encoder {
    /// Create an encoder using the policy from `QR_OVERFLOW_POLICY` (default: reject)
    pub fn new() -> Self {
        Self {
            policy: config::overflow_policy(),
        }
    }

    /// Create an encoder with an explicit overflow policy
    pub fn with_policy(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    /// Overflow policy in use
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Run the full pipeline: bit stream, version, patterns, placement, mask
    pub fn encode(&self, payload: &str) -> Result<Matrix> {
        let stream = BitStreamEncoder::encode_with_policy(payload, self.policy)?;
        let mut matrix = MatrixBuilder::build(stream.version());

        let placed = DataPlacer::place(&mut matrix, stream.bits());
        if placed < stream.len() {
            warn!(
                placed,
                total = stream.len(),
                "data region too small, trailing bits dropped"
            );
        }

        Masker::apply(&mut matrix);

        debug!(
            version = stream.version().number(),
            data_bits = stream.data_bits(),
            dark = matrix.count_dark(),
            "encoded matrix"
        );
        Ok(matrix)
    }

    /// Encode and render as SVG
    pub fn render_svg(&self, payload: &str, options: &RenderOptions) -> Result<String> {
        let matrix = self.encode(payload)?;
        Ok(SvgRenderer::render(&matrix, options))
    }

    /// Encode and render as an SVG data URI
    pub fn render_data_url(&self, payload: &str, options: &RenderOptions) -> Result<String> {
        let svg = self.render_svg(payload, options)?;
        Ok(to_data_url(&svg))
    }

    /// Encode and render as PNG bytes
    pub fn render_png(&self, payload: &str, scale: u32, margin: u32) -> Result<Vec<u8>> {
        let matrix = self.encode(payload)?;
        to_png(&matrix, scale, margin)
    }

    /// Render many payloads in parallel; results keep the input order
    pub fn render_batch(&self, payloads: &[&str], options: &RenderOptions) -> Vec<Result<String>> {
        payloads
            .par_iter()
            .map(|payload| self.render_svg(payload, options))
            .collect()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_short_url() {
        let matrix = Encoder::with_policy(OverflowPolicy::Reject)
            .encode("https://s.tt/abc123")
            .unwrap();
        assert_eq!(matrix.version().number(), 2);
        assert_eq!(matrix.size(), 25);
        assert_eq!(matrix.count_unset(), 0);
    }

    #[test]
    fn test_empty_payload() {
        let matrix = Encoder::with_policy(OverflowPolicy::Reject)
            .encode("")
            .unwrap();
        assert_eq!(matrix.version(), Version::MIN);
        assert_eq!(matrix.count_unset(), 0);
    }

    #[test]
    fn test_overflow_policies() {
        let payload = "z".repeat(255);
        let reject = Encoder::with_policy(OverflowPolicy::Reject).encode(&payload);
        assert!(matches!(reject, Err(QrError::CapacityExceeded { .. })));

        let clamp = Encoder::with_policy(OverflowPolicy::Clamp)
            .encode(&payload)
            .unwrap();
        assert_eq!(clamp.version(), Version::MAX);
        assert_eq!(clamp.count_unset(), 0);
    }

    #[test]
    fn test_render_batch_keeps_order() {
        let encoder = Encoder::with_policy(OverflowPolicy::Reject);
        let options = RenderOptions::with_size(200);
        let long = "q".repeat(200);
        let payloads = ["https://s.tt/a", long.as_str(), "https://s.tt/b"];

        let results = encoder.render_batch(&payloads, &options);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap(),
            &encoder.render_svg("https://s.tt/a", &options).unwrap()
        );
        assert!(results[1].is_err());
        assert_eq!(
            results[2].as_ref().unwrap(),
            &encoder.render_svg("https://s.tt/b", &options).unwrap()
        );
    }
}
