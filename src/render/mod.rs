//! Output formats for a finished matrix
//!
//! - SVG documents with caller-chosen size, colors and quiet zone
//! - Base64 data URIs for JSON callers
//! - Grayscale rasters and PNG bytes

/// Base64 data URI wrapping
pub mod data_url;
/// Grayscale raster and PNG output
pub mod raster;
/// SVG document output
pub mod svg;

pub use data_url::{SVG_DATA_URL_PREFIX, to_data_url};
pub use raster::{to_luma_image, to_png};
pub use svg::{RenderOptions, SvgRenderer};
