use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// MIME prefix for inline SVG data URIs
pub const SVG_DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Wrap an SVG document as a base64 data URI
pub fn to_data_url(svg: &str) -> String {
    let mut url = String::with_capacity(SVG_DATA_URL_PREFIX.len() + svg.len().div_ceil(3) * 4);
    url.push_str(SVG_DATA_URL_PREFIX);
    STANDARD.encode_string(svg.as_bytes(), &mut url);
    url
}
