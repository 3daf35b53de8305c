//! QR endpoint logic for the short-link service, without the HTTP layer.
//!
//! The caller owns routing; this module turns the query parameters of a
//! `/api/qr/<code>` request into clamped render options, looks the code up in
//! a [`LinkStore`], and produces either the SVG body or the JSON body.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::Encoder;
use crate::encoder::config::{
    MAX_PIXEL_SIZE, MIN_PIXEL_SIZE, default_dark_color, default_light_color, default_margin,
    default_pixel_size,
};
use crate::error::{QrError, Result};
use crate::render::{RenderOptions, to_data_url};

/// Content type of the SVG response body
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
/// Cache header sent with SVG responses
pub const SVG_CACHE_CONTROL: &str = "public, max-age=86400";

/// Lookup interface of the short-link record store
pub trait LinkStore {
    /// Whether `short_code` names a stored link
    fn contains(&self, short_code: &str) -> bool;
}

/// In-memory link store keyed by short code, valued by original URL
#[derive(Debug, Clone, Default)]
pub struct MemoryLinkStore {
    links: HashMap<String, String>,
}

impl MemoryLinkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a link
    pub fn insert(&mut self, short_code: impl Into<String>, original_url: impl Into<String>) {
        self.links.insert(short_code.into(), original_url.into());
    }

    /// Original URL for `short_code`
    pub fn get(&self, short_code: &str) -> Option<&str> {
        self.links.get(short_code).map(String::as_str)
    }
}

impl LinkStore for MemoryLinkStore {
    fn contains(&self, short_code: &str) -> bool {
        self.links.contains_key(short_code)
    }
}

/// Response flavor requested through `format=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrFormat {
    /// Raw SVG document
    #[default]
    Svg,
    /// JSON body carrying a data URI
    Json,
}

/// Parsed query parameters of a QR request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    /// Requested size before clamping; may be zero or negative
    pub size: i64,
    /// Requested dark color, unvalidated
    pub dark: String,
    /// Requested light color, unvalidated
    pub light: String,
    /// Requested response flavor
    pub format: QrFormat,
}

impl Default for QrRequest {
    fn default() -> Self {
        Self {
            size: i64::from(default_pixel_size()),
            dark: default_dark_color().to_string(),
            light: default_light_color().to_string(),
            format: QrFormat::Svg,
        }
    }
}

impl QrRequest {
    /// Build a request from decoded query pairs.
    ///
    /// Unknown keys are ignored. `size` takes the leading signed integer of the
    /// value (`"300px"` is 300); no digits or a zero fall back to the default.
    /// Unknown `format` values mean SVG.
    pub fn from_query<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = Self::default();
        for (key, value) in pairs {
            match key {
                "size" => {
                    request.size = parse_leading_int(value)
                        .filter(|&s| s != 0)
                        .unwrap_or_else(|| i64::from(default_pixel_size()));
                }
                "dark" if !value.is_empty() => request.dark = value.to_string(),
                "light" if !value.is_empty() => request.light = value.to_string(),
                "format" => {
                    request.format = if value == "json" {
                        QrFormat::Json
                    } else {
                        QrFormat::Svg
                    };
                }
                _ => {}
            }
        }
        request
    }

    /// Render options with the size clamped and unsafe colors replaced
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            pixel_size: self
                .size
                .clamp(i64::from(MIN_PIXEL_SIZE), i64::from(MAX_PIXEL_SIZE)) as u32,
            dark_color: sanitize_color(&self.dark, default_dark_color()),
            light_color: sanitize_color(&self.light, default_light_color()),
            margin: default_margin(),
        }
    }
}

/// Leading signed decimal integer of `value`, after optional whitespace.
///
/// Trailing garbage is ignored; magnitudes past `i64` saturate.
fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let n = digits[..len].bytes().fold(0i64, |n, b| {
        n.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -n } else { n })
}

/// Whether `color` is a hex color (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or an
/// alphabetic CSS color name
pub fn is_valid_color(color: &str) -> bool {
    if let Some(hex) = color.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    !color.is_empty() && color.len() <= 32 && color.chars().all(|c| c.is_ascii_alphabetic())
}

fn sanitize_color(color: &str, fallback: &str) -> String {
    if is_valid_color(color) {
        color.to_string()
    } else {
        fallback.to_string()
    }
}

/// JSON response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrJsonBody {
    /// The short code that was looked up
    pub short_code: String,
    /// Fully-qualified short URL that was encoded
    pub short_url: String,
    /// SVG wrapped as a base64 data URI
    pub qr_code: String,
    /// Size as requested (before clamping)
    pub size: i64,
    /// Dark color as requested
    pub dark_color: String,
    /// Light color as requested
    pub light_color: String,
}

/// Rendered response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrOutput {
    /// SVG document, served as [`SVG_CONTENT_TYPE`]
    Svg(String),
    /// JSON body
    Json(QrJsonBody),
}

impl QrOutput {
    /// Content type for the response body
    pub fn content_type(&self) -> &'static str {
        match self {
            QrOutput::Svg(_) => SVG_CONTENT_TYPE,
            QrOutput::Json(_) => "application/json",
        }
    }

    /// Cache-Control header value; only SVG responses are cacheable
    pub fn cache_control(&self) -> Option<&'static str> {
        match self {
            QrOutput::Svg(_) => Some(SVG_CACHE_CONTROL),
            QrOutput::Json(_) => None,
        }
    }

    /// Serialized response body
    pub fn into_body(self) -> Result<String> {
        match self {
            QrOutput::Svg(svg) => Ok(svg),
            QrOutput::Json(body) => Ok(serde_json::to_string(&body)?),
        }
    }
}

/// Produces QR responses for stored short links
pub struct QrService<S: LinkStore> {
    store: S,
    encoder: Encoder,
}

impl<S: LinkStore> QrService<S> {
    /// Create a service over `store` with the default encoder
    pub fn new(store: S) -> Self {
        Self::with_encoder(store, Encoder::new())
    }

    /// Create a service with an explicit encoder
    pub fn with_encoder(store: S, encoder: Encoder) -> Self {
        Self { store, encoder }
    }

    /// Access the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Render the QR code for `short_code`, encoding `"{origin}/{short_code}"`
    pub fn render(&self, short_code: &str, origin: &str, request: &QrRequest) -> Result<QrOutput> {
        if !self.store.contains(short_code) {
            return Err(QrError::NotFound(short_code.to_string()));
        }

        let short_url = format!("{}/{}", origin.trim_end_matches('/'), short_code);
        let options = request.render_options();
        let svg = self.encoder.render_svg(&short_url, &options)?;
        debug!(short_code, size = options.pixel_size, "rendered QR code");

        Ok(match request.format {
            QrFormat::Svg => QrOutput::Svg(svg),
            QrFormat::Json => QrOutput::Json(QrJsonBody {
                short_code: short_code.to_string(),
                short_url,
                qr_code: to_data_url(&svg),
                size: request.size,
                dark_color: request.dark.clone(),
                light_color: request.light.clone(),
            }),
        })
    }
}
