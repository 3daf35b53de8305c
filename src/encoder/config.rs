use std::sync::OnceLock;

use super::version::OverflowPolicy;

/// Smallest pixel size the calling layer hands to the renderer.
pub const MIN_PIXEL_SIZE: u32 = 100;
/// Largest pixel size the calling layer hands to the renderer.
pub const MAX_PIXEL_SIZE: u32 = 1000;
/// Pixel size used when nothing else is configured.
pub const DEFAULT_PIXEL_SIZE: u32 = 200;
/// Quiet zone width used when nothing else is configured.
pub const DEFAULT_MARGIN: usize = 4;
/// Widest quiet zone accepted from the environment.
pub const MAX_MARGIN: usize = 16;
/// Dark color used when nothing else is configured.
pub const DEFAULT_DARK_COLOR: &str = "#000000";
/// Light color used when nothing else is configured.
pub const DEFAULT_LIGHT_COLOR: &str = "#ffffff";

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_string(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

static DEFAULT_SIZE: OnceLock<u32> = OnceLock::new();

pub(crate) fn default_pixel_size() -> u32 {
    *DEFAULT_SIZE.get_or_init(|| {
        parse_env_u32("QR_DEFAULT_SIZE", DEFAULT_PIXEL_SIZE).clamp(MIN_PIXEL_SIZE, MAX_PIXEL_SIZE)
    })
}

static DEFAULT_MARGIN_MODULES: OnceLock<usize> = OnceLock::new();

pub(crate) fn default_margin() -> usize {
    *DEFAULT_MARGIN_MODULES
        .get_or_init(|| parse_env_usize("QR_DEFAULT_MARGIN", DEFAULT_MARGIN).min(MAX_MARGIN))
}

static DEFAULT_DARK: OnceLock<String> = OnceLock::new();

pub(crate) fn default_dark_color() -> &'static str {
    DEFAULT_DARK.get_or_init(|| parse_env_string("QR_DEFAULT_DARK", DEFAULT_DARK_COLOR))
}

static DEFAULT_LIGHT: OnceLock<String> = OnceLock::new();

pub(crate) fn default_light_color() -> &'static str {
    DEFAULT_LIGHT.get_or_init(|| parse_env_string("QR_DEFAULT_LIGHT", DEFAULT_LIGHT_COLOR))
}

static OVERFLOW_POLICY: OnceLock<OverflowPolicy> = OnceLock::new();

pub(crate) fn overflow_policy() -> OverflowPolicy {
    *OVERFLOW_POLICY.get_or_init(|| {
        std::env::var("QR_OVERFLOW_POLICY")
            .ok()
            .and_then(|v| v.parse::<OverflowPolicy>().ok())
            .unwrap_or_default()
    })
}

/// Clamp a caller-supplied pixel size into the accepted range.
pub fn clamp_pixel_size(size: u32) -> u32 {
    size.clamp(MIN_PIXEL_SIZE, MAX_PIXEL_SIZE)
}
