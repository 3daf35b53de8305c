//! Environment-driven defaults
//!
//! The `QR_DEFAULT_*` variables are read once per process, so this file runs
//! as its own test binary and sets them before anything reads the config.

use std::process::Command;
use std::sync::Once;

use qr_svg::service::{MemoryLinkStore, QrOutput, QrRequest, QrService};
use qr_svg::{Encoder, OverflowPolicy, RenderOptions, Version};

static ENV: Once = Once::new();

fn set_env() {
    ENV.call_once(|| {
        // SAFETY: runs once, before any test reads the environment.
        unsafe {
            std::env::set_var("QR_DEFAULT_SIZE", "500");
            std::env::set_var("QR_DEFAULT_DARK", "#ff0000");
            std::env::set_var("QR_DEFAULT_LIGHT", "#00ff00");
            std::env::set_var("QR_DEFAULT_MARGIN", "2");
            std::env::set_var("QR_OVERFLOW_POLICY", "clamp");
        }
    });
}

#[test]
fn test_render_options_default_from_env() {
    set_env();
    let options = RenderOptions::default();
    assert_eq!(options.pixel_size, 500);
    assert_eq!(options.dark_color, "#ff0000");
    assert_eq!(options.light_color, "#00ff00");
    assert_eq!(options.margin, 2);
}

#[test]
fn test_service_defaults_from_env() {
    set_env();
    let request = QrRequest::from_query(Vec::<(&str, &str)>::new());
    assert_eq!(request.size, 500);

    let options = request.render_options();
    assert_eq!(options.pixel_size, 500);
    assert_eq!(options.dark_color, "#ff0000");
    assert_eq!(options.light_color, "#00ff00");
    assert_eq!(options.margin, 2);

    // Rejected colors fall back to the configured defaults, not the built-in ones
    let request = QrRequest::from_query([("dark", "url(x)"), ("light", "#12")]);
    let options = request.render_options();
    assert_eq!(options.dark_color, "#ff0000");
    assert_eq!(options.light_color, "#00ff00");

    let mut store = MemoryLinkStore::new();
    store.insert("abc123", "https://example.com/");
    let output = QrService::new(store)
        .render("abc123", "https://s.tt", &QrRequest::default())
        .unwrap();
    let QrOutput::Svg(svg) = output else {
        panic!("expected SVG output");
    };
    assert!(svg.contains(r#"viewBox="0 0 500 500""#));
    assert!(svg.contains(r##"fill="#ff0000""##));
}

#[test]
fn test_overflow_policy_from_env() {
    set_env();
    let encoder = Encoder::new();
    assert_eq!(encoder.policy(), OverflowPolicy::Clamp);
    let matrix = encoder.encode(&"z".repeat(200)).unwrap();
    assert_eq!(matrix.version(), Version::MAX);
}

#[test]
fn test_cli_uses_env_unless_flag_given() {
    let run = |args: &[&str]| {
        let output = Command::new(env!("CARGO_BIN_EXE_qrgen"))
            .args(args)
            .env("QR_DEFAULT_SIZE", "500")
            .env("QR_DEFAULT_DARK", "#ff0000")
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    let svg = run(&["svg", "https://s.tt/x"]);
    assert!(svg.contains(r#"viewBox="0 0 500 500""#));
    assert!(svg.contains(r##"fill="#ff0000""##));

    let svg = run(&["svg", "https://s.tt/x", "--size", "300", "--dark", "navy"]);
    assert!(svg.contains(r#"viewBox="0 0 300 300""#));
    assert!(svg.contains(r#"fill="navy""#));
}
