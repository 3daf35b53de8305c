use clap::{Args, Parser, Subcommand};
use qr_svg::encoder::config::clamp_pixel_size;
use qr_svg::encoder::{BitStreamEncoder, DataPlacer, Masker};
use qr_svg::render::{SvgRenderer, to_data_url};
use qr_svg::{Encoder, Matrix, OverflowPolicy, RenderOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Short-URL QR code generator")]
struct Cli {
    /// Accept oversized payloads by clamping to the largest version (lossy)
    #[arg(long, global = true)]
    clamp: bool,

    #[command(subcommand)]
    command: Command,
}

/// Render flags; anything omitted falls back to the `QR_DEFAULT_*` environment
#[derive(Args)]
struct SvgArgs {
    /// Canvas size in pixels (clamped to 100-1000) [default: QR_DEFAULT_SIZE or 200]
    #[arg(long)]
    size: Option<u32>,
    /// Dark module color [default: QR_DEFAULT_DARK or #000000]
    #[arg(long)]
    dark: Option<String>,
    /// Background color [default: QR_DEFAULT_LIGHT or #ffffff]
    #[arg(long)]
    light: Option<String>,
    /// Quiet zone in modules [default: QR_DEFAULT_MARGIN or 4]
    #[arg(long)]
    margin: Option<usize>,
}

impl SvgArgs {
    fn options(&self) -> RenderOptions {
        let mut options = RenderOptions::default();
        if let Some(size) = self.size {
            options.pixel_size = clamp_pixel_size(size);
        }
        if let Some(dark) = &self.dark {
            options.dark_color = dark.clone();
        }
        if let Some(light) = &self.light {
            options.light_color = light.clone();
        }
        if let Some(margin) = self.margin {
            options.margin = margin;
        }
        options
    }
}

#[derive(Subcommand)]
enum Command {
    /// Render a payload as SVG
    Svg {
        payload: String,
        #[command(flatten)]
        render: SvgArgs,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render a payload as PNG
    Png {
        payload: String,
        #[arg(long)]
        out: PathBuf,
        /// Pixels per module
        #[arg(long, default_value_t = 8)]
        scale: u32,
        /// Quiet zone in modules
        #[arg(long, default_value_t = 4)]
        margin: u32,
    },
    /// Print the SVG as a base64 data URI
    DataUrl {
        payload: String,
        #[command(flatten)]
        render: SvgArgs,
    },
    /// Print the module grid and bit statistics
    Dump { payload: String },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let policy = if cli.clamp {
        OverflowPolicy::Clamp
    } else {
        OverflowPolicy::Reject
    };
    let encoder = Encoder::with_policy(policy);

    let result = match cli.command {
        Command::Svg {
            payload,
            render,
            out,
        } => svg_cmd(&encoder, &payload, &render, out.as_deref()),
        Command::Png {
            payload,
            out,
            scale,
            margin,
        } => png_cmd(&encoder, &payload, &out, scale, margin),
        Command::DataUrl { payload, render } => encoder
            .render_data_url(&payload, &render.options())
            .map(|url| println!("{url}"))
            .map_err(|e| e.to_string()),
        Command::Dump { payload } => dump_cmd(&encoder, &payload),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qrgen: {err}");
            ExitCode::FAILURE
        }
    }
}

fn svg_cmd(
    encoder: &Encoder,
    payload: &str,
    render: &SvgArgs,
    out: Option<&Path>,
) -> Result<(), String> {
    let matrix = encoder.encode(payload).map_err(|e| e.to_string())?;
    let svg = SvgRenderer::render(&matrix, &render.options());
    match out {
        Some(path) => std::fs::write(path, svg)
            .map_err(|e| format!("failed to write {}: {e}", path.display())),
        None => {
            println!("{svg}");
            Ok(())
        }
    }
}

fn png_cmd(
    encoder: &Encoder,
    payload: &str,
    out: &Path,
    scale: u32,
    margin: u32,
) -> Result<(), String> {
    let png = encoder
        .render_png(payload, scale, margin)
        .map_err(|e| e.to_string())?;
    std::fs::write(out, &png).map_err(|e| format!("failed to write {}: {e}", out.display()))?;
    println!("Wrote {} bytes to {}", png.len(), out.display());
    Ok(())
}

fn dump_cmd(encoder: &Encoder, payload: &str) -> Result<(), String> {
    let stream = BitStreamEncoder::encode_with_policy(payload, encoder.policy())
        .map_err(|e| e.to_string())?;
    let matrix = encoder.encode(payload).map_err(|e| e.to_string())?;

    println!(
        "Version {} ({}x{}), data bits {}, stream bits {}, capacity {}",
        matrix.version(),
        matrix.size(),
        matrix.size(),
        stream.data_bits(),
        stream.len(),
        matrix.version().capacity_bits()
    );
    println!(
        "Reserved modules: {}, dark modules: {}",
        matrix.count_reserved(),
        matrix.count_dark()
    );
    print_matrix(&matrix);

    // Undo the mask and read the payload back through the placement order
    let mut unmasked = matrix.clone();
    Masker::apply(&mut unmasked);
    let bits = DataPlacer::extract(&unmasked);
    match BitStreamEncoder::decode_bytes(&bits) {
        Some(bytes) => println!("Read back: {}", String::from_utf8_lossy(&bytes)),
        None => println!("Read back failed"),
    }
    Ok(())
}

fn print_matrix(matrix: &Matrix) {
    for row in matrix.rows() {
        let line: String = row
            .iter()
            .map(|m| if m.is_dark() { "##" } else { "  " })
            .collect();
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_svg_args_clamp() {
        let cli = Cli::parse_from(["qrgen", "svg", "https://s.tt/x", "--size", "5000"]);
        let Command::Svg { render, .. } = cli.command else {
            panic!("expected svg subcommand");
        };
        assert_eq!(render.options().pixel_size, 1000);
        assert!(!cli.clamp);
    }

    #[test]
    fn test_svg_args_fall_back_to_defaults() {
        let cli = Cli::parse_from(["qrgen", "svg", "https://s.tt/x", "--dark", "navy"]);
        let Command::Svg { render, .. } = cli.command else {
            panic!("expected svg subcommand");
        };
        let options = render.options();
        let defaults = RenderOptions::default();
        assert_eq!(options.pixel_size, defaults.pixel_size);
        assert_eq!(options.dark_color, "navy");
        assert_eq!(options.light_color, defaults.light_color);
        assert_eq!(options.margin, defaults.margin);
    }
}
