use std::path::PathBuf;

use clap::Parser;

use glyphcast::{ConversionEngine, ConversionRequest, MagickRasterizer, is_magick_on_path};

/// Rasterize named icon-font glyphs into per-element images.
#[derive(Parser, Debug)]
#[command(name = "glyphcast", version)]
struct Cli {
    /// Mapping file associating element names with codepoints (.json or .scss).
    #[arg(short, long)]
    map: PathBuf,

    /// TrueType font file to rasterize from (.ttf).
    #[arg(short, long)]
    ttf: PathBuf,

    /// Output directory (created if it does not exist).
    #[arg(short, long)]
    output: PathBuf,

    /// Glyph fill color.
    #[arg(short, long, default_value = "black")]
    color: String,

    /// Font point size.
    #[arg(short, long = "pointsize", default_value_t = 50)]
    pointsize: u32,

    /// Edge of the generated square images, in pixels.
    #[arg(short, long, default_value_t = 72)]
    size: u32,

    /// Output image file format.
    #[arg(short, long, default_value = "gif")]
    format: String,

    /// Trim transparent padding after rendering.
    #[arg(long, default_value_t = false)]
    trim: bool,

    /// Scale all outputs to this dimension after rendering.
    #[arg(long)]
    resize: Option<u32>,

    /// Resize against the target width instead of the target height.
    #[arg(long, default_value_t = false)]
    resize_width: bool,

    /// Log level.
    #[arg(short, long, default_value = "info", value_parser = ["error", "warn", "info", "debug"])]
    verbosity: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.verbosity);

    let font_name = cli
        .ttf
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::info!(font = %font_name, "starting extraction");
    tracing::debug!(
        map = %cli.map.display(),
        ttf = %cli.ttf.display(),
        output = %cli.output.display(),
        "run inputs"
    );
    if !is_magick_on_path() {
        tracing::warn!("ImageMagick `convert` not found on PATH; rendering will fail");
    }

    let request = ConversionRequest {
        color: cli.color,
        point_size: cli.pointsize,
        image_size: cli.size,
        file_format: cli.format,
        trim: cli.trim,
        resize_to: cli.resize,
        resize_by_width: cli.resize_width,
    };

    let mut engine = ConversionEngine::new(cli.map, cli.ttf, cli.output.clone(), MagickRasterizer);
    if !engine.run(&request)? {
        std::process::exit(1);
    }

    tracing::info!(output = %cli.output.display(), "extraction done");
    Ok(())
}

fn init_logging(verbosity: &str) {
    let level = match verbosity {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
