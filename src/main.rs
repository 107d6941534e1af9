use clap::Parser;
use std::path::PathBuf;
use sukashi::config::WatermarkStyle;
use sukashi::error::WatermarkError;
use sukashi::fonts::SystemFontProvider;
use sukashi::{images, processor};

/// Sukashi - apply diagonal repeating text watermarks to photos
#[derive(Parser, Debug)]
#[command(name = "sukashi")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the input image
    #[arg(short, long)]
    input: PathBuf,

    /// Path for the watermarked output; defaults to "<input>_wm.<ext>"
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Watermark text (e.g. "(c) Your Name")
    #[arg(short, long)]
    text: Option<String>,

    /// Path to a TrueType font file; system fonts are tried when unset
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in pixels
    #[arg(long)]
    font_size: Option<u32>,

    /// Text color in hex format (e.g. #FFFFFF)
    #[arg(long)]
    font_color: Option<String>,

    /// Outline color in hex format
    #[arg(long)]
    outline_color: Option<String>,

    /// Width of the text outline in pixels; 0 disables the outline
    #[arg(long)]
    outline_width: Option<u32>,

    /// Rotation angle of the repeated text in degrees
    #[arg(long)]
    angle: Option<f32>,

    /// Pattern density in (0, 1]; higher packs the text tighter
    #[arg(long)]
    density: Option<f32>,

    /// Watermark opacity from 0.0 to 1.0
    #[arg(short = 'a', long)]
    opacity: Option<f32>,

    /// Optional YAML style file; command-line flags override its values
    #[arg(long)]
    style_file: Option<PathBuf>,
}

/// Merge the optional style file with command-line overrides.
fn build_style(args: &Args) -> Result<WatermarkStyle, WatermarkError> {
    let mut style = match &args.style_file {
        Some(path) => WatermarkStyle::from_file(path)?,
        None => WatermarkStyle::default(),
    };

    if let Some(text) = &args.text {
        style.text = text.clone();
    }
    if args.font.is_some() {
        style.font_path = args.font.clone();
    }
    if let Some(font_size) = args.font_size {
        style.font_size = font_size;
    }
    if let Some(font_color) = &args.font_color {
        style.fill_color = font_color.clone();
    }
    if let Some(outline_color) = &args.outline_color {
        style.outline_color = outline_color.clone();
    }
    if let Some(outline_width) = args.outline_width {
        style.outline_width = outline_width;
    }
    if let Some(angle) = args.angle {
        style.angle = angle;
    }
    if let Some(density) = args.density {
        style.density = density;
    }
    if let Some(opacity) = args.opacity {
        style.opacity = opacity;
    }

    if style.text.is_empty() {
        return Err(WatermarkError::Config(
            "watermark text is required (pass --text or set it in the style file)".to_string(),
        ));
    }

    Ok(style)
}

fn main() {
    // Initialize logging subsystem
    sukashi::logging::init_subscriber().expect("Failed to initialize logging subsystem");

    // Parse command-line arguments
    let args = Args::parse();

    let style = build_style(&args).unwrap_or_else(|e| {
        eprintln!("Invalid watermark style: {}", e);
        std::process::exit(1);
    });

    let base = images::load_image(&args.input).unwrap_or_else(|e| {
        eprintln!("Failed to load input image: {}", e);
        std::process::exit(1);
    });

    tracing::info!(
        input = %args.input.display(),
        width = base.width(),
        height = base.height(),
        text = %style.text,
        angle = style.angle,
        density = style.density,
        opacity = style.opacity,
        "Applying text watermark"
    );

    let fonts = SystemFontProvider::new(style.font_path.clone());

    let watermarked = processor::apply_text_watermark(&base, &style, &fonts).unwrap_or_else(|e| {
        eprintln!("Failed to apply watermark: {}", e);
        std::process::exit(1);
    });

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| images::default_output_path(&args.input));

    images::save_image(&watermarked, &output_path).unwrap_or_else(|e| {
        eprintln!("Failed to save output image: {}", e);
        std::process::exit(1);
    });

    tracing::info!(output = %output_path.display(), "Watermark applied successfully");
}
