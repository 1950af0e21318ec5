use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use snapcrop_core::capture::CapturedImage;
use snapcrop_core::crop::{default_rect, CropBox};
use snapcrop_core::geometry::{compute_display_metrics, Viewport};

use super::{load_config, parse_viewport, resolve_viewport};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Viewport size as WIDTHxHEIGHT (defaults to the config viewport)
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: Option<Viewport>,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let viewport = resolve_viewport(args.viewport, &config)?;
    let image = CapturedImage::open(&args.file)?;
    let display = compute_display_metrics(&image.metrics, &viewport);
    let default = CropBox::new(
        default_rect(&display, &config.crop),
        viewport,
        config.crop.min_box_size,
    )
    .rect();

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", image.metrics.width, image.metrics.height);
    println!("Aspect:      {:.4}", image.metrics.aspect());
    println!("Viewport:    {}x{}", viewport.width, viewport.height);
    println!(
        "Displayed:   {:.1}x{:.1} at ({:.1}, {:.1})",
        display.display_width, display.display_height, display.offset_x, display.offset_y
    );
    println!(
        "Scale:       {:.4} display units per pixel",
        display.display_width / image.metrics.width as f32
    );
    println!(
        "Default box: {:.1}x{:.1} at ({:.1}, {:.1})",
        default.width, default.height, default.left, default.top
    );

    Ok(())
}
