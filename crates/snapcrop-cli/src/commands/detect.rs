use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use snapcrop_core::detection::{InkDetector, TextDetector, ThresholdMethod};

use super::load_config;

#[derive(Args)]
pub struct DetectArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use Otsu's method even if the config sets a fixed threshold
    #[arg(long, conflicts_with = "fixed_threshold")]
    pub otsu: bool,

    /// Fixed threshold value in [0.0, 1.0]
    #[arg(long)]
    pub fixed_threshold: Option<f32>,

    /// Padding in pixels around the detected text
    #[arg(long)]
    pub padding: Option<f32>,

    /// Gaussian blur sigma for noise suppression before detection
    #[arg(long)]
    pub blur_sigma: Option<f32>,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?.detection;
    if let Some(val) = args.fixed_threshold {
        config.threshold_method = ThresholdMethod::Fixed(val);
    } else if args.otsu {
        config.threshold_method = ThresholdMethod::Otsu;
    }
    if let Some(padding) = args.padding {
        config.padding = padding;
    }
    if let Some(sigma) = args.blur_sigma {
        config.blur_sigma = sigma;
    }

    let detector = InkDetector::new(config)?;

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message(format!(
        "Detecting ({})",
        detector.config().threshold_method
    ));

    let results: Vec<_> = args
        .files
        .par_iter()
        .map(|path| {
            let result = detector.recognize_region(&path.to_string_lossy());
            pb.inc(1);
            (path, result)
        })
        .collect();
    pb.finish_and_clear();

    let path_style = Style::new().underlined();
    let found = Style::new().green();
    let missing = Style::new().dim().yellow();
    let failed = Style::new().red().bold();

    let mut errors = 0usize;
    for (path, result) in &results {
        match result {
            Ok(Some(region)) => println!(
                "{}  {}",
                path_style.apply_to(path.display()),
                found.apply_to(format!(
                    "{:.0}x{:.0} at ({:.0}, {:.0})",
                    region.width, region.height, region.left, region.top
                ))
            ),
            Ok(None) => println!(
                "{}  {}",
                path_style.apply_to(path.display()),
                missing.apply_to("no text found")
            ),
            Err(e) => {
                errors += 1;
                println!(
                    "{}  {}",
                    path_style.apply_to(path.display()),
                    failed.apply_to(format!("error: {e}"))
                );
            }
        }
    }

    if errors > 0 {
        anyhow::bail!("{errors} of {} images could not be read", results.len());
    }
    Ok(())
}
