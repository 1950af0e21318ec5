use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use snapcrop_core::capture::{CaptureProvider, FileCapture};
use snapcrop_core::crop::Handle;
use snapcrop_core::detection::InkDetector;
use snapcrop_core::geometry::{BoundingBox, Viewport};
use snapcrop_core::session::{CropHandoff, CropScreen};
use snapcrop_core::subject::{select_subject, Subject};
use tracing::debug;

use super::{load_config, parse_viewport, resolve_viewport};
use crate::script::DragScript;
use crate::summary::{print_session_summary, GestureOutcome};

#[derive(Args)]
pub struct CropArgs {
    /// Input image file
    pub file: PathBuf,

    /// Seed the crop box from detected text (defaults to the config setting)
    #[arg(long)]
    pub auto: Option<bool>,

    /// Drag script (TOML) replayed before confirming
    #[arg(long)]
    pub drag: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT (defaults to the config viewport)
    #[arg(long, value_parser = parse_viewport)]
    pub viewport: Option<Viewport>,

    /// Also report the crop mapped back into image pixels
    #[arg(long)]
    pub image_space: bool,

    /// File the crop under this subject
    #[arg(long)]
    pub subject: Option<Subject>,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
struct CropReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    subject: Option<Subject>,
    crop: CropHandoff,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_space: Option<BoundingBox>,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let viewport = resolve_viewport(args.viewport, &config)?;
    let auto_detect = args.auto.unwrap_or(config.detection.auto_detect);
    let script = match &args.drag {
        Some(path) => DragScript::load(path)?,
        None => DragScript::default(),
    };

    let captured = FileCapture::new(Some(args.file.clone())).capture()?;
    let mut screen = CropScreen::new(
        Some(captured.uri.clone()),
        auto_detect,
        viewport,
        config.crop.clone(),
    );

    if let Some(ticket) = screen.image_loaded(captured.metrics)? {
        let detector = InkDetector::new(config.detection.clone())?;
        screen.run_detection(ticket, &detector)?;
    }

    let mut outcomes = Vec::with_capacity(script.gestures.len());
    for gesture in &script.gestures {
        let handle = Handle::from(gesture.handle);
        if !screen.begin_drag(handle) {
            anyhow::bail!("Crop box is not ready for a {handle} gesture");
        }
        let mut accepted = 0usize;
        for &[tx, ty] in &gesture.path {
            if screen.update_drag(handle, tx, ty) {
                accepted += 1;
            }
        }
        if gesture.cancel {
            screen.cancel_drag(handle);
        } else {
            screen.end_drag(handle);
        }
        debug!(%handle, accepted, "Gesture replayed");
        outcomes.push(GestureOutcome {
            handle,
            updates: gesture.path.len(),
            accepted,
            cancelled: gesture.cancel,
        });
    }

    print_session_summary(&screen, &outcomes);

    let handoff = screen.confirm()?;
    let image_space = if args.image_space {
        match (screen.display_metrics(), screen.image_metrics()) {
            (Some(display), Some(image)) => Some(handoff.to_image_space(&display, &image)),
            _ => None,
        }
    } else {
        None
    };

    let (subject, crop) = match args.subject {
        Some(subject) => {
            let selection = select_subject(handoff, subject);
            (Some(selection.subject), selection.crop)
        }
        None => (None, handoff),
    };

    let report = CropReport {
        subject,
        crop,
        image_space,
    };
    print!("{}", toml::to_string_pretty(&report)?);
    Ok(())
}
