use std::path::PathBuf;

use snapcrop_core::config::AppConfig;
use snapcrop_core::error::Result;
use snapcrop_core::geometry::{BoundingBox, ImageMetrics};
use snapcrop_core::session::DetectionTicket;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image for display.
    LoadImage { path: PathBuf },

    /// Find the text region of the image at `uri` for the crop session
    /// that issued `ticket`.
    Detect {
        ticket: DetectionTicket,
        uri: String,
    },

    /// Read a config file.
    ImportConfig { path: PathBuf },

    /// Write a config file.
    ExportConfig { path: PathBuf, config: AppConfig },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        uri: String,
        metrics: ImageMetrics,
        image: egui::ColorImage,
    },

    /// Detection outcome. Stale tickets are filtered by the crop session.
    Detected {
        ticket: DetectionTicket,
        result: Result<Option<BoundingBox>>,
    },

    ConfigImported {
        config: AppConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
