use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use snapcrop_core::config::AppConfig;
use snapcrop_core::detection::{InkDetector, TextDetector};
use snapcrop_core::geometry::ImageMetrics;

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    detector: InkDetector,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("snapcrop-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, detector);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    mut detector: InkDetector,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path } => {
                handle_load_image(&path, &tx, &ctx);
            }
            WorkerCommand::Detect { ticket, uri } => {
                let start = Instant::now();
                let result = detector.recognize_region(&uri);
                tracing::debug!(
                    generation = ticket.generation(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Detection finished"
                );
                send(&tx, &ctx, WorkerResult::Detected { ticket, result });
            }
            WorkerCommand::ImportConfig { path } => match AppConfig::load(&path) {
                Ok(config) => match InkDetector::new(config.detection.clone()) {
                    Ok(imported) => {
                        detector = imported;
                        send_log(&tx, &ctx, format!("Config imported: {}", path.display()));
                        send(&tx, &ctx, WorkerResult::ConfigImported { config });
                    }
                    Err(e) => send_error(&tx, &ctx, format!("Failed to import config: {e}")),
                },
                Err(e) => send_error(&tx, &ctx, format!("Failed to import config: {e}")),
            },
            WorkerCommand::ExportConfig { path, config } => {
                let written = toml::to_string_pretty(&config)
                    .map_err(|e| e.to_string())
                    .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
                match written {
                    Ok(()) => send_log(&tx, &ctx, format!("Config saved: {}", path.display())),
                    Err(e) => send_error(&tx, &ctx, format!("Failed to save config: {e}")),
                }
            }
        }
    }
}

fn handle_load_image(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let decoded = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            send_error(tx, ctx, format!("Failed to open {}: {e}", path.display()));
            return;
        }
    };

    let (width, height) = decoded.dimensions();
    let metrics = match ImageMetrics::new(width, height) {
        Ok(m) => m,
        Err(e) => {
            send_error(tx, ctx, format!("{}: {e}", path.display()));
            return;
        }
    };

    send(
        tx,
        ctx,
        WorkerResult::ImageLoaded {
            uri: path.to_string_lossy().into_owned(),
            metrics,
            image: rgba_to_color_image(&decoded),
        },
    );
}
