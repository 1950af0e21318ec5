use std::path::PathBuf;
use std::sync::mpsc;

use snapcrop_core::config::AppConfig;
use snapcrop_core::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use snapcrop_core::crop::CropSeed;
use snapcrop_core::detection::InkDetector;
use snapcrop_core::geometry::{ImageMetrics, Viewport};
use snapcrop_core::session::{CropScreen, Phase};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{CropUiState, Stage, UIState, ViewportState};
use crate::worker;

pub struct SnapcropApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: AppConfig,
    pub screen: CropScreen,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub crop_ui: CropUiState,
    pub show_about: bool,
}

impl SnapcropApp {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let detector = InkDetector::new(config.detection.clone()).unwrap_or_else(|e| {
            tracing::warn!("Using default detection settings: {e}");
            InkDetector::default()
        });
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone(), detector);

        let viewport = config.viewport.to_viewport().unwrap_or(Viewport {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        });
        let screen = CropScreen::idle(config.detection.auto_detect, viewport, config.crop.clone());

        Self {
            cmd_tx,
            result_rx,
            config,
            screen,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            crop_ui: CropUiState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { uri, metrics, image } => {
                    let size = image.size;
                    let texture = ctx.load_texture("photo", image, egui::TextureOptions::LINEAR);
                    self.viewport.texture = Some(texture);
                    self.viewport.image_size = Some(size);
                    self.start_session(uri, metrics);
                }
                WorkerResult::Detected { ticket, result } => {
                    if self.screen.detection_finished(ticket, result) {
                        self.crop_ready();
                    }
                }
                WorkerResult::ConfigImported { config } => {
                    self.screen.set_auto_detect(config.detection.auto_detect);
                    self.screen.set_crop_config(config.crop.clone());
                    self.config = config;
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Lay out a freshly decoded image and either start detection or
    /// create the crop box right away.
    fn start_session(&mut self, uri: String, metrics: ImageMetrics) {
        let viewport = self.viewport.panel_viewport(self.screen.viewport());
        self.ui_state.stage = Stage::Crop;
        self.crop_ui.reset();
        self.screen.retake(Some(uri.clone()), viewport);
        self.ui_state.file_path = Some(PathBuf::from(&uri));
        self.ui_state.add_log(format!(
            "Opened: {uri} ({}x{})",
            metrics.width, metrics.height
        ));

        match self.screen.image_loaded(metrics) {
            Ok(Some(ticket)) => self.send_command(WorkerCommand::Detect { ticket, uri }),
            Ok(None) => self.crop_ready(),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    fn crop_ready(&mut self) {
        let (Some(display), Some(view)) = (self.screen.display_metrics(), self.screen.crop_view())
        else {
            return;
        };
        self.crop_ui.start_transition(display.image_rect(), view.rect);
        let source = match self.screen.seed() {
            Some(CropSeed::Detected) => "detected text",
            _ => "default",
        };
        self.ui_state.add_log(format!("Crop seeded from {source}"));
    }

    /// Emit the handoff and move on to the subject picker.
    pub fn confirm(&mut self) {
        match self.screen.confirm() {
            Ok(handoff) => {
                self.crop_ui.reset();
                self.ui_state.stage = Stage::Subject { handoff };
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Drop the current photo. Outstanding detection results become stale.
    pub fn retake(&mut self) {
        let viewport = self.viewport.panel_viewport(self.screen.viewport());
        self.screen.retake(None, viewport);
        self.crop_ui.reset();
        self.viewport.texture = None;
        self.viewport.image_size = None;
        self.ui_state.stage = Stage::Crop;
        self.ui_state.file_path = None;
    }

    pub fn can_confirm(&self) -> bool {
        matches!(self.ui_state.stage, Stage::Crop) && self.screen.phase() == Phase::Ready
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for SnapcropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Snapcrop")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Snapcrop");
                        ui.label("Crop a photographed question");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
