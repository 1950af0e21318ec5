mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

use snapcrop_core::config::AppConfig;

/// Config picked up from the working directory when present.
const CONFIG_FILE: &str = "snapcrop.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 960.0])
            .with_min_inner_size([320.0, 480.0])
            .with_title("Snapcrop"),
        ..Default::default()
    };

    eframe::run_native(
        "Snapcrop",
        options,
        Box::new(move |cc| Ok(Box::new(app::SnapcropApp::new(&cc.egui_ctx, config)))),
    )
}

fn load_config() -> AppConfig {
    let path = std::path::Path::new(CONFIG_FILE);
    if !path.exists() {
        return AppConfig::default();
    }
    match AppConfig::load(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {CONFIG_FILE}");
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring {CONFIG_FILE}: {e}");
            AppConfig::default()
        }
    }
}
