use snapcrop_core::session::Phase;

use crate::app::SnapcropApp;
use crate::panels::{crop_interaction, subject};
use crate::states::Stage;

pub fn show(ctx: &egui::Context, app: &mut SnapcropApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            app.viewport.panel_size = rect.size();
            paint_background(ui, rect);

            if !matches!(app.ui_state.stage, Stage::Crop) {
                subject::show(ui, app);
                return;
            }

            let texture_id = app.viewport.texture.as_ref().map(|t| t.id());
            match (texture_id, app.screen.display_metrics()) {
                (Some(texture_id), Some(display)) => {
                    let origin = rect.min;
                    let img_rect = crop_interaction::to_screen(&display.image_rect(), origin);
                    draw_image(ui, texture_id, img_rect);

                    if app.screen.is_busy() {
                        draw_busy_label(ui, img_rect);
                    } else {
                        crop_interaction::show(ui, app, origin);
                    }
                }
                _ => show_placeholder(ui, app.screen.phase()),
            }
        });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(20));
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_busy_label(ui: &egui::Ui, img_rect: egui::Rect) {
    ui.painter()
        .rect_filled(img_rect, 0.0, egui::Color32::from_black_alpha(100));
    ui.painter().text(
        img_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Finding the question...",
        egui::FontId::proportional(18.0),
        egui::Color32::from_white_alpha(220),
    );
}

fn show_placeholder(ui: &mut egui::Ui, phase: Phase) {
    let text = match phase {
        Phase::Loading => "Loading photo...",
        _ => "Open a photo to begin",
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
