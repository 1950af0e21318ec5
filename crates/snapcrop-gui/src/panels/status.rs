use snapcrop_core::crop::CropSeed;

use crate::app::SnapcropApp;

pub fn show(ctx: &egui::Context, app: &mut SnapcropApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        ui.horizontal(|ui| {
            if app.screen.is_busy() {
                ui.spinner();
                ui.label("Detecting text...");
            } else {
                ui.label("");
            }
        });

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            if let Some(view) = app.screen.crop_view() {
                let r = view.rect;
                ui.label(format!(
                    "Crop {:.0}x{:.0} at ({:.0}, {:.0})",
                    r.width, r.height, r.left, r.top
                ));
                ui.separator();
            }
            match app.screen.seed() {
                Some(CropSeed::Detected) => ui.label("Seeded from text"),
                Some(CropSeed::Default) => ui.label("Default crop"),
                None => ui.label(format!("{:?}", app.screen.phase())),
            };
        });

        ui.add_space(2.0);
    });
}
