use snapcrop_core::subject::{select_subject, Subject};

use crate::app::SnapcropApp;
use crate::panels::menu_bar::open_file;
use crate::states::Stage;

/// Subject picker shown after the crop is confirmed.
pub fn show(ui: &mut egui::Ui, app: &mut SnapcropApp) {
    egui::Frame::NONE
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| match &app.ui_state.stage {
            Stage::Subject { handoff } => {
                let handoff = handoff.clone();
                ui.heading("Choose a subject");
                ui.add_space(4.0);
                ui.label(format!(
                    "Crop {:.0}x{:.0} at ({:.0}, {:.0})",
                    handoff.crop_width, handoff.crop_height, handoff.crop_left, handoff.crop_top
                ));
                ui.add_space(12.0);

                let mut picked = None;
                egui::Grid::new("subjects")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        for (i, &subject) in Subject::ALL.iter().enumerate() {
                            let button = egui::Button::new(subject.to_string())
                                .min_size(egui::vec2(160.0, 36.0));
                            if ui.add(button).clicked() {
                                picked = Some(subject);
                            }
                            if i % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });

                if let Some(subject) = picked {
                    let selection = select_subject(handoff, subject);
                    app.ui_state.add_log(format!("Filed under {subject}"));
                    app.ui_state.stage = Stage::Filed { selection };
                }
            }
            Stage::Filed { selection } => {
                ui.heading(format!("Filed under {}", selection.subject));
                ui.add_space(4.0);
                ui.label(&selection.crop.image_uri);
                let rect = selection.crop.rect();
                ui.label(format!(
                    "Crop {:.0}x{:.0} at ({:.0}, {:.0})",
                    rect.width, rect.height, rect.left, rect.top
                ));
                ui.add_space(12.0);
                if ui.button("Crop another photo").clicked() {
                    app.retake();
                    open_file(app);
                }
            }
            Stage::Crop => {}
        });
}
