use snapcrop_core::crop::{handle_rect, hit_test, mask_regions, Handle};
use snapcrop_core::geometry::{CropRect, Viewport};

use crate::app::SnapcropApp;
use crate::states::ActiveDrag;

const BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
const HANDLE_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 204, 0);

/// Map a display-space rect to the screen, with the viewport's top-left at
/// `origin`.
pub fn to_screen(rect: &CropRect, origin: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(rect.left, rect.top),
        egui::vec2(rect.width, rect.height),
    )
}

/// Drive the crop box from pointer input, then draw it.
pub fn show(ui: &mut egui::Ui, app: &mut SnapcropApp, origin: egui::Pos2) {
    let Some(view) = app.screen.crop_view() else {
        return;
    };

    handle_crop_drag(ui, app, origin, &view.rect);
    update_crop_cursor(ui, app, origin, &view.rect);

    // Re-read: the drag above may have moved the box.
    let Some(view) = app.screen.crop_view() else {
        return;
    };
    let (drawn, animating) = app.crop_ui.displayed(view.rect);
    if animating {
        ui.ctx().request_repaint();
    }
    draw_crop_overlay(ui, &drawn, &app.screen.viewport(), origin);
}

fn handle_crop_drag(ui: &mut egui::Ui, app: &mut SnapcropApp, origin: egui::Pos2, rect: &CropRect) {
    // Body first so the corner handles, added later, sit on top of it.
    let body = ui.interact(
        to_screen(rect, origin),
        ui.id().with("crop-body"),
        egui::Sense::drag(),
    );
    drive_handle(ui, app, Handle::Move, &body);

    for handle in Handle::CORNERS {
        let response = ui.interact(
            to_screen(&handle_rect(rect, handle), origin),
            ui.id().with(("crop-handle", handle.index())),
            egui::Sense::drag(),
        );
        drive_handle(ui, app, handle, &response);
    }

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        if let Some(active) = app.crop_ui.drag.take() {
            app.screen.cancel_drag(active.handle);
        }
    }
}

fn drive_handle(ui: &egui::Ui, app: &mut SnapcropApp, handle: Handle, response: &egui::Response) {
    if response.drag_started_by(egui::PointerButton::Primary) && app.screen.begin_drag(handle) {
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        app.crop_ui.drag = origin.map(|origin| ActiveDrag { handle, origin });
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        let active = app.crop_ui.drag.filter(|d| d.handle == handle);
        if let (Some(active), Some(pos)) = (active, response.interact_pointer_pos()) {
            let translation = pos - active.origin;
            app.screen.update_drag(handle, translation.x, translation.y);
        }
    }

    if response.drag_stopped() {
        app.screen.end_drag(handle);
        if app.crop_ui.drag.is_some_and(|d| d.handle == handle) {
            app.crop_ui.drag = None;
        }
    }
}

fn update_crop_cursor(ui: &egui::Ui, app: &SnapcropApp, origin: egui::Pos2, rect: &CropRect) {
    let handle = match app.crop_ui.drag {
        Some(active) => Some(active.handle),
        None => ui
            .input(|i| i.pointer.hover_pos())
            .and_then(|pos| hit_test(rect, pos.x - origin.x, pos.y - origin.y)),
    };

    let icon = match handle {
        Some(Handle::Move) if app.crop_ui.drag.is_some() => egui::CursorIcon::Grabbing,
        Some(Handle::Move) => egui::CursorIcon::Grab,
        Some(Handle::ResizeTopLeft | Handle::ResizeBottomRight) => egui::CursorIcon::ResizeNwSe,
        Some(Handle::ResizeTopRight | Handle::ResizeBottomLeft) => egui::CursorIcon::ResizeNeSw,
        None => return,
    };
    ui.ctx().set_cursor_icon(icon);
}

/// Draw the crop overlay (mask + border + handles + dimensions label).
fn draw_crop_overlay(ui: &egui::Ui, rect: &CropRect, viewport: &Viewport, origin: egui::Pos2) {
    draw_mask(ui, rect, viewport, origin);

    let crop_screen = to_screen(rect, origin);
    draw_crop_border(ui, crop_screen);
    draw_handles(ui, rect, origin);
    draw_dimensions_label(ui, rect, crop_screen);
}

fn draw_mask(ui: &egui::Ui, rect: &CropRect, viewport: &Viewport, origin: egui::Pos2) {
    let dim_color = egui::Color32::from_black_alpha(140);
    let painter = ui.painter();
    for region in mask_regions(rect, viewport).iter() {
        if region.width > 0.0 && region.height > 0.0 {
            painter.rect_filled(to_screen(region, origin), 0.0, dim_color);
        }
    }
}

fn draw_crop_border(ui: &egui::Ui, crop_screen: egui::Rect) {
    ui.painter().rect_stroke(
        crop_screen,
        0.0,
        egui::Stroke::new(1.5, BORDER_COLOR),
        egui::epaint::StrokeKind::Outside,
    );
}

fn draw_handles(ui: &egui::Ui, rect: &CropRect, origin: egui::Pos2) {
    let painter = ui.painter();
    for handle in Handle::CORNERS {
        let target = to_screen(&handle_rect(rect, handle), origin);
        painter.circle(
            target.center(),
            target.width() / 4.0,
            HANDLE_COLOR,
            egui::Stroke::new(1.0, egui::Color32::BLACK),
        );
    }
}

fn draw_dimensions_label(ui: &egui::Ui, rect: &CropRect, crop_screen: egui::Rect) {
    let label = format!("{}x{}", rect.width.round() as u32, rect.height.round() as u32);
    let label_pos = egui::pos2(crop_screen.right() - 4.0, crop_screen.bottom() + 4.0);
    ui.painter().text(
        label_pos,
        egui::Align2::RIGHT_TOP,
        label,
        egui::FontId::proportional(12.0),
        BORDER_COLOR,
    );
}
