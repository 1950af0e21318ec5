use console::Style;
use snapcrop_core::crop::{CropSeed, Handle};
use snapcrop_core::geometry::CropRect;
use snapcrop_core::session::CropScreen;

/// Result of replaying one scripted gesture.
pub struct GestureOutcome {
    pub handle: Handle,
    pub updates: usize,
    pub accepted: usize,
    pub cancelled: bool,
}

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn format_rect(rect: &CropRect) -> String {
    format!(
        "{:.1}x{:.1} at ({:.1}, {:.1})",
        rect.width, rect.height, rect.left, rect.top
    )
}

/// Print the session layout and gesture log to stderr, keeping stdout for
/// the machine-readable report.
pub fn print_session_summary(screen: &CropScreen, gestures: &[GestureOutcome]) {
    let s = Styles::new();

    eprintln!();
    eprintln!("  {}", s.title.apply_to("Crop Session"));
    eprintln!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    eprintln!();

    if let Ok(uri) = screen.image_uri() {
        eprintln!("  {:<14}{}", s.label.apply_to("Image"), s.path.apply_to(uri));
    }
    if let Some(image) = screen.image_metrics() {
        eprintln!(
            "  {:<14}{}",
            s.label.apply_to("Pixels"),
            s.value.apply_to(format!("{}x{}", image.width, image.height))
        );
    }
    let viewport = screen.viewport();
    eprintln!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!("{}x{}", viewport.width, viewport.height))
    );
    if let Some(display) = screen.display_metrics() {
        eprintln!(
            "  {:<14}{}",
            s.label.apply_to("Displayed"),
            s.value.apply_to(format_rect(&display.image_rect()))
        );
    }

    let seed = match screen.seed() {
        Some(CropSeed::Detected) => s.method.apply_to("detected text"),
        Some(CropSeed::Default) => s.disabled.apply_to("default"),
        None => s.disabled.apply_to("none"),
    };
    eprintln!("  {:<14}{}", s.label.apply_to("Seeded from"), seed);

    if !gestures.is_empty() {
        eprintln!();
        eprintln!("  {}", s.header.apply_to("Gestures"));
        for g in gestures {
            let end = if g.cancelled {
                s.disabled.apply_to("cancelled")
            } else {
                s.method.apply_to("released")
            };
            eprintln!(
                "    {:<14}{} of {} updates applied, {}",
                s.label.apply_to(g.handle),
                s.value.apply_to(g.accepted),
                g.updates,
                end
            );
        }
    }

    if let Some(view) = screen.crop_view() {
        eprintln!();
        eprintln!(
            "  {:<14}{}  {}",
            s.label.apply_to("Crop"),
            s.value.apply_to(format_rect(&view.rect)),
            s.label.apply_to(format!("rev {}", view.revision))
        );
    }
    eprintln!();
}
