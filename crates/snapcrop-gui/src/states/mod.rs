mod crop;
mod ui;
mod viewport;

pub use crop::{ActiveDrag, CropUiState};
pub use ui::{Stage, UIState};
pub use viewport::ViewportState;
