pub mod drag;
pub mod init;
pub mod overlay;
pub mod state;
pub mod transition;

pub use drag::{apply_drag, DragController, DragSession, Handle};
pub use init::{default_rect, initialize, seed_rect, CropSeed};
pub use overlay::{handle_rect, hit_test, mask_regions, MaskRegions};
pub use state::{CropBox, CropView};
pub use transition::Transition;
