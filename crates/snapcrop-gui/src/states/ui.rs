use std::path::PathBuf;

use snapcrop_core::session::CropHandoff;
use snapcrop_core::subject::SubjectSelection;

/// Which screen the window shows.
#[derive(Default)]
pub enum Stage {
    #[default]
    Crop,
    /// Crop confirmed; waiting for a subject.
    Subject { handoff: CropHandoff },
    /// Subject picked.
    Filed { selection: SubjectSelection },
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub stage: Stage,
    pub file_path: Option<PathBuf>,
    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
