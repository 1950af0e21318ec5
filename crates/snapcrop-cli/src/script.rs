use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use snapcrop_core::crop::Handle;

/// Scripted drag gestures replayed against a crop session.
///
/// ```toml
/// [[gesture]]
/// handle = "bottom-right"
/// path = [[10.0, 0.0], [40.0, 25.0]]
/// ```
///
/// Each `path` point is the cumulative translation since the gesture began.
#[derive(Debug, Default, Deserialize)]
pub struct DragScript {
    #[serde(default, rename = "gesture")]
    pub gestures: Vec<Gesture>,
}

#[derive(Debug, Deserialize)]
pub struct Gesture {
    pub handle: HandleName,
    #[serde(default)]
    pub path: Vec<[f32; 2]>,
    /// End the gesture with a cancel instead of a release.
    #[serde(default)]
    pub cancel: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandleName {
    Move,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl From<HandleName> for Handle {
    fn from(name: HandleName) -> Self {
        match name {
            HandleName::Move => Handle::Move,
            HandleName::TopLeft => Handle::ResizeTopLeft,
            HandleName::TopRight => Handle::ResizeTopRight,
            HandleName::BottomLeft => Handle::ResizeBottomLeft,
            HandleName::BottomRight => Handle::ResizeBottomRight,
        }
    }
}

impl DragScript {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read drag script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid drag script {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = DragScript::parse(
            r#"
[[gesture]]
handle = "move"
path = [[-150.0, 0.0]]

[[gesture]]
handle = "bottom-right"
path = [[10.0, 0.0], [40.0, 25.0]]
cancel = true
"#,
        )
        .unwrap();

        assert_eq!(script.gestures.len(), 2);
        assert_eq!(Handle::from(script.gestures[0].handle), Handle::Move);
        assert_eq!(script.gestures[1].path, vec![[10.0, 0.0], [40.0, 25.0]]);
        assert!(script.gestures[1].cancel);
        assert!(!script.gestures[0].cancel);
    }

    #[test]
    fn test_empty_script() {
        assert!(DragScript::parse("").unwrap().gestures.is_empty());
    }

    #[test]
    fn test_unknown_handle_rejected() {
        assert!(DragScript::parse("[[gesture]]\nhandle = \"middle\"\n").is_err());
    }
}
