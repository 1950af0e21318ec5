use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SnapcropError;
use crate::session::CropHandoff;

/// Subject a cropped question can be filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Biology,
    Physics,
    Chemistry,
    History,
    Geography,
    English,
    Literature,
    ComputerScience,
    Economics,
}

impl Subject {
    pub const ALL: &[Self] = &[
        Self::Math,
        Self::Biology,
        Self::Physics,
        Self::Chemistry,
        Self::History,
        Self::Geography,
        Self::English,
        Self::Literature,
        Self::ComputerScience,
        Self::Economics,
    ];
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Math => "Math",
            Self::Biology => "Biology",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::History => "History",
            Self::Geography => "Geography",
            Self::English => "English",
            Self::Literature => "Literature",
            Self::ComputerScience => "Computer Science",
            Self::Economics => "Economics",
        };
        f.write_str(name)
    }
}

impl FromStr for Subject {
    type Err = SnapcropError;

    /// Case-insensitive; spaces, dashes and underscores are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|subject| subject.to_string().replace(' ', "").to_lowercase() == key)
            .ok_or_else(|| SnapcropError::UnknownSubject(s.to_string()))
    }
}

/// Final record of the flow: the crop plus the subject the user picked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubjectSelection {
    pub subject: Subject,
    #[serde(flatten)]
    pub crop: CropHandoff,
}

pub fn select_subject(crop: CropHandoff, subject: Subject) -> SubjectSelection {
    info!(%subject, crop = ?crop.rect(), "Subject selected");
    SubjectSelection { subject, crop }
}
