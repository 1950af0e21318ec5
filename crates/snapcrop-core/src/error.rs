use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapcropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No image provided")]
    MissingInput,

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidImageMetrics { width: u32, height: u32 },

    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("Invalid detection config: {0}")]
    InvalidConfig(String),

    #[error("Text detection failed: {0}")]
    Detection(String),

    #[error("Invalid crop session state: {0}")]
    InvalidState(String),

    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SnapcropError>;
