use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Segment ({start_x},{start_y})->({end_x},{end_y}) is neither horizontal nor vertical")]
    InvalidSegment {
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
    },

    #[error("Invalid grid size: {0}")]
    InvalidGridSize(f32),

    #[error("Reference object not found: {0}")]
    ReferenceNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
