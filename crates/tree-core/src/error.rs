use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// Flat landmark buffers carry 21 points as either (x, y) or (x, y, z).
    #[error("invalid landmark buffer length {got} (expected 42 or 63)")]
    LandmarkCount { got: usize },

    #[error("too many images: {got} supplied, at most {max} supported")]
    TooManyImages { got: usize, max: usize },

    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, TreeError>;
