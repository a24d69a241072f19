pub mod stripper;

pub use stripper::{WHITE_THRESHOLD, is_background, strip_file, strip_image, strip_pixels};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Input file not found: {0}")]
    InputNotFound(std::path::PathBuf),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to persist output file: {0}")]
    Persist(String),
}
