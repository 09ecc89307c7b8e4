use image::ColorType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Unsupported image format: {color:?} (expected 1- or 3-channel input)")]
    UnsupportedFormat { color: ColorType },

    #[error("Dimension mismatch: ideal is {ideal_width}x{ideal_height}, sample is {sample_width}x{sample_height}")]
    DimensionMismatch {
        ideal_width: u32,
        ideal_height: u32,
        sample_width: u32,
        sample_height: u32,
    },

    #[error("Failed to load image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InspectError>;
