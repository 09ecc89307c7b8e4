use crate::{error::Result, types::Contour};
use image::GrayImage;

/// Trait for image preprocessing algorithms
pub trait ImagePreprocessor: Send + Sync {
    /// Preprocess the input image (e.g., blur, threshold)
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for contour extraction algorithms
pub trait ContourExtractor: Send + Sync {
    /// Extract the external (outermost) contours from a binary image
    fn extract_external(&self, image: &GrayImage) -> Result<Vec<Contour>>;
}
