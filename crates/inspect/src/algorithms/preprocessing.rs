use crate::{
    error::{InspectError, Result},
    traits::ImagePreprocessor,
};
use image::{DynamicImage, GrayImage};
use imageproc::contrast::ThresholdType;

/// Convert a decoded image to single-channel grayscale.
///
/// Accepts 1-channel and 3-channel inputs; anything else is rejected so a
/// bad capture surfaces as a typed error rather than a silently skewed mask.
pub fn to_grayscale(image: &DynamicImage) -> Result<GrayImage> {
    match image {
        DynamicImage::ImageLuma8(gray) => Ok(gray.clone()),
        DynamicImage::ImageRgb8(_) => Ok(image.to_luma8()),
        other => Err(InspectError::UnsupportedFormat {
            color: other.color(),
        }),
    }
}

/// Gaussian blur preprocessor for noise reduction
///
/// Sigma is derived from the kernel size using the usual zero-sigma
/// convention: sigma = 0.3 * ((k - 1) / 2 - 1) + 0.8.
#[derive(Debug, Clone)]
pub struct GaussianBlurPreprocessor {
    pub kernel_size: u32,
}

impl GaussianBlurPreprocessor {
    pub fn sigma(&self) -> f32 {
        0.3 * ((self.kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
    }
}

impl Default for GaussianBlurPreprocessor {
    fn default() -> Self {
        Self { kernel_size: 5 }
    }
}

impl ImagePreprocessor for GaussianBlurPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::filter::gaussian_blur_f32(image, self.sigma()))
    }
}

/// Inverted global threshold preprocessor.
///
/// Pixels at or below the threshold become foreground (255), lighter pixels
/// become background (0). The inversion makes the gear's dark outline and
/// teeth register as foreground for contour tracing.
#[derive(Debug, Clone)]
pub struct InvertedThresholdPreprocessor {
    pub threshold: u8,
}

impl Default for InvertedThresholdPreprocessor {
    fn default() -> Self {
        Self { threshold: 127 }
    }
}

impl ImagePreprocessor for InvertedThresholdPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::contrast::threshold(
            image,
            self.threshold,
            ThresholdType::BinaryInverted,
        ))
    }
}

/// Plain (non-inverted) threshold preprocessor: pixels above the threshold
/// become foreground. Idempotent on an already-binary 0/255 mask.
#[derive(Debug, Clone)]
pub struct ThresholdPreprocessor {
    pub threshold: u8,
}

impl Default for ThresholdPreprocessor {
    fn default() -> Self {
        Self { threshold: 127 }
    }
}

impl ImagePreprocessor for ThresholdPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::contrast::threshold(
            image,
            self.threshold,
            ThresholdType::Binary,
        ))
    }
}
