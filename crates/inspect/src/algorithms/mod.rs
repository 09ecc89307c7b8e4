pub mod bore;
pub mod extraction;
pub mod preprocessing;
pub mod teeth;

pub use bore::{classify_bore, select_bore_candidate, BoreCandidate, BoreSelection};
pub use extraction::ImageprocContourExtractor;
pub use preprocessing::{
    to_grayscale, GaussianBlurPreprocessor, InvertedThresholdPreprocessor, ThresholdPreprocessor,
};
pub use teeth::{detect_teeth, difference_mask, ToothReport};
