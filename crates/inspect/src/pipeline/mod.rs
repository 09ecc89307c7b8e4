pub mod builder;

use crate::{
    algorithms::{bore::classify_bore, preprocessing::to_grayscale, teeth::detect_teeth},
    config::InspectionConfig,
    error::{InspectError, Result},
    report::{aggregate, InspectionResult},
    traits::{ContourExtractor, ImagePreprocessor},
};
use image::{DynamicImage, GrayImage};

/// The gear inspection pipeline: preprocessing chain, contour extraction and
/// the two defect classifiers, composed behind one entry point.
///
/// An inspector is immutable once built and holds no per-run state, so one
/// instance can be shared across threads and reused for any number of
/// ideal/sample pairs.
pub struct GearInspector {
    preprocessors: Vec<Box<dyn ImagePreprocessor>>,
    contour_extractor: Box<dyn ContourExtractor>,
    config: InspectionConfig,
}

impl GearInspector {
    /// Create a new inspector builder
    pub fn builder() -> builder::GearInspectorBuilder {
        builder::GearInspectorBuilder::new()
    }

    /// Create a new inspector with the given components
    pub fn new(
        preprocessors: Vec<Box<dyn ImagePreprocessor>>,
        contour_extractor: Box<dyn ContourExtractor>,
        config: InspectionConfig,
    ) -> Self {
        Self {
            preprocessors,
            contour_extractor,
            config,
        }
    }

    pub fn config(&self) -> &InspectionConfig {
        &self.config
    }

    /// Run the preprocessing chain on one raw image, producing the binary
    /// mask the classifiers consume.
    pub fn preprocess(&self, image: &DynamicImage) -> Result<GrayImage> {
        let mut processed = to_grayscale(image)?;
        for preprocessor in &self.preprocessors {
            processed = preprocessor.preprocess(&processed)?;
        }
        Ok(processed)
    }

    /// Inspect a sample gear against the ideal reference.
    ///
    /// Both images go through the same preprocessing chain; the resulting
    /// masks feed bore classification and tooth-defect detection, and the
    /// merged findings come back with the supporting geometric evidence.
    pub fn inspect(
        &self,
        ideal: &DynamicImage,
        sample: &DynamicImage,
    ) -> Result<InspectionResult> {
        let ideal_mask = self.preprocess(ideal)?;
        let sample_mask = self.preprocess(sample)?;

        if ideal_mask.dimensions() != sample_mask.dimensions() {
            return Err(InspectError::DimensionMismatch {
                ideal_width: ideal_mask.width(),
                ideal_height: ideal_mask.height(),
                sample_width: sample_mask.width(),
                sample_height: sample_mask.height(),
            });
        }

        let bore_finding = classify_bore(
            &ideal_mask,
            &sample_mask,
            self.contour_extractor.as_ref(),
            &self.config,
            |candidate| {
                tracing::debug!(
                    index = candidate.index,
                    area = candidate.area,
                    circularity = candidate.circularity,
                    "bore candidate"
                );
            },
        )?;

        let tooth_report = detect_teeth(
            &ideal_mask,
            &sample_mask,
            self.contour_extractor.as_ref(),
            &self.config,
        )?;

        let findings = aggregate(bore_finding, tooth_report.findings);
        tracing::info!(?findings, "inspection complete");

        Ok(InspectionResult {
            findings,
            regions: tooth_report.regions,
            difference_mask: tooth_report.difference_mask,
            image_width: ideal_mask.width(),
            image_height: ideal_mask.height(),
        })
    }
}

impl Default for GearInspector {
    fn default() -> Self {
        Self::builder().build()
    }
}
