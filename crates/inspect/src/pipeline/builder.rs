use crate::{
    algorithms::{
        extraction::ImageprocContourExtractor,
        preprocessing::{GaussianBlurPreprocessor, InvertedThresholdPreprocessor},
    },
    config::InspectionConfig,
    pipeline::GearInspector,
    traits::{ContourExtractor, ImagePreprocessor},
};

/// Builder for gear inspectors with a fluent API
pub struct GearInspectorBuilder {
    preprocessors: Vec<Box<dyn ImagePreprocessor>>,
    contour_extractor: Option<Box<dyn ContourExtractor>>,
    config: InspectionConfig,
}

impl GearInspectorBuilder {
    pub fn new() -> Self {
        Self {
            preprocessors: Vec::new(),
            contour_extractor: None,
            config: InspectionConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: InspectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn with_blur_kernel_size(mut self, kernel_size: u32) -> Self {
        self.config.blur_kernel_size = kernel_size;
        self
    }

    pub fn with_circularity_min(mut self, circularity_min: f64) -> Self {
        self.config.circularity_min = circularity_min;
        self
    }

    pub fn with_defect_area_min(mut self, defect_area_min: f64) -> Self {
        self.config.defect_area_min = defect_area_min;
        self
    }

    pub fn with_worn_aspect_ratio_min(mut self, worn_aspect_ratio_min: f64) -> Self {
        self.config.worn_aspect_ratio_min = worn_aspect_ratio_min;
        self
    }

    /// Add a preprocessor to the chain. When none are added, `build`
    /// installs the default blur + inverted-threshold chain from the
    /// configuration.
    pub fn add_preprocessor<P>(mut self, preprocessor: P) -> Self
    where
        P: ImagePreprocessor + 'static,
    {
        self.preprocessors.push(Box::new(preprocessor));
        self
    }

    /// Set the contour extractor (replaces any existing one)
    pub fn set_contour_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ContourExtractor + 'static,
    {
        self.contour_extractor = Some(Box::new(extractor));
        self
    }

    /// Build the inspector with default components where none were set
    pub fn build(self) -> GearInspector {
        let preprocessors = if self.preprocessors.is_empty() {
            vec![
                Box::new(GaussianBlurPreprocessor {
                    kernel_size: self.config.blur_kernel_size,
                }) as Box<dyn ImagePreprocessor>,
                Box::new(InvertedThresholdPreprocessor {
                    threshold: self.config.threshold,
                }),
            ]
        } else {
            self.preprocessors
        };

        let contour_extractor = self
            .contour_extractor
            .unwrap_or_else(|| Box::new(ImageprocContourExtractor));

        GearInspector::new(preprocessors, contour_extractor, self.config)
    }
}

impl Default for GearInspectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
