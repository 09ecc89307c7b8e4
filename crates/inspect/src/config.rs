use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tunable constants for the inspection pipeline.
///
/// Defaults reproduce the reference tuning. `defect_area_min` is in squared
/// pixels and therefore resolution-dependent; `worn_aspect_ratio_min` is an
/// empirically derived cutoff, not an intrinsic property of gear geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InspectionConfig {
    /// Global threshold on the 0-255 grayscale range.
    pub threshold: u8,
    /// Side length of the Gaussian smoothing kernel (odd).
    pub blur_kernel_size: u32,
    /// Minimum isoperimetric circularity for a bore candidate.
    pub circularity_min: f64,
    /// Minimum contour area (squared pixels) for a difference region to
    /// count as a real defect rather than registration noise. Strict `>`.
    pub defect_area_min: f64,
    /// Bounding-box aspect ratio (w/h) above which a difference region is
    /// classified as a worn tooth rather than a missing one.
    pub worn_aspect_ratio_min: f64,
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            threshold: 127,
            blur_kernel_size: 5,
            circularity_min: 0.5,
            defect_area_min: 50.0,
            worn_aspect_ratio_min: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let config = InspectionConfig::default();
        assert_eq!(config.threshold, 127);
        assert_eq!(config.blur_kernel_size, 5);
        assert!((config.circularity_min - 0.5).abs() < f64::EPSILON);
        assert!((config.defect_area_min - 50.0).abs() < f64::EPSILON);
        assert!((config.worn_aspect_ratio_min - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: InspectionConfig = serde_json::from_str(r#"{"threshold": 100}"#).unwrap();
        assert_eq!(config.threshold, 100);
        assert_eq!(config.blur_kernel_size, 5);
    }
}
