//! Tooth defect detection via mask differencing.
//!
//! XOR of the two binary masks highlights regions present in one image but
//! not the other. Surviving regions are classified by bounding-box aspect
//! ratio: a worn tooth loses material along the tip, leaving a wide shallow
//! difference, while a fully missing tooth leaves a gap matching the whole
//! tooth profile. The aspect cutoff is empirically derived and configurable.

use crate::{
    config::InspectionConfig,
    error::{InspectError, Result},
    traits::ContourExtractor,
    types::{Finding, ToothKind, ToothRegion},
};
use image::GrayImage;

/// The tooth detector's output: findings plus the geometric evidence behind
/// them, for downstream visualization.
#[derive(Debug, Clone)]
pub struct ToothReport {
    /// Missing-teeth finding first, then worn-teeth, each only when the
    /// respective count is positive.
    pub findings: Vec<Finding>,
    /// Difference regions that passed the noise-area filter.
    pub regions: Vec<ToothRegion>,
    /// The XOR mask the regions were traced from.
    pub difference_mask: GrayImage,
}

/// Pixel-wise exclusive-or of two binary masks of identical dimensions.
pub fn difference_mask(ideal: &GrayImage, sample: &GrayImage) -> Result<GrayImage> {
    if ideal.dimensions() != sample.dimensions() {
        // No implicit resize: silently rescaling one mask would invalidate
        // every area comparison downstream.
        return Err(InspectError::DimensionMismatch {
            ideal_width: ideal.width(),
            ideal_height: ideal.height(),
            sample_width: sample.width(),
            sample_height: sample.height(),
        });
    }

    let mut diff = GrayImage::new(ideal.width(), ideal.height());
    for (out, (a, b)) in diff
        .pixels_mut()
        .zip(ideal.pixels().zip(sample.pixels()))
    {
        out.0[0] = if a.0[0] != b.0[0] { 255 } else { 0 };
    }
    Ok(diff)
}

/// Detect missing and worn teeth by differencing the ideal and sample masks.
pub fn detect_teeth(
    ideal_mask: &GrayImage,
    sample_mask: &GrayImage,
    extractor: &dyn ContourExtractor,
    config: &InspectionConfig,
) -> Result<ToothReport> {
    let diff = difference_mask(ideal_mask, sample_mask)?;
    let contours = extractor.extract_external(&diff)?;

    let mut missing = 0usize;
    let mut worn = 0usize;
    let mut regions = Vec::new();

    for contour in contours {
        let area = contour.area();
        if area <= config.defect_area_min {
            continue;
        }

        let Some(bounding_box) = contour.bounding_box() else {
            continue;
        };
        // Degenerate single-row regions have no meaningful aspect ratio.
        let Some(aspect_ratio) = bounding_box.aspect_ratio() else {
            continue;
        };

        let kind = if aspect_ratio > config.worn_aspect_ratio_min {
            ToothKind::Worn
        } else {
            ToothKind::Missing
        };
        match kind {
            ToothKind::Missing => missing += 1,
            ToothKind::Worn => worn += 1,
        }

        tracing::debug!(area, aspect_ratio, ?kind, "classified difference region");

        regions.push(ToothRegion {
            contour,
            bounding_box,
            area,
            kind,
        });
    }

    let mut findings = Vec::new();
    if missing > 0 {
        findings.push(Finding::MissingTeeth { count: missing });
    }
    if worn > 0 {
        findings.push(Finding::WornTeeth { count: worn });
    }

    Ok(ToothReport {
        findings,
        regions,
        difference_mask: diff,
    })
}
