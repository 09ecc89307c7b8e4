//! Bore (central opening) classification.
//!
//! The bore is the only large round contour in a gear silhouette: tooth-edge
//! contours have serrated perimeters and therefore low isoperimetric
//! circularity. Selection keeps the largest-area contour among those passing
//! the circularity cutoff.

use crate::{
    config::InspectionConfig,
    error::Result,
    traits::ContourExtractor,
    types::{Contour, Finding},
};
use image::GrayImage;

/// A contour considered during bore selection, reported to the observer
/// callback for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoreCandidate {
    /// Index into the extracted contour set.
    pub index: usize,
    pub area: f64,
    pub circularity: f64,
}

/// The selected bore contour and its enclosed area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoreSelection {
    pub index: usize,
    pub area: f64,
}

/// Select the single best bore candidate as a pure fold over the contours.
///
/// Zero-perimeter contours are skipped entirely. Among contours whose
/// circularity exceeds `circularity_min`, the one with the strictly largest
/// area wins; the first qualifying contour keeps ties. Every contour with a
/// well-defined circularity is reported to `observe`, qualifying or not.
pub fn select_bore_candidate<F>(
    contours: &[Contour],
    circularity_min: f64,
    mut observe: F,
) -> Option<BoreSelection>
where
    F: FnMut(&BoreCandidate),
{
    contours
        .iter()
        .enumerate()
        .filter_map(|(index, contour)| {
            let circularity = contour.circularity()?;
            let candidate = BoreCandidate {
                index,
                area: contour.area(),
                circularity,
            };
            observe(&candidate);
            (circularity > circularity_min).then_some(candidate)
        })
        .fold(None, |best: Option<BoreSelection>, candidate| match best {
            Some(current) if candidate.area <= current.area => Some(current),
            _ => Some(BoreSelection {
                index: candidate.index,
                area: candidate.area,
            }),
        })
}

/// Compare the bore openings of the ideal and sample masks.
///
/// Returns `None` when the bore conforms (exactly equal areas),
/// `Some(Finding::BoreNotDetected)` when either mask has no qualifying
/// contour, and a missing/enlarged finding otherwise.
pub fn classify_bore<F>(
    ideal_mask: &GrayImage,
    sample_mask: &GrayImage,
    extractor: &dyn ContourExtractor,
    config: &InspectionConfig,
    mut observe: F,
) -> Result<Option<Finding>>
where
    F: FnMut(&BoreCandidate),
{
    let ideal_contours = extractor.extract_external(ideal_mask)?;
    let sample_contours = extractor.extract_external(sample_mask)?;

    tracing::debug!(
        ideal = ideal_contours.len(),
        sample = sample_contours.len(),
        "extracted external contours for bore classification"
    );

    let ideal_bore = select_bore_candidate(&ideal_contours, config.circularity_min, &mut observe);
    let sample_bore = select_bore_candidate(&sample_contours, config.circularity_min, &mut observe);

    let (Some(ideal_bore), Some(sample_bore)) = (ideal_bore, sample_bore) else {
        return Ok(Some(Finding::BoreNotDetected));
    };

    tracing::debug!(
        ideal_area = ideal_bore.area,
        sample_area = sample_bore.area,
        "comparing bore areas"
    );

    // Exact-equality comparison: an exactly matching bore produces no
    // finding. A tolerance band would be a product decision, not taken here.
    if sample_bore.area < ideal_bore.area {
        Ok(Some(Finding::BoreMissing))
    } else if sample_bore.area > ideal_bore.area {
        Ok(Some(Finding::BoreEnlarged))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::extraction::ImageprocContourExtractor;
    use image::Luma;
    use imageproc::drawing::draw_filled_circle_mut;

    fn circle_contour(radius: f32) -> Contour {
        let steps = 256;
        let points = (0..steps)
            .map(|i| {
                let angle = 2.0 * std::f32::consts::PI * i as f32 / steps as f32;
                [radius * angle.cos(), radius * angle.sin()]
            })
            .collect();
        Contour::new(points)
    }

    fn square_contour(side: f32) -> Contour {
        Contour::new(vec![[0.0, 0.0], [side, 0.0], [side, side], [0.0, side]])
    }

    fn mask_with_circle(radius: i32) -> GrayImage {
        let mut img = GrayImage::new(100, 100);
        draw_filled_circle_mut(&mut img, (50, 50), radius, Luma([255u8]));
        img
    }

    #[test]
    fn circle_beats_smaller_square() {
        let contours = vec![square_contour(20.0), circle_contour(30.0)];
        let selected = select_bore_candidate(&contours, 0.5, |_| {}).unwrap();
        assert_eq!(selected.index, 1);
    }

    #[test]
    fn high_area_low_circularity_contour_is_ignored() {
        // The thin rectangle encloses more area than the circle but fails
        // the circularity cutoff.
        let rectangle = Contour::new(vec![
            [0.0, 0.0],
            [2000.0, 0.0],
            [2000.0, 4.0],
            [0.0, 4.0],
        ]);
        let contours = vec![rectangle, circle_contour(10.0)];
        let selected = select_bore_candidate(&contours, 0.5, |_| {}).unwrap();
        assert_eq!(selected.index, 1);
    }

    #[test]
    fn first_qualifying_contour_keeps_ties() {
        let contours = vec![square_contour(10.0), square_contour(10.0)];
        let selected = select_bore_candidate(&contours, 0.5, |_| {}).unwrap();
        assert_eq!(selected.index, 0);
    }

    #[test]
    fn zero_perimeter_contour_never_divides() {
        let contours = vec![Contour::new(vec![[3.0, 3.0]]), circle_contour(8.0)];
        let mut observed = Vec::new();
        let selected =
            select_bore_candidate(&contours, 0.5, |c| observed.push(c.index)).unwrap();
        assert_eq!(selected.index, 1);
        // The degenerate contour is skipped before the observer sees it.
        assert_eq!(observed, vec![1]);
    }

    #[test]
    fn no_qualifying_contour_selects_nothing() {
        let thin = Contour::new(vec![[0.0, 0.0], [50.0, 0.0], [50.0, 1.0], [0.0, 1.0]]);
        assert!(select_bore_candidate(&[thin], 0.5, |_| {}).is_none());
        assert!(select_bore_candidate(&[], 0.5, |_| {}).is_none());
    }

    #[test]
    fn observer_sees_every_measurable_contour() {
        let contours = vec![
            square_contour(10.0),
            Contour::new(vec![[0.0, 0.0], [90.0, 0.0], [90.0, 2.0], [0.0, 2.0]]),
        ];
        let mut seen = Vec::new();
        select_bore_candidate(&contours, 0.5, |c| seen.push((c.index, c.circularity)));
        assert_eq!(seen.len(), 2);
        assert!(seen[0].1 > 0.5);
        assert!(seen[1].1 < 0.5);
    }

    #[test]
    fn equal_masks_produce_no_finding() {
        let mask = mask_with_circle(20);
        let finding = classify_bore(
            &mask,
            &mask.clone(),
            &ImageprocContourExtractor,
            &InspectionConfig::default(),
            |_| {},
        )
        .unwrap();
        assert_eq!(finding, None);
    }

    #[test]
    fn smaller_sample_bore_is_missing() {
        let ideal = mask_with_circle(25);
        let sample = mask_with_circle(15);
        let finding = classify_bore(
            &ideal,
            &sample,
            &ImageprocContourExtractor,
            &InspectionConfig::default(),
            |_| {},
        )
        .unwrap();
        assert_eq!(finding, Some(Finding::BoreMissing));
    }

    #[test]
    fn larger_sample_bore_is_enlarged() {
        let ideal = mask_with_circle(15);
        let sample = mask_with_circle(25);
        let finding = classify_bore(
            &ideal,
            &sample,
            &ImageprocContourExtractor,
            &InspectionConfig::default(),
            |_| {},
        )
        .unwrap();
        assert_eq!(finding, Some(Finding::BoreEnlarged));
    }

    #[test]
    fn empty_mask_means_bore_not_detected() {
        let ideal = mask_with_circle(20);
        let sample = GrayImage::new(100, 100);
        let finding = classify_bore(
            &ideal,
            &sample,
            &ImageprocContourExtractor,
            &InspectionConfig::default(),
            |_| {},
        )
        .unwrap();
        assert_eq!(finding, Some(Finding::BoreNotDetected));
    }

    #[test]
    fn traced_digital_circle_is_round_enough() {
        let mask = mask_with_circle(20);
        let contours = ImageprocContourExtractor.extract_external(&mask).unwrap();
        assert_eq!(contours.len(), 1);
        let circularity = contours[0].circularity().unwrap();
        // Discretization lowers the ratio below the ideal 1.0 but keeps it
        // well above a square's pi/4.
        assert!(circularity > 0.8, "got {circularity}");
        assert!(circularity <= 1.1);
    }
}
