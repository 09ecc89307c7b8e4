use crate::{error::Result, traits::ContourExtractor, types::Contour};
use image::GrayImage;

/// Imageproc-based extractor with external-contours-only semantics: only
/// the outermost boundary of each foreground blob is returned, nested
/// holes are ignored.
#[derive(Debug, Clone, Default)]
pub struct ImageprocContourExtractor;

impl ContourExtractor for ImageprocContourExtractor {
    fn extract_external(&self, binary_image: &GrayImage) -> Result<Vec<Contour>> {
        let contours = imageproc::contours::find_contours::<i32>(binary_image);

        let result = contours
            .into_iter()
            .filter(|contour| contour.parent.is_none())
            .map(|contour| {
                let points: Vec<[f32; 2]> = contour
                    .points
                    .iter()
                    .map(|p| [p.x as f32, p.y as f32])
                    .collect();
                Contour::new(compress_colinear(points))
            })
            .collect();

        Ok(result)
    }
}

/// Drop redundant points that lie on a straight run between their
/// neighbours, keeping only direction changes (coordinate-compression
/// approximation of the traced boundary).
fn compress_colinear(points: Vec<[f32; 2]>) -> Vec<[f32; 2]> {
    let n = points.len();
    if n < 3 {
        return points;
    }

    let mut compressed = Vec::with_capacity(n);
    for i in 0..n {
        let [px, py] = points[(i + n - 1) % n];
        let [cx, cy] = points[i];
        let [nx, ny] = points[(i + 1) % n];

        let (ax, ay) = (cx - px, cy - py);
        let (bx, by) = (nx - cx, ny - cy);
        let cross = ax * by - ay * bx;
        let dot = ax * bx + ay * by;

        // A point is redundant only when the march continues straight on.
        if cross != 0.0 || dot <= 0.0 {
            compressed.push(points[i]);
        }
    }

    if compressed.len() < 3 {
        return points;
    }
    compressed
}
