use geo_types::{Coord, LineString, Polygon};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

/// A closed boundary polygon of a connected foreground region.
///
/// Points are pixel coordinates as traced from a binary mask. Contours are
/// transient: recomputed per image, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Contour {
    pub points: Vec<[f32; 2]>,
}

impl Contour {
    pub fn new(points: Vec<[f32; 2]>) -> Self {
        Self { points }
    }

    /// Convert to a geo-types Polygon for geometric operations
    pub fn to_geo_polygon(&self) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .points
            .iter()
            .map(|&[x, y]| Coord {
                x: f64::from(x),
                y: f64::from(y),
            })
            .collect();

        Polygon::new(LineString::new(coords), vec![])
    }

    /// Enclosed area in squared pixels (shoelace formula).
    pub fn area(&self) -> f64 {
        use geo::Area;
        self.to_geo_polygon().unsigned_area()
    }

    /// Perimeter of the closed boundary, including the closing edge.
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }

        let mut total = 0.0;
        for i in 0..self.points.len() {
            let [x0, y0] = self.points[i];
            let [x1, y1] = self.points[(i + 1) % self.points.len()];
            let dx = f64::from(x1 - x0);
            let dy = f64::from(y1 - y0);
            total += (dx * dx + dy * dy).sqrt();
        }
        total
    }

    /// Isoperimetric circularity 4π·area/perimeter²: 1.0 for an ideal
    /// circle, lower for non-circular shapes. `None` for degenerate
    /// contours with zero perimeter.
    pub fn circularity(&self) -> Option<f64> {
        let perimeter = self.perimeter();
        if perimeter == 0.0 {
            return None;
        }
        Some(4.0 * std::f64::consts::PI * self.area() / (perimeter * perimeter))
    }

    /// Axis-aligned bounding box, or `None` for an empty contour.
    ///
    /// Width and height count covered pixels (max - min + 1), matching the
    /// usual integer bounding-rect convention.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        for &[x, y] in &self.points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        Some(BoundingBox {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1.0,
            height: max_y - min_y + 1.0,
        })
    }
}

/// Axis-aligned bounding box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Width over height, or `None` when the box is degenerate.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height <= 0.0 {
            return None;
        }
        Some(f64::from(self.width) / f64::from(self.height))
    }
}

/// A classification result produced by the bore and tooth classifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Finding {
    /// Sample bore area is smaller than the ideal's (underdeveloped or
    /// occluded opening).
    BoreMissing,
    /// Sample bore area is larger than the ideal's.
    BoreEnlarged,
    /// No contour in one of the images passed the circularity filter.
    /// A legitimate low-confidence result, not an error.
    BoreNotDetected,
    MissingTeeth { count: usize },
    WornTeeth { count: usize },
    Ideal,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoreMissing => write!(f, "Missing inner opening"),
            Self::BoreEnlarged => write!(f, "Large inner opening"),
            Self::BoreNotDetected => write!(f, "Inner opening not detected"),
            Self::MissingTeeth { count } => write!(f, "{count} missing teeth"),
            Self::WornTeeth { count } => write!(f, "{count} worn-out teeth"),
            Self::Ideal => write!(f, "Ideal gear"),
        }
    }
}

/// Tooth defect classification for a single difference region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, VariantNames, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToothKind {
    /// A fully missing tooth: the gap matches the tooth's whole profile,
    /// so the difference region is roughly square or tall.
    Missing,
    /// A worn tooth: material loss along the tip produces a wide, shallow
    /// difference region.
    Worn,
}

/// A difference region that passed the noise-area filter, with the geometric
/// evidence behind its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToothRegion {
    pub contour: Contour,
    pub bounding_box: BoundingBox,
    pub area: f64,
    pub kind: ToothKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_contour(side: f32) -> Contour {
        Contour::new(vec![
            [0.0, 0.0],
            [side, 0.0],
            [side, side],
            [0.0, side],
        ])
    }

    #[test]
    fn square_geometry() {
        let contour = square_contour(10.0);
        assert!((contour.area() - 100.0).abs() < 1e-9);
        assert!((contour.perimeter() - 40.0).abs() < 1e-9);

        // Isoperimetric ratio of a square is pi/4.
        let circularity = contour.circularity().unwrap();
        assert!((circularity - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn thin_rectangle_has_low_circularity() {
        let contour = Contour::new(vec![
            [0.0, 0.0],
            [100.0, 0.0],
            [100.0, 2.0],
            [0.0, 2.0],
        ]);
        assert!(contour.circularity().unwrap() < 0.15);
    }

    #[test]
    fn zero_perimeter_contour_has_no_circularity() {
        let single = Contour::new(vec![[5.0, 5.0]]);
        assert_eq!(single.perimeter(), 0.0);
        assert!(single.circularity().is_none());

        let empty = Contour::new(vec![]);
        assert!(empty.circularity().is_none());
        assert!(empty.bounding_box().is_none());
    }

    #[test]
    fn bounding_box_counts_covered_pixels() {
        let contour = Contour::new(vec![[2.0, 3.0], [7.0, 3.0], [7.0, 11.0], [2.0, 11.0]]);
        let bbox = contour.bounding_box().unwrap();
        assert_eq!(bbox.x, 2.0);
        assert_eq!(bbox.y, 3.0);
        assert_eq!(bbox.width, 6.0);
        assert_eq!(bbox.height, 9.0);
        assert!((bbox.aspect_ratio().unwrap() - 6.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_bounding_box_has_no_aspect_ratio() {
        let bbox = BoundingBox {
            x: 0.0,
            y: 0.0,
            width: 4.0,
            height: 0.0,
        };
        assert!(bbox.aspect_ratio().is_none());
    }

    #[test]
    fn finding_descriptions() {
        assert_eq!(Finding::BoreMissing.to_string(), "Missing inner opening");
        assert_eq!(Finding::BoreEnlarged.to_string(), "Large inner opening");
        assert_eq!(
            Finding::BoreNotDetected.to_string(),
            "Inner opening not detected"
        );
        assert_eq!(
            Finding::MissingTeeth { count: 1 }.to_string(),
            "1 missing teeth"
        );
        assert_eq!(
            Finding::WornTeeth { count: 3 }.to_string(),
            "3 worn-out teeth"
        );
        assert_eq!(Finding::Ideal.to_string(), "Ideal gear");
    }

    #[test]
    fn finding_serde_tagging() {
        let json = serde_json::to_string(&Finding::MissingTeeth { count: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"missing_teeth","count":2}"#);
        let parsed: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Finding::MissingTeeth { count: 2 });
    }

    #[test]
    fn tooth_kind_display() {
        assert_eq!(ToothKind::Missing.to_string(), "missing");
        assert_eq!(ToothKind::Worn.to_string(), "worn");
    }
}
