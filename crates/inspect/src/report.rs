//! Finding aggregation and the final inspection result.

use crate::types::{Finding, ToothRegion};
use image::GrayImage;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Merge the bore and tooth findings into the final verdict list.
///
/// The bore finding, when present, comes first; tooth findings keep their
/// given order. An empty combination means the gear conforms.
pub fn aggregate(bore: Option<Finding>, teeth: Vec<Finding>) -> Vec<Finding> {
    let mut findings: Vec<Finding> = bore.into_iter().chain(teeth).collect();
    if findings.is_empty() {
        findings.push(Finding::Ideal);
    }
    findings
}

/// Complete outcome of one inspection run: the verdicts plus the geometric
/// evidence handed to a display or reporting collaborator.
#[derive(Debug, Clone)]
pub struct InspectionResult {
    pub findings: Vec<Finding>,
    /// Difference regions that passed the defect-area filter.
    pub regions: Vec<ToothRegion>,
    /// XOR of the two binary masks, for visual evidence.
    pub difference_mask: GrayImage,
    pub image_width: u32,
    pub image_height: u32,
}

impl InspectionResult {
    /// Human-readable finding descriptions, in verdict order.
    pub fn summary(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }

    /// The serializable portion of the result (everything but the raw mask).
    pub fn to_report(&self) -> InspectionReport {
        InspectionReport {
            findings: self.findings.clone(),
            descriptions: self.summary(),
            regions: self.regions.clone(),
            image_width: self.image_width,
            image_height: self.image_height,
        }
    }
}

/// Serializable inspection report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InspectionReport {
    pub findings: Vec<Finding>,
    /// Rendered finding descriptions, in verdict order.
    pub descriptions: Vec<String>,
    pub regions: Vec<ToothRegion>,
    pub image_width: u32,
    pub image_height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_aggregate_to_ideal() {
        assert_eq!(aggregate(None, vec![]), vec![Finding::Ideal]);
    }

    #[test]
    fn bore_finding_comes_first() {
        let findings = aggregate(
            Some(Finding::BoreMissing),
            vec![
                Finding::MissingTeeth { count: 2 },
                Finding::WornTeeth { count: 1 },
            ],
        );
        assert_eq!(
            findings,
            vec![
                Finding::BoreMissing,
                Finding::MissingTeeth { count: 2 },
                Finding::WornTeeth { count: 1 },
            ]
        );
    }

    #[test]
    fn tooth_findings_alone_keep_their_order() {
        let findings = aggregate(None, vec![Finding::WornTeeth { count: 1 }]);
        assert_eq!(findings, vec![Finding::WornTeeth { count: 1 }]);
    }

    #[test]
    fn summary_renders_descriptions_in_order() {
        let result = InspectionResult {
            findings: aggregate(Some(Finding::BoreEnlarged), vec![]),
            regions: vec![],
            difference_mask: GrayImage::new(4, 4),
            image_width: 4,
            image_height: 4,
        };
        assert_eq!(result.summary(), vec!["Large inner opening".to_string()]);
    }

    #[test]
    fn report_round_trips_through_json() {
        let result = InspectionResult {
            findings: vec![Finding::Ideal],
            regions: vec![],
            difference_mask: GrayImage::new(4, 4),
            image_width: 4,
            image_height: 4,
        };
        let json = serde_json::to_string(&result.to_report()).unwrap();
        let parsed: InspectionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.findings, vec![Finding::Ideal]);
        assert_eq!(parsed.descriptions, vec!["Ideal gear".to_string()]);
    }
}
