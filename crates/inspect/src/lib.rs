//! # Gear Visual Inspection Library
//!
//! Compares a sample gear image against an ideal reference and flags two
//! defect classes: deviations in the central bore opening and tooth defects
//! (missing or worn teeth) detected via mask differencing.
//!
//! ## Core Pipeline
//!
//! raw images → preprocessing (grayscale, blur, inverted threshold) →
//! binary masks → contour extraction → {bore classification, tooth defect
//! detection} → aggregated findings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inspect::GearInspector;
//!
//! let inspector = GearInspector::builder().build();
//! let ideal = image::open("ideal.jpg")?;
//! let sample = image::open("sample.jpg")?;
//!
//! let result = inspector.inspect(&ideal, &sample)?;
//! for line in result.summary() {
//!     println!("- {line}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use inspect::{GearInspector, algorithms::*};
//!
//! let inspector = GearInspector::builder()
//!     .add_preprocessor(GaussianBlurPreprocessor { kernel_size: 7 })
//!     .add_preprocessor(InvertedThresholdPreprocessor { threshold: 100 })
//!     .with_defect_area_min(80.0)
//!     .build();
//! ```

// Core modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use algorithms::*;
pub use config::InspectionConfig;
pub use error::{InspectError, Result};
pub use pipeline::{builder::GearInspectorBuilder, GearInspector};
pub use report::{aggregate, InspectionReport, InspectionResult};
pub use traits::{ContourExtractor, ImagePreprocessor};
pub use types::{BoundingBox, Contour, Finding, ToothKind, ToothRegion};
