use inspect::InspectionConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GearCliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// A single inspection job: where the image pair lives, where outputs go,
/// and any non-default tuning.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InspectionJob {
    /// Path to the ideal (reference) gear image.
    pub ideal_path: String,
    /// Path to the sample gear image under inspection.
    pub sample_path: String,
    /// Directory for report, mask and annotation outputs.
    pub output_dir: Option<String>,
    /// Pipeline tuning; defaults apply when omitted.
    #[serde(default)]
    pub config: InspectionConfig,
}

impl InspectionJob {
    /// Load a job from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, GearCliError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a job from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, GearCliError> {
        let job: InspectionJob = toml::from_str(content)?;
        Ok(job)
    }

    /// Load a job from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, GearCliError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a job from a JSON string
    pub fn from_json(content: &str) -> Result<Self, GearCliError> {
        let job: InspectionJob = serde_json::from_str(content)?;
        Ok(job)
    }

    /// Auto-detect file format by extension and load
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GearCliError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(GearCliError::UnsupportedFileFormat),
        }
    }

    /// Convert the job to a TOML string
    pub fn to_toml(&self) -> Result<String, GearCliError> {
        let toml = toml::to_string_pretty(&self)?;
        Ok(toml)
    }

    /// Convert the job to a JSON string
    pub fn to_json(&self) -> Result<String, GearCliError> {
        Ok(serde_json::to_string_pretty(&self)?)
    }
}
