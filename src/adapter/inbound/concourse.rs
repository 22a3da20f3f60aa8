//! Concourse resource protocol payloads.
//!
//! Each command reads one of the request documents from stdin and writes the
//! matching response document to stdout.

use serde::{Deserialize, Serialize};

use crate::application::template::Replacement;
use crate::infrastructure::config::source::SourceConfig;

/// A resource version as Concourse tracks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    #[serde(rename = "ref")]
    pub reference: String,
}

impl Version {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

/// A name/value pair shown in the Concourse UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub value: String,
}

/// Input of `check`. `version` is null on the very first check.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub source: SourceConfig,
    #[serde(default)]
    pub version: Option<Version>,
}

/// Input of `in`.
#[derive(Debug, Deserialize)]
pub struct InRequest {
    pub source: SourceConfig,
    #[serde(default)]
    pub version: Option<Version>,
}

/// Input of `out`.
#[derive(Debug, Deserialize)]
pub struct OutRequest {
    pub source: SourceConfig,
    #[serde(default)]
    pub params: OutParams,
}

/// `put` step params.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutParams {
    /// Descriptor template, relative to the sources directory.
    #[serde(default)]
    pub app_json: String,

    /// Seconds each deployment may take before it is cancelled.
    #[serde(default)]
    pub time_out: u64,

    #[serde(default)]
    pub replacements: Vec<Replacement>,

    /// Values read from files, relative to the sources directory.
    #[serde(default)]
    pub replacement_files: Vec<Replacement>,

    #[serde(default)]
    pub restart_if_no_update: bool,
}

/// Output of `in` and `out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: Version,
    pub metadata: Vec<Metadata>,
}

impl VersionResponse {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            version: Version::new(reference),
            metadata: Vec::new(),
        }
    }
}
