//! Normalized model of an osv-scanner JSON report.
//!
//! The model mirrors the scanner output:
//!
//! - [`Report`] - root of the document, an ordered list of scanned sources
//! - [`ScannedSource`] - one scanned unit such as a lockfile
//! - [`ScannedPackage`] - one resolved dependency of a source
//! - [`Vulnerability`] - one advisory affecting a package
//!
//! Everything is built once by [`Report::from_json`] or [`Report::load`] and
//! is never mutated afterwards. Order inside every list is the order of the
//! input document. Fields the viewer does not use are ignored, and missing
//! or `null` strings and lists fall back to empty values.
//!
//! # Example
//!
//! ```
//! use osv_viewer::Report;
//!
//! let report = Report::from_json(r#"{"results": []}"#).unwrap();
//! assert!(report.results.is_empty());
//! ```

mod package;
mod vulnerability;

pub use package::*;
pub use vulnerability::*;

use crate::error::{Result, ViewerError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root of a scan report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, deserialize_with = "nullable")]
    pub results: Vec<ScannedSource>,
}

impl Report {
    /// Parses a report from its JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<memory>"))
    }

    /// Reads and parses the report stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InputUnavailable`] if the file cannot be read and
    /// [`ViewerError::InputMalformed`] if its content is not a scan report.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ViewerError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let report: Report =
            serde_json::from_str(content).map_err(|source| ViewerError::InputMalformed {
                path: PathBuf::from(path),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            sources = report.results.len(),
            "parsed scan report"
        );
        Ok(report)
    }

    /// Returns the sources in document order.
    pub fn sources(&self) -> &[ScannedSource] {
        &self.results
    }
}

/// Location and kind of a scanned unit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    #[serde(default, deserialize_with = "nullable")]
    pub path: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: String,
}

/// One scanned unit (lockfile, manifest, ...) and the packages resolved from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScannedSource {
    #[serde(default)]
    pub source: SourceInfo,
    #[serde(default, deserialize_with = "nullable")]
    pub packages: Vec<ScannedPackage>,
}

impl ScannedSource {
    pub fn new(path: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            source: SourceInfo {
                path: path.into(),
                kind: kind.into(),
            },
            packages: Vec::new(),
        }
    }

    pub fn with_package(mut self, package: ScannedPackage) -> Self {
        self.packages.push(package);
        self
    }

    /// Scan target location, the natural key of the source.
    pub fn path(&self) -> &str {
        &self.source.path
    }

    pub fn kind(&self) -> &str {
        &self.source.kind
    }

    /// Identifier used to address this source on the command line.
    pub fn id(&self) -> String {
        crate::identifier::source_id(self.path())
    }

    /// Number of vulnerability entries across all packages, without
    /// deduplicating advisories shared by several packages.
    pub fn vulnerability_count(&self) -> usize {
        self.packages.iter().map(|p| p.vulnerabilities.len()).sum()
    }
}

/// Deserializes `null` as the default value of `T`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes informational fields, falling back to the default of `T`
/// when the value is `null` or has an unexpected shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match T::deserialize(value) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unexpected value in informational field");
            Ok(T::default())
        }
    }
}
