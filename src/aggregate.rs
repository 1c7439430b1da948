//! Queries over a parsed [`Report`].
//!
//! [`list_sources`] counts vulnerabilities per source, and [`show_source`]
//! flattens one source into display-ready vulnerability entries.

use crate::error::{Result, ViewerError};
use crate::model::{Report, Vulnerability};
use chrono::{DateTime, Utc};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::cmp::Reverse;
use std::fmt;

/// One row of the source listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub id: String,
    pub path: String,
    pub kind: String,
    pub total: usize,
}

/// All sources with their vulnerability counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceListing {
    pub total: usize,
    pub sources: Vec<SourceSummary>,
}

/// Lists every source with its vulnerability count.
///
/// Rows are sorted by count, highest first. Sources with the same count keep
/// their report order.
pub fn list_sources(report: &Report) -> SourceListing {
    let mut sources: Vec<SourceSummary> = report
        .sources()
        .iter()
        .map(|source| SourceSummary {
            id: source.id(),
            path: source.path().to_string(),
            kind: source.kind().to_string(),
            total: source.vulnerability_count(),
        })
        .collect();

    // sort_by_key is stable
    sources.sort_by_key(|row| Reverse(row.total));

    let total = sources.iter().map(|row| row.total).sum();
    tracing::debug!(sources = sources.len(), total, "listed sources");

    SourceListing { total, sources }
}

/// Fixed versions of one advisory, grouped by affected entry.
///
/// Each affected entry contributes one group, possibly empty. The text form
/// joins versions inside a group and the groups themselves with `", "`, so an
/// entry without any fix still shows up as an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedVersions {
    groups: Vec<Vec<String>>,
}

impl FixedVersions {
    pub fn from_vulnerability(vulnerability: &Vulnerability) -> Self {
        let groups = vulnerability
            .affected
            .iter()
            .map(|affected| affected.fixed_versions().map(str::to_string).collect())
            .collect();
        Self { groups }
    }

    /// All fixed versions in document order, duplicates included.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flatten().map(String::as_str)
    }

    /// True when no affected entry names a fixed version.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}

impl fmt::Display for FixedVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.groups.iter().map(|g| g.join(", ")).collect();
        write!(f, "{}", joined.join(", "))
    }
}

impl Serialize for FixedVersions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for version in self.versions() {
            seq.serialize_element(version)?;
        }
        seq.end()
    }
}

/// One advisory found under a source, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct VulnerabilityEntry {
    /// `"{name} {version}"` of the affected package.
    pub package: String,
    pub id: String,
    pub summary: String,
    pub details: String,
    pub fixed: FixedVersions,
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    pub cwe_ids: Vec<String>,
    pub references: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// A source and every advisory reported against its packages.
#[derive(Debug, Clone, Serialize)]
pub struct SourceDetail {
    pub id: String,
    pub source: String,
    pub kind: String,
    pub vulnerabilities: Vec<VulnerabilityEntry>,
}

/// Collects the vulnerabilities of the source whose identifier is `id`.
///
/// Sources are scanned in report order and the first match wins, so sources
/// with a duplicate path (or a colliding identifier) are never reachable.
///
/// # Errors
///
/// Returns [`ViewerError::NotFound`] if no source has this identifier.
pub fn show_source(report: &Report, id: &str) -> Result<SourceDetail> {
    let Some(source) = report.sources().iter().find(|s| s.id() == id) else {
        tracing::debug!(id, "no source matches identifier");
        return Err(ViewerError::NotFound { id: id.to_string() });
    };

    let vulnerabilities: Vec<VulnerabilityEntry> = source
        .packages
        .iter()
        .flat_map(|package| {
            let label = package.label();
            package
                .vulnerabilities
                .iter()
                .map(move |vuln| VulnerabilityEntry {
                    package: label.clone(),
                    id: vuln.id.clone(),
                    summary: vuln.summary.clone(),
                    details: vuln.details.clone(),
                    fixed: FixedVersions::from_vulnerability(vuln),
                    aliases: vuln.aliases.clone(),
                    severity: vuln.severity().map(str::to_string),
                    cwe_ids: vuln.cwe_ids().to_vec(),
                    references: vuln.reference_urls().map(str::to_string).collect(),
                    published: vuln.published,
                    modified: vuln.modified,
                })
        })
        .collect();

    tracing::debug!(
        id,
        path = source.path(),
        vulnerabilities = vulnerabilities.len(),
        "collected source vulnerabilities"
    );

    Ok(SourceDetail {
        id: id.to_string(),
        source: source.path().to_string(),
        kind: source.kind().to_string(),
        vulnerabilities,
    })
}
