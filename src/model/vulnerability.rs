use super::{lenient, nullable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One advisory affecting a package, in OSV format.
///
/// Only `id`, `summary`, `details` and `affected` must be well formed. The
/// remaining fields are informational and read leniently: a `null` or an
/// unexpected shape leaves them empty instead of rejecting the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vulnerability {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub modified: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub published: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient")]
    pub aliases: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub summary: String,
    #[serde(default, deserialize_with = "nullable")]
    pub details: String,
    #[serde(default, deserialize_with = "nullable")]
    pub affected: Vec<Affected>,
    #[serde(default, deserialize_with = "lenient")]
    pub references: Vec<Reference>,
    #[serde(default, deserialize_with = "lenient")]
    pub database_specific: Option<DatabaseSpecific>,
}

impl Vulnerability {
    pub fn new(id: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            ..Self::default()
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_affected(mut self, affected: Affected) -> Self {
        self.affected.push(affected);
        self
    }

    /// Severity label from the advisory database, if one was reported.
    pub fn severity(&self) -> Option<&str> {
        self.database_specific
            .as_ref()
            .and_then(|db| db.severity.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// CWE identifiers from the advisory database.
    pub fn cwe_ids(&self) -> &[String] {
        self.database_specific
            .as_ref()
            .map(|db| db.cwe_ids.as_slice())
            .unwrap_or_default()
    }

    /// Non-empty reference URLs in document order.
    pub fn reference_urls(&self) -> impl Iterator<Item = &str> {
        self.references
            .iter()
            .map(|r| r.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// One affected-package entry of an advisory and its version ranges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Affected {
    #[serde(default, deserialize_with = "nullable")]
    pub ranges: Vec<AffectedRange>,
}

impl Affected {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range: AffectedRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Fixed versions over all ranges and events, in document order.
    ///
    /// Events without a `fixed` field and events with an empty one are skipped.
    pub fn fixed_versions(&self) -> impl Iterator<Item = &str> {
        self.ranges
            .iter()
            .flat_map(|range| range.events.iter())
            .filter_map(|event| event.fixed.as_deref())
            .filter(|fixed| !fixed.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AffectedRange {
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub range_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub events: Vec<RangeEvent>,
}

impl AffectedRange {
    pub fn new(range_type: impl Into<String>) -> Self {
        Self {
            range_type: range_type.into(),
            events: Vec::new(),
        }
    }

    pub fn introduced(mut self, version: impl Into<String>) -> Self {
        self.events.push(RangeEvent {
            introduced: Some(version.into()),
            fixed: None,
        });
        self
    }

    pub fn fixed(mut self, version: impl Into<String>) -> Self {
        self.events.push(RangeEvent {
            introduced: None,
            fixed: Some(version.into()),
        });
        self
    }
}

/// A range boundary. Absent `fixed` means no known fix for the range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduced: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub reference_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSpecific {
    #[serde(default, deserialize_with = "lenient")]
    pub cwe_ids: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub severity: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_versions_skip_missing_and_empty() {
        let affected: Affected = serde_json::from_str(
            r#"{"ranges": [
                {"type": "SEMVER", "events": [{"introduced": "0"}, {"fixed": "1.2.3"}]},
                {"type": "ECOSYSTEM", "events": [{"fixed": ""}, {"fixed": "2.0.0"}]}
            ]}"#,
        )
        .unwrap();

        let fixed: Vec<&str> = affected.fixed_versions().collect();
        assert_eq!(fixed, vec!["1.2.3", "2.0.0"]);
    }

    #[test]
    fn test_empty_fixed_is_distinct_from_absent() {
        let event: RangeEvent = serde_json::from_str(r#"{"fixed": ""}"#).unwrap();
        assert_eq!(event.fixed.as_deref(), Some(""));

        let event: RangeEvent = serde_json::from_str(r#"{"introduced": "0.1.0"}"#).unwrap();
        assert_eq!(event.fixed, None);
    }

    #[test]
    fn test_severity_ignores_blank() {
        let mut vuln = Vulnerability::new("GHSA-1", "x");
        assert_eq!(vuln.severity(), None);

        vuln.database_specific = Some(DatabaseSpecific {
            severity: Some(String::new()),
            ..DatabaseSpecific::default()
        });
        assert_eq!(vuln.severity(), None);

        vuln.database_specific = Some(DatabaseSpecific {
            severity: Some("HIGH".to_string()),
            ..DatabaseSpecific::default()
        });
        assert_eq!(vuln.severity(), Some("HIGH"));
    }

    #[test]
    fn test_reference_urls_skip_blank() {
        let vuln: Vulnerability = serde_json::from_str(
            r#"{"id": "GHSA-1", "references": [
                {"type": "WEB", "url": "https://example.com/a"},
                {"type": "WEB", "url": null},
                {"type": "PACKAGE", "url": "https://example.com/b"}
            ]}"#,
        )
        .unwrap();

        let urls: Vec<&str> = vuln.reference_urls().collect();
        assert_eq!(urls, vec!["https://example.com/a", "https://example.com/b"]);
    }
}
