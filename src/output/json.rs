use crate::aggregate::{FixedVersions, SourceDetail};
use crate::text::normalize_details;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};

pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// JSON shape of `show`, with details normalized the same way as the text output.
#[derive(Debug, Serialize)]
pub struct DetailView<'a> {
    pub id: &'a str,
    pub source: &'a str,
    pub kind: &'a str,
    pub vulnerabilities: Vec<EntryView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub package: &'a str,
    pub id: &'a str,
    pub summary: &'a str,
    pub details: String,
    pub fixed: &'a FixedVersions,
    pub aliases: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<&'a str>,
    pub cwe_ids: &'a [String],
    pub references: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl<'a> From<&'a SourceDetail> for DetailView<'a> {
    fn from(detail: &'a SourceDetail) -> Self {
        Self {
            id: &detail.id,
            source: &detail.source,
            kind: &detail.kind,
            vulnerabilities: detail
                .vulnerabilities
                .iter()
                .map(|v| EntryView {
                    package: &v.package,
                    id: &v.id,
                    summary: &v.summary,
                    details: normalize_details(&v.details),
                    fixed: &v.fixed,
                    aliases: &v.aliases,
                    severity: v.severity.as_deref(),
                    cwe_ids: &v.cwe_ids,
                    references: &v.references,
                    published: v.published,
                    modified: v.modified,
                })
                .collect(),
        }
    }
}
