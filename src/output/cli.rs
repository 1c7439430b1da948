use crate::aggregate::{SourceDetail, SourceListing};
use crate::text::normalize_details;
use std::io::{self, Write};
use tabled::{settings, Table, Tabled};

const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Terminal styling for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }
}

#[derive(Tabled)]
struct SourceRow {
    #[tabled(rename = "SOURCE ID")]
    id: String,
    #[tabled(rename = "SOURCE")]
    path: String,
    #[tabled(rename = "TOTAL")]
    total: usize,
}

pub fn write_source_listing(out: &mut dyn Write, listing: &SourceListing) -> io::Result<()> {
    writeln!(out, "Total of vulnerabilities: {}", listing.total)?;
    writeln!(out)?;

    let rows: Vec<SourceRow> = listing
        .sources
        .iter()
        .map(|s| SourceRow {
            id: s.id.clone(),
            path: s.path.clone(),
            total: s.total,
        })
        .collect();

    let table = Table::new(rows).with(settings::Style::blank()).to_string();
    writeln!(out, "{}", table)
}

pub fn write_source_detail(
    out: &mut dyn Write,
    detail: &SourceDetail,
    style: Style,
) -> io::Result<()> {
    writeln!(out, "Source: {}", detail.source)?;

    for vuln in &detail.vulnerabilities {
        let headline = format!("({}) {}", vuln.id, vuln.summary);
        writeln!(out)?;
        writeln!(
            out,
            "{}: {} (fix: {})",
            vuln.package,
            style.paint(&headline, RED),
            vuln.fixed
        )?;
        writeln!(out, "{}", style.paint(&normalize_details(&vuln.details), GRAY))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{list_sources, show_source};
    use crate::identifier::source_id;
    use crate::model::{
        Affected, AffectedRange, Report, ScannedPackage, ScannedSource, Vulnerability,
    };

    fn sample_report() -> Report {
        let vuln = Vulnerability::new("GHSA-0000", "Regular expression denial of service")
            .with_details("First paragraph.\n\n\n\nSecond paragraph.")
            .with_affected(Affected::new().with_range(AffectedRange::new("SEMVER").fixed("1.0.1")));
        let package = ScannedPackage::new("left-pad", "1.0.0", "npm").with_vulnerability(vuln);
        Report {
            results: vec![
                ScannedSource::new("empty.lock", "lockfile"),
                ScannedSource::new("lockfile.json", "lockfile").with_package(package),
            ],
        }
    }

    fn render_listing(report: &Report) -> String {
        let mut buffer = Vec::new();
        write_source_listing(&mut buffer, &list_sources(report)).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn render_detail(report: &Report, style: Style) -> String {
        let detail = show_source(report, &source_id("lockfile.json")).unwrap();
        let mut buffer = Vec::new();
        write_source_detail(&mut buffer, &detail, style).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_listing_header_and_rows() {
        let output = render_listing(&sample_report());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Total of vulnerabilities: 1");
        assert_eq!(lines[1], "");
        assert!(lines[2].contains("SOURCE ID"));
        assert!(lines[2].contains("TOTAL"));

        let first = lines.iter().position(|l| l.contains("lockfile.json")).unwrap();
        let second = lines.iter().position(|l| l.contains("empty.lock")).unwrap();
        assert!(first < second);
        assert!(lines[first].contains(&source_id("lockfile.json")));
    }

    #[test]
    fn test_listing_empty_report() {
        let output = render_listing(&Report::default());
        assert!(output.starts_with("Total of vulnerabilities: 0\n\n"));
        assert!(output.contains("SOURCE ID"));
    }

    #[test]
    fn test_detail_plain() {
        let output = render_detail(&sample_report(), Style::plain());
        assert_eq!(
            output,
            "Source: lockfile.json\n\
             \n\
             left-pad 1.0.0: (GHSA-0000) Regular expression denial of service (fix: 1.0.1)\n\
             First paragraph.\n\nSecond paragraph.\n"
        );
    }

    #[test]
    fn test_detail_colored() {
        let output = render_detail(&sample_report(), Style::colored());
        assert!(output.contains("\x1b[31m(GHSA-0000) Regular expression denial of service\x1b[0m"));
        assert!(output.contains("\x1b[90mFirst paragraph."));
    }
}
