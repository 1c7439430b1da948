use crate::aggregate::{self, SourceDetail, SourceListing};
use crate::error::Result;
use crate::model::Report;

/// Read-only entry point for the `sources` and `show` commands.
///
/// # Example
///
/// ```
/// use osv_viewer::{Report, ReportViewer};
///
/// let report = Report::from_json(r#"{"results": []}"#).unwrap();
/// let viewer = ReportViewer::new(&report);
///
/// assert_eq!(viewer.sources().total, 0);
/// assert!(viewer.show("e3b0c44298fc").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReportViewer<'a> {
    report: &'a Report,
}

impl<'a> ReportViewer<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }

    pub fn sources(&self) -> SourceListing {
        aggregate::list_sources(self.report)
    }

    pub fn show(&self, id: &str) -> Result<SourceDetail> {
        aggregate::show_source(self.report, id)
    }
}
