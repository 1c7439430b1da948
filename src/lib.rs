pub mod aggregate;
pub mod config;
pub mod error;
pub mod identifier;
pub mod model;
pub mod output;
pub mod query;
pub mod text;

pub use aggregate::{FixedVersions, SourceDetail, SourceListing, SourceSummary, VulnerabilityEntry};
pub use config::Config;
pub use error::ViewerError;
pub use model::{Report, ScannedPackage, ScannedSource, Vulnerability};
pub use query::ReportViewer;
