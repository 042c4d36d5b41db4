mod report;
mod report_location;

pub use report::{IssueType, Report, ReportStatus};
pub use report_location::ReportLocation;
