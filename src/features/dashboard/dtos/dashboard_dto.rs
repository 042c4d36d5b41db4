use serde::Serialize;

use crate::features::reports::models::IssueType;

/// Staff dashboard summary
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummaryDto {
    pub total_reports: usize,
    pub submitted_count: usize,
    pub acknowledged_count: usize,
    pub in_progress_count: usize,
    pub resolved_count: usize,
    /// Categories with at least one report
    pub by_type: Vec<IssueTypeCountDto>,
    /// Districts with at least one report, busiest first
    pub by_district: Vec<DistrictCountDto>,
}

/// Report count for one issue category
#[derive(Debug, Clone, Serialize)]
pub struct IssueTypeCountDto {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub count: usize,
}

/// Report count for one district
#[derive(Debug, Clone, Serialize)]
pub struct DistrictCountDto {
    pub district: String,
    pub count: usize,
}
