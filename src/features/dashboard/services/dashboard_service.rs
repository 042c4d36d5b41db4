use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::{DashboardSummaryDto, DistrictCountDto, IssueTypeCountDto};
use crate::features::reports::models::{IssueType, ReportStatus};
use crate::features::reports::services::ReportStore;

/// Service for staff dashboard aggregates
pub struct DashboardService {
    reports: Arc<ReportStore>,
}

impl DashboardService {
    pub fn new(reports: Arc<ReportStore>) -> Self {
        Self { reports }
    }

    /// Aggregate report counts across status, category and district
    pub async fn summary(&self) -> Result<DashboardSummaryDto> {
        let reports = self.reports.list().await?;

        let count_status =
            |status: ReportStatus| reports.iter().filter(|r| r.status == status).count();

        let by_type: Vec<_> = IssueType::ALL
            .iter()
            .map(|&issue_type| IssueTypeCountDto {
                issue_type,
                count: reports.iter().filter(|r| r.issue_type == issue_type).count(),
            })
            .filter(|c| c.count > 0)
            .collect();

        let mut district_counts: BTreeMap<String, usize> = BTreeMap::new();
        for report in &reports {
            if let Some(district) = &report.district {
                *district_counts.entry(district.clone()).or_default() += 1;
            }
        }
        let mut by_district: Vec<_> = district_counts
            .into_iter()
            .map(|(district, count)| DistrictCountDto { district, count })
            .collect();
        by_district.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(DashboardSummaryDto {
            total_reports: reports.len(),
            submitted_count: count_status(ReportStatus::Submitted),
            acknowledged_count: count_status(ReportStatus::Acknowledged),
            in_progress_count: count_status(ReportStatus::InProgress),
            resolved_count: count_status(ReportStatus::Resolved),
            by_type,
            by_district,
        })
    }
}
