use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::reports::models::{IssueType, Report, ReportLocation, ReportStatus};
use crate::shared::validation::not_blank;

/// Request DTO for submitting a new report
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportDto {
    #[serde(rename = "type")]
    pub issue_type: IssueType,

    #[validate(custom(function = not_blank, message = "Description must not be empty"))]
    pub description: String,

    /// Local file reference produced by the camera or gallery picker
    #[validate(custom(function = not_blank, message = "A photo is required"))]
    pub image: String,

    pub location: Option<ReportLocation>,
    pub district: Option<String>,
    pub area: Option<String>,
}

/// Response DTO for a report
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponseDto {
    pub id: String,
    /// Trailing id digits shown in confirmations and listings
    pub short_id: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
    pub image: String,
    pub location: Option<ReportLocation>,
    pub district: Option<String>,
    pub area: Option<String>,
    pub status: ReportStatus,
    pub timestamp: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        let short_id = r.short_id().to_string();
        Self {
            id: r.id,
            short_id,
            issue_type: r.issue_type,
            description: r.description,
            image: r.image,
            location: r.location,
            district: r.district,
            area: r.area,
            status: r.status,
            timestamp: r.timestamp,
        }
    }
}
