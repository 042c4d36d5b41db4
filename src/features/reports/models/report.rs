use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::reports::models::ReportLocation;
use crate::shared::constants::SHORT_ID_LEN;

/// Issue category a citizen can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Pothole,
    Streetlight,
    Garbage,
    Water,
    Drainage,
    Other,
}

impl IssueType {
    /// Every reportable category, in display order
    pub const ALL: [IssueType; 6] = [
        IssueType::Pothole,
        IssueType::Streetlight,
        IssueType::Garbage,
        IssueType::Water,
        IssueType::Drainage,
        IssueType::Other,
    ];
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::Pothole => write!(f, "pothole"),
            IssueType::Streetlight => write!(f, "streetlight"),
            IssueType::Garbage => write!(f, "garbage"),
            IssueType::Water => write!(f, "water"),
            IssueType::Drainage => write!(f, "drainage"),
            IssueType::Other => write!(f, "other"),
        }
    }
}

/// Report lifecycle status
///
/// Statuses only ever move forward along submitted → acknowledged →
/// in-progress → resolved; `resolved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Submitted,
    Acknowledged,
    InProgress,
    Resolved,
}

impl ReportStatus {
    /// The next status along the progression, or `None` once resolved
    pub fn next(self) -> Option<ReportStatus> {
        match self {
            ReportStatus::Submitted => Some(ReportStatus::Acknowledged),
            ReportStatus::Acknowledged => Some(ReportStatus::InProgress),
            ReportStatus::InProgress => Some(ReportStatus::Resolved),
            ReportStatus::Resolved => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ReportStatus::Resolved)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Submitted => write!(f, "submitted"),
            ReportStatus::Acknowledged => write!(f, "acknowledged"),
            ReportStatus::InProgress => write!(f, "in-progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// A citizen-submitted civic issue report
///
/// Field names match the persisted snapshot entry: the reports storage key
/// holds a JSON array of these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
    /// Local file reference to the photo evidence
    pub image: String,
    pub location: Option<ReportLocation>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    pub status: ReportStatus,
    pub timestamp: DateTime<Utc>,
}

impl Report {
    /// Trailing id digits shown to citizens as the short report id
    pub fn short_id(&self) -> &str {
        let split = self.id.len().saturating_sub(SHORT_ID_LEN);
        &self.id[split..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_progression_is_linear() {
        assert_eq!(
            ReportStatus::Submitted.next(),
            Some(ReportStatus::Acknowledged)
        );
        assert_eq!(
            ReportStatus::Acknowledged.next(),
            Some(ReportStatus::InProgress)
        );
        assert_eq!(ReportStatus::InProgress.next(), Some(ReportStatus::Resolved));
        assert_eq!(ReportStatus::Resolved.next(), None);
    }

    #[test]
    fn test_status_order_is_total() {
        assert!(ReportStatus::Submitted < ReportStatus::Acknowledged);
        assert!(ReportStatus::Acknowledged < ReportStatus::InProgress);
        assert!(ReportStatus::InProgress < ReportStatus::Resolved);
    }

    #[test]
    fn test_next_always_moves_forward() {
        for status in [
            ReportStatus::Submitted,
            ReportStatus::Acknowledged,
            ReportStatus::InProgress,
            ReportStatus::Resolved,
        ] {
            if let Some(next) = status.next() {
                assert!(next > status);
            } else {
                assert!(status.is_terminal());
            }
        }
    }

    #[test]
    fn test_status_serializes_in_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::from_str::<ReportStatus>("\"in-progress\"").unwrap(),
            ReportStatus::InProgress
        );
        assert_eq!(
            serde_json::to_string(&ReportStatus::Submitted).unwrap(),
            "\"submitted\""
        );
    }

    #[test]
    fn test_issue_type_serializes_in_lowercase() {
        assert_eq!(
            serde_json::to_string(&IssueType::Streetlight).unwrap(),
            "\"streetlight\""
        );
        assert_eq!(
            serde_json::from_str::<IssueType>("\"pothole\"").unwrap(),
            IssueType::Pothole
        );
    }

    #[test]
    fn test_short_id_takes_trailing_digits() {
        let report = Report {
            id: "1754550000123".to_string(),
            issue_type: IssueType::Pothole,
            description: "Deep hole on Main Rd".to_string(),
            image: "img1.jpg".to_string(),
            location: None,
            district: None,
            area: None,
            status: ReportStatus::Submitted,
            timestamp: Utc::now(),
        };

        assert_eq!(report.short_id(), "000123");
    }

    #[test]
    fn test_short_id_on_short_ids() {
        let report = Report {
            id: "42".to_string(),
            issue_type: IssueType::Other,
            description: "x".to_string(),
            image: "img.jpg".to_string(),
            location: None,
            district: None,
            area: None,
            status: ReportStatus::Submitted,
            timestamp: Utc::now(),
        };

        assert_eq!(report.short_id(), "42");
    }
}
