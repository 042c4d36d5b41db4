mod dashboard_dto;

pub use dashboard_dto::{DashboardSummaryDto, DistrictCountDto, IssueTypeCountDto};
