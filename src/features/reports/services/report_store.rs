use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::{Report, ReportStatus};
use crate::modules::storage::KeyValueStore;
use crate::shared::constants::REPORTS_STORAGE_KEY;

/// Store for citizen report records
///
/// All reports live in one serialized snapshot under a single storage key.
/// Every operation loads the snapshot at entry and persists it before
/// returning; the collection is never held as ambient state.
pub struct ReportStore {
    store: Arc<dyn KeyValueStore>,
}

impl ReportStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Submit a new report
    ///
    /// Rejects a blank description or missing photo evidence before anything
    /// is persisted. A corrupt snapshot is discarded so a submission is never
    /// lost to one.
    pub async fn create(&self, dto: CreateReportDto) -> Result<Report> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut reports = match self.load().await {
            Ok(reports) => reports,
            Err(AppError::CorruptData(msg)) => {
                tracing::warn!("Discarding corrupt report snapshot: {}", msg);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let now = Utc::now();
        let report = Report {
            id: next_report_id(&reports, now.timestamp_millis()),
            issue_type: dto.issue_type,
            description: dto.description.trim().to_string(),
            image: dto.image,
            location: dto.location,
            district: dto.district,
            area: dto.area,
            status: ReportStatus::Submitted,
            timestamp: now,
        };

        reports.push(report.clone());
        self.save(&reports).await?;

        tracing::info!("Created report {} ({})", report.id, report.issue_type);

        Ok(report)
    }

    /// List all reports, most recent first
    ///
    /// Ties on timestamp keep their insertion order.
    pub async fn list(&self) -> Result<Vec<Report>> {
        let mut reports = self.load().await?;
        reports.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(reports)
    }

    /// Get a single report by id
    pub async fn get(&self, id: &str) -> Result<Report> {
        self.load()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Replace the status of the report matching `id`
    ///
    /// An unknown id is a silent no-op: nothing is persisted and no error is
    /// raised, since callers only ever update ids they just read.
    pub async fn update_status(&self, id: &str, status: ReportStatus) -> Result<()> {
        let mut reports = self.load().await?;

        let Some(report) = reports.iter_mut().find(|r| r.id == id) else {
            tracing::debug!("Skipping status update for unknown report {}", id);
            return Ok(());
        };
        report.status = status;

        self.save(&reports).await?;

        tracing::info!("Report {} moved to {}", id, status);
        Ok(())
    }

    /// Discard the persisted snapshot and restart with an empty collection
    ///
    /// Recovery path after `list` reports corrupt data.
    pub async fn recover(&self) -> Result<()> {
        self.store.remove(REPORTS_STORAGE_KEY).await?;
        tracing::warn!("Report snapshot discarded, starting empty");
        Ok(())
    }

    /// Load the snapshot in insertion order
    pub(crate) async fn load(&self) -> Result<Vec<Report>> {
        let Some(raw) = self.store.get(REPORTS_STORAGE_KEY).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw)
            .map_err(|e| AppError::CorruptData(format!("report snapshot is not valid: {}", e)))
    }

    /// Persist the full collection snapshot
    pub(crate) async fn save(&self, reports: &[Report]) -> Result<()> {
        let raw = serde_json::to_string(reports)
            .map_err(|e| AppError::Storage(format!("failed to serialize reports: {}", e)))?;
        self.store.set(REPORTS_STORAGE_KEY, raw).await
    }
}

/// Next id for a new report
///
/// Ids are epoch milliseconds as strings. When a creation lands in the same
/// millisecond as the newest existing report, the id is bumped past it so ids
/// stay unique and strictly increasing.
fn next_report_id(reports: &[Report], now_millis: i64) -> String {
    let newest = reports
        .iter()
        .filter_map(|r| r.id.parse::<i64>().ok())
        .max();

    match newest {
        Some(newest) if newest >= now_millis => (newest + 1).to_string(),
        _ => now_millis.to_string(),
    }
}
