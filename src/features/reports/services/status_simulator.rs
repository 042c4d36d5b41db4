use std::sync::Arc;

use rand::Rng;

use crate::core::config::SimulatorConfig;
use crate::core::error::Result;
use crate::features::reports::models::ReportStatus;
use crate::features::reports::services::ReportStore;

/// Uniform sample source for status promotion rolls
///
/// Seam over the RNG so refresh outcomes can be forced in tests.
pub trait StatusSampler: Send + Sync {
    /// Draw a uniform sample in [0, 1)
    fn sample(&self) -> f64;
}

/// Production sampler backed by the thread-local RNG
#[derive(Debug, Default)]
pub struct ThreadRngSampler;

impl StatusSampler for ThreadRngSampler {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen()
    }
}

/// Stand-in for the municipal backend's asynchronous status updates
///
/// Each refresh rolls every report forward at most one status step; a report
/// is promoted when its sample exceeds the threshold configured for its
/// current transition. Resolved reports never change. This component should
/// eventually be replaced by a real status-sync channel, not extended.
pub struct StatusSimulator {
    reports: Arc<ReportStore>,
    config: SimulatorConfig,
    sampler: Box<dyn StatusSampler>,
}

impl StatusSimulator {
    pub fn new(reports: Arc<ReportStore>, config: SimulatorConfig) -> Self {
        Self::with_sampler(reports, config, Box::new(ThreadRngSampler))
    }

    pub fn with_sampler(
        reports: Arc<ReportStore>,
        config: SimulatorConfig,
        sampler: Box<dyn StatusSampler>,
    ) -> Self {
        Self {
            reports,
            config,
            sampler,
        }
    }

    /// Re-evaluate every report's status, returning how many were promoted
    ///
    /// The snapshot is written back only when at least one report changed. A
    /// storage failure leaves the persisted state as it was; the refresh can
    /// simply be triggered again.
    pub async fn refresh(&self) -> Result<usize> {
        let current = self.reports.load().await?;

        let refreshed: Vec<_> = current
            .iter()
            .map(|report| {
                let mut report = report.clone();
                report.status = self.advance(report.status);
                report
            })
            .collect();

        if refreshed == current {
            tracing::debug!("Refresh left all {} reports unchanged", current.len());
            return Ok(0);
        }

        self.reports.save(&refreshed).await?;

        let advanced = refreshed
            .iter()
            .zip(&current)
            .filter(|(after, before)| after.status != before.status)
            .count();

        tracing::info!(
            "Refresh advanced {} of {} reports",
            advanced,
            refreshed.len()
        );

        Ok(advanced)
    }

    /// Roll one report forward at most a single step
    fn advance(&self, status: ReportStatus) -> ReportStatus {
        let threshold = match status {
            ReportStatus::Submitted => self.config.acknowledge_threshold,
            ReportStatus::Acknowledged => self.config.progress_threshold,
            ReportStatus::InProgress => self.config.resolve_threshold,
            ReportStatus::Resolved => return status,
        };

        match status.next() {
            Some(next) if self.sampler.sample() > threshold => next,
            _ => status,
        }
    }
}
