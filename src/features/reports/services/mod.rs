mod location_service;
mod report_store;
mod status_simulator;

pub use location_service::{LocationService, ResolvedLocation};
pub use report_store::ReportStore;
pub use status_simulator::{StatusSampler, StatusSimulator, ThreadRngSampler};
