use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub simulator: SimulatorConfig,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the file-backed key-value entries
    pub data_dir: PathBuf,
}

/// Tuning for the simulated status progression
///
/// A report is promoted one step when its uniform sample exceeds the
/// threshold for its current transition.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub acknowledge_threshold: f64,
    pub progress_threshold: f64,
    pub resolve_threshold: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            storage: StorageConfig::from_env()?,
            simulator: SimulatorConfig::from_env()?,
        })
    }
}

impl StorageConfig {
    const DEFAULT_DATA_DIR: &'static str = ".nagrik";

    pub fn from_env() -> Result<Self, String> {
        let data_dir =
            env::var("NAGRIK_DATA_DIR").unwrap_or_else(|_| Self::DEFAULT_DATA_DIR.to_string());

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
        }
    }
}

impl SimulatorConfig {
    const DEFAULT_ACKNOWLEDGE_THRESHOLD: f64 = 0.7;
    const DEFAULT_PROGRESS_THRESHOLD: f64 = 0.8;
    const DEFAULT_RESOLVE_THRESHOLD: f64 = 0.9;

    pub fn from_env() -> Result<Self, String> {
        let acknowledge_threshold = threshold_var(
            "SIM_ACKNOWLEDGE_THRESHOLD",
            Self::DEFAULT_ACKNOWLEDGE_THRESHOLD,
        )?;
        let progress_threshold =
            threshold_var("SIM_PROGRESS_THRESHOLD", Self::DEFAULT_PROGRESS_THRESHOLD)?;
        let resolve_threshold =
            threshold_var("SIM_RESOLVE_THRESHOLD", Self::DEFAULT_RESOLVE_THRESHOLD)?;

        Ok(Self {
            acknowledge_threshold,
            progress_threshold,
            resolve_threshold,
        })
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            acknowledge_threshold: Self::DEFAULT_ACKNOWLEDGE_THRESHOLD,
            progress_threshold: Self::DEFAULT_PROGRESS_THRESHOLD,
            resolve_threshold: Self::DEFAULT_RESOLVE_THRESHOLD,
        }
    }
}

fn threshold_var(name: &str, default: f64) -> Result<f64, String> {
    let value = match env::var(name) {
        Ok(raw) => raw
            .parse::<f64>()
            .map_err(|_| format!("{} must be a valid number", name))?,
        Err(_) => default,
    };

    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{} must be between 0.0 and 1.0", name));
    }

    Ok(value)
}
