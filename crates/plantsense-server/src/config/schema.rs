use plantsense_core::error::{PlantsenseError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub ingest: IngestSection,

    #[serde(default)]
    pub forecast: ForecastSection,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PlantsenseError::UnsupportedVersion);
        }

        self.ingest.validate()?;
        self.forecast.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestSection {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default = "default_warn_log_len")]
    pub warn_log_len: usize,
}

impl Default for IngestSection {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            warn_log_len: default_warn_log_len(),
        }
    }
}

impl IngestSection {
    pub fn validate(&self) -> Result<()> {
        if !(256..=1_048_576).contains(&self.max_body_bytes) {
            return Err(PlantsenseError::BadRequest(
                "ingest.max_body_bytes must be between 256 and 1048576".into(),
            ));
        }
        if self.warn_log_len < 1000 {
            return Err(PlantsenseError::BadRequest(
                "ingest.warn_log_len must be at least 1000".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastSection {
    #[serde(default = "default_max_degree")]
    pub max_degree: usize,

    #[serde(default = "default_horizon_secs")]
    pub default_horizon_secs: u64,
}

impl Default for ForecastSection {
    fn default() -> Self {
        Self {
            max_degree: default_max_degree(),
            default_horizon_secs: default_horizon_secs(),
        }
    }
}

impl ForecastSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.max_degree) {
            return Err(PlantsenseError::BadRequest(
                "forecast.max_degree must be between 1 and 6".into(),
            ));
        }
        if !(1..=604_800).contains(&self.default_horizon_secs) {
            return Err(PlantsenseError::BadRequest(
                "forecast.default_horizon_secs must be between 1 and 604800".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    // Port the original deployment served on.
    "0.0.0.0:5000".into()
}
fn default_max_body_bytes() -> usize {
    65536
}
fn default_warn_log_len() -> usize {
    100_000
}
fn default_max_degree() -> usize {
    3
}
fn default_horizon_secs() -> u64 {
    600
}
