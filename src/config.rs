use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default dataset location when CLIQUESCOPE_DATASET is unset.
pub const DEFAULT_DATASET_PATH: &str = "./cliques.json";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every value
/// has a default; command-line flags override the thresholds per query.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    /// Rows shown for frequency tables (CLIQUESCOPE_TOP_N, default 20)
    pub top_n: usize,
    /// Default fractured-relevance threshold (CLIQUESCOPE_ALPHA, default 0.5)
    pub alpha: f64,
    /// Default core-relevance threshold (CLIQUESCOPE_BETA, default 0.5)
    pub beta: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            dataset_path: env::var("CLIQUESCOPE_DATASET")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH)),
            top_n: parse_var("CLIQUESCOPE_TOP_N", 20)?,
            alpha: parse_var("CLIQUESCOPE_ALPHA", 0.5)?,
            beta: parse_var("CLIQUESCOPE_BETA", 0.5)?,
        })
    }

    /// Check that the dataset file exists.
    /// Call this before any command that reads cliques.
    pub fn require_dataset(&self) -> Result<()> {
        if !self.dataset_path.exists() {
            anyhow::bail!(
                "Dataset not found at {}\n\
                 Set CLIQUESCOPE_DATASET in your .env file or pass --dataset.",
                self.dataset_path.display()
            );
        }
        Ok(())
    }
}

/// Read an optional env var, falling back to `default` when unset.
/// A set-but-unparseable value is an error rather than a silent default.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}
