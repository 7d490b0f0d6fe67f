use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Published salary survey used when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "https://raw.githubusercontent.com/vqrca/dashboard_salarios_dados/refs/heads/main/dados-imersao-final.csv";

/// Optional overrides file, looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

/// Dashboard settings. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Path or http(s) URL of the dataset.
    pub source: String,
    /// Number of job titles in the "top by mean salary" chart.
    pub top_n: usize,
    /// Bins of the salary histogram.
    pub histogram_bins: usize,
    /// Job title analysed by the country / seniority / contract charts.
    pub focus_title: String,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            top_n: 10,
            histogram_bins: 40,
            focus_title: "Data Scientist".to_string(),
            window_size: [1400.0, 900.0],
        }
    }
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Defaults, overridden by [`CONFIG_FILE`] when it exists. A broken file
    /// is reported and ignored.
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Using settings from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, r#"{{ "top_n": 5, "focus_title": "Data Engineer" }}"#).unwrap();

        let config = DashboardConfig::from_file(tmp.path()).unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.focus_title, "Data Engineer");
        assert_eq!(config.histogram_bins, 40);
        assert_eq!(config.source, DEFAULT_SOURCE);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "top_n = 5").unwrap();
        let err = DashboardConfig::from_file(tmp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
