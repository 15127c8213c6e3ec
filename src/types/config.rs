use crate::error::PulseError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PulseConfig {
    pub api: Option<ApiConfig>,
    pub thresholds: Option<ThresholdsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    pub bloat_files: Option<usize>,
    pub sparse_files: Option<usize>,
    pub top_files: Option<usize>,
}

/// Resolved scoring knobs. The bloat/sparse cutoffs are deliberately
/// configurable; shipped products have used 50/3 as well as 1000/5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub bloat_files: usize,
    pub sparse_files: usize,
    pub top_files: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bloat_files: 1000,
            sparse_files: 5,
            top_files: 5,
        }
    }
}

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

impl PulseConfig {
    pub fn api_base(&self) -> &str {
        self.api
            .as_ref()
            .and_then(|api| api.base_url.as_deref())
            .unwrap_or(DEFAULT_API_BASE)
    }

    pub fn token(&self) -> Option<&str> {
        self.api.as_ref().and_then(|api| api.token.as_deref())
    }

    pub fn thresholds(&self) -> Thresholds {
        let defaults = Thresholds::default();
        match &self.thresholds {
            Some(thresholds) => Thresholds {
                bloat_files: thresholds.bloat_files.unwrap_or(defaults.bloat_files),
                sparse_files: thresholds.sparse_files.unwrap_or(defaults.sparse_files),
                top_files: thresholds.top_files.unwrap_or(defaults.top_files),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), PulseError> {
        let thresholds = self.thresholds();
        if thresholds.sparse_files >= thresholds.bloat_files {
            return Err(PulseError::ConfigParse(format!(
                "thresholds.sparse_files ({}) must be below thresholds.bloat_files ({})",
                thresholds.sparse_files, thresholds.bloat_files
            )));
        }
        if thresholds.top_files == 0 {
            return Err(PulseError::ConfigParse(
                "thresholds.top_files must be greater than 0".to_string(),
            ));
        }

        let base = self.api_base();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(PulseError::ConfigParse(format!(
                "api.base_url must start with http:// or https:// (found {base})"
            )));
        }
        if let Some(token) = self.token() {
            if token.trim().is_empty() {
                return Err(PulseError::ConfigParse(
                    "api.token must not be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}
