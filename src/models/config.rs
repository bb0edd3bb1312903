use huescope_engine::SampleOptions;
use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Largest accepted request body and decoded image payload, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Image sampling parameters
    #[serde(default)]
    pub sample: SampleConfig,

    /// Detection history limits
    #[serde(default)]
    pub history: HistoryConfig,
}

fn default_bind_addr() -> String {
    "0.0.0.0:10000".to_string()
}

fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}

/// How detected colors are read from an image
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SampleConfig {
    /// Side of the square sampling window (odd; even values round up)
    #[serde(default = "default_window")]
    pub window: u32,

    /// Average the window instead of reading a single pixel
    #[serde(default = "default_average")]
    pub average: bool,
}

fn default_window() -> u32 {
    5
}

fn default_average() -> bool {
    true
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            average: default_average(),
        }
    }
}

/// Per-session history limits
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HistoryConfig {
    /// Entries returned when no `limit` is given
    #[serde(default = "default_history_limit")]
    pub default_limit: usize,

    /// Upper bound applied to a requested `limit`
    #[serde(default = "default_history_max_limit")]
    pub max_limit: usize,

    /// Oldest entries are dropped beyond this count
    #[serde(default = "default_max_entries")]
    pub max_entries_per_session: usize,
}

fn default_history_limit() -> usize {
    20
}

fn default_history_max_limit() -> usize {
    100
}

fn default_max_entries() -> usize {
    500
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            default_limit: default_history_limit(),
            max_limit: default_history_max_limit(),
            max_entries_per_session: default_max_entries(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_upload_bytes: default_max_upload_bytes(),
            sample: SampleConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults.
    ///
    /// A missing path, an unreadable file, or invalid YAML all yield the
    /// defaults with a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text, falling back to defaults.
    pub fn from_yaml(content: &str) -> Self {
        if content.trim().is_empty() {
            return Self::default();
        }

        match serde_yaml::from_str::<Self>(content) {
            Ok(config) => {
                tracing::info!(
                    bind_addr = %config.bind_addr,
                    max_upload_bytes = config.max_upload_bytes,
                    sample_window = config.sample.window,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Override the bind address (e.g. from `BIND_ADDR`).
    pub fn with_bind_addr(mut self, bind_addr: Option<String>) -> Self {
        if let Some(addr) = bind_addr.filter(|a| !a.trim().is_empty()) {
            self.bind_addr = addr;
        }
        self
    }

    /// Sampling options for the engine.
    pub fn sample_options(&self) -> SampleOptions {
        SampleOptions::new()
            .window(self.sample.window)
            .average(self.sample.average)
            .max_bytes(self.max_upload_bytes)
    }

    /// Clamp a requested history limit.
    pub fn history_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.history.default_limit)
            .clamp(1, self.history.max_limit.max(1))
    }
}
