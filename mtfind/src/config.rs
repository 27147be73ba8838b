use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::search::MatcherKind;

/// Configuration for the search operation.
///
/// Values can be loaded from YAML files, in order of precedence:
/// 1. Custom config file specified via `--config`
/// 2. Local `.mtfind.yaml` in the current directory
/// 3. Global `$HOME/.config/mtfind/config.yaml`
///
/// Example:
/// ```yaml
/// # Pattern to search for (`?` matches any single byte)
/// pattern: "?ad"
///
/// # File to search
/// input_path: "input.txt"
///
/// # Matching strategy (brute-force or boyer-moore)
/// matcher: "boyer-moore"
///
/// # Partition count (default: CPU cores)
/// partition_count: 4
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "info"
/// ```
///
/// When using the CLI, command-line arguments take precedence over config
/// file values; the merging behavior is defined in `merge_with_cli`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// The search pattern; `?` matches any single byte
    #[serde(default)]
    pub pattern: String,

    /// Path of the file to search
    #[serde(default)]
    pub input_path: PathBuf,

    /// Number of line-aligned partitions to scan in parallel.
    /// Defaults to number of CPU cores if not specified
    #[serde(default = "default_partition_count")]
    pub partition_count: NonZeroUsize,

    /// Which matching strategy to use; a performance choice only,
    /// both strategies produce identical results
    #[serde(default)]
    pub matcher: MatcherKind,

    /// Whether to only show statistics instead of individual matches
    #[serde(default)]
    pub stats_only: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_partition_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SearchConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("mtfind/config.yaml")),
            // Local config
            Some(PathBuf::from(".mtfind.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Build and deserialize
        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: SearchConfig) -> Self {
        // CLI values take precedence over config file values
        if !cli_config.pattern.is_empty() {
            self.pattern = cli_config.pattern;
        }
        if cli_config.input_path != PathBuf::new() {
            self.input_path = cli_config.input_path;
        }
        if cli_config.matcher != MatcherKind::default() {
            self.matcher = cli_config.matcher;
        }
        if cli_config.stats_only {
            self.stats_only = true;
        }
        // Always use CLI partition count if specified
        self.partition_count = cli_config.partition_count;
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            input_path: PathBuf::new(),
            partition_count: default_partition_count(),
            matcher: MatcherKind::default(),
            stats_only: false,
            log_level: default_log_level(),
        }
    }
}
