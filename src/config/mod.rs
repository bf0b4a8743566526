//! Externalized configuration for search client wiring.
//!
//! Provides hierarchical configuration loading and validation with:
//! - Default values as code base
//! - Configuration file support
//! - Environment variable overrides

use std::collections::HashMap;
use std::env;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::settings::collect_prefixed;
use crate::Error;
use crate::Result;

/// Prefix of environment variables considered during loading, e.g.
/// `SEARCH__CLUSTER_NAME`.
const ENV_PREFIX: &str = "SEARCH";
const ENV_SEPARATOR: &str = "__";

/// Externalized configuration consumed by the client factory.
///
/// Loaded with hierarchical override support (later sources override
/// earlier):
/// 1. Default values from code implementation
/// 2. Configuration file specified by `CONFIG_PATH`
/// 3. Environment variables (highest priority)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchClientConfig {
    /// Name of the cluster the client belongs to
    #[serde(default = "default_cluster_name")]
    pub cluster_name: String,

    /// Comma-separated `host:port` list of remote cluster nodes.
    /// Absent or blank means the client runs embedded.
    #[serde(default)]
    pub cluster_nodes: Option<String>,

    /// Arbitrary passthrough settings handed to the client library
    /// verbatim; explicit entries win over factory defaults
    #[serde(default)]
    pub properties: HashMap<String, String>,

    /// Process monitor refresh interval applied to embedded clients as
    /// `monitor.process.refresh_interval`
    #[serde(default = "default_monitor_refresh_interval")]
    pub monitor_refresh_interval: String,
}

impl Default for SearchClientConfig {
    fn default() -> Self {
        Self {
            cluster_name: default_cluster_name(),
            cluster_nodes: None,
            properties: HashMap::new(),
            monitor_refresh_interval: default_monitor_refresh_interval(),
        }
    }
}

impl SearchClientConfig {
    /// Loads configuration from hierarchical sources without validation.
    ///
    /// Configuration sources are merged in the following order (later
    /// sources override earlier):
    /// 1. Type defaults (lowest priority)
    /// 2. Configuration file from `CONFIG_PATH` environment variable (if set)
    /// 3. Environment variables with `SEARCH__` prefix (highest priority)
    ///
    /// # Note
    /// This method does NOT validate the configuration. Validation is
    /// deferred to allow further overrides via `with_override_config()`.
    /// Callers MUST call `validate()` before using the configuration.
    ///
    /// # Examples
    /// ```ignore
    /// // Load with default values only
    /// let cfg = SearchClientConfig::new()?.validate()?;
    ///
    /// // Load with config file and environment variables
    /// std::env::set_var("CONFIG_PATH", "config/search.toml");
    /// std::env::set_var("SEARCH__CLUSTER_NAME", "logs");
    /// let cfg = SearchClientConfig::new()?.validate()?;
    /// ```
    pub fn new() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(config_path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&config_path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config) // No validation - deferred to validate()
    }

    /// Applies additional configuration overrides from file without
    /// validation.
    ///
    /// Merging order (later sources override earlier):
    /// 1. Current configuration values
    /// 2. New configuration file
    /// 3. Latest environment variables (highest priority)
    pub fn with_override_config(
        &self,
        path: &str,
    ) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(config) // No validation - deferred to validate()
    }

    /// Binds configuration from a flat key-value source.
    ///
    /// This is the shape a finalized property source produces: dotted keys
    /// relative to the configuration prefix, e.g.
    /// `properties.monitor.process.refresh_interval=2s` or
    /// `cluster-nodes=localhost:9300`. Top-level keys are accepted in both
    /// `-` and `_` spellings; unknown keys outside `properties.*` are
    /// ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_string(), value.into()))
            .collect();

        let mut config = Self::default();
        for (key, value) in &pairs {
            match key.trim().replace('-', "_").as_str() {
                "cluster_name" => config.cluster_name = value.clone(),
                "cluster_nodes" => config.cluster_nodes = Some(value.clone()),
                "monitor_refresh_interval" => config.monitor_refresh_interval = value.clone(),
                _ => {}
            }
        }
        config.properties = collect_prefixed(pairs, "properties");
        config
    }

    /// Validates configuration and returns validated instance.
    ///
    /// Consumes self and must be called after all overrides are applied.
    /// Cluster node addresses are deliberately NOT parsed here; a
    /// malformed address surfaces as a client creation failure instead.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` on a blank cluster name, a blank
    /// refresh interval or a blank property key.
    pub fn validate(self) -> Result<Self> {
        if self.cluster_name.trim().is_empty() {
            return Err(Error::InvalidConfig("cluster_name must not be blank".into()));
        }

        if self.monitor_refresh_interval.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "monitor_refresh_interval must not be blank".into(),
            ));
        }

        if self.properties.keys().any(|key| key.trim().is_empty()) {
            return Err(Error::InvalidConfig("property keys must not be blank".into()));
        }

        Ok(self)
    }

    /// Configured remote node list, treating a blank string as absent.
    pub fn cluster_nodes(&self) -> Option<&str> {
        self.cluster_nodes
            .as_deref()
            .map(str::trim)
            .filter(|nodes| !nodes.is_empty())
    }
}

fn default_cluster_name() -> String {
    "elasticsearch".to_string()
}

fn default_monitor_refresh_interval() -> String {
    "1s".to_string()
}
