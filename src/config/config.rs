use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::metrics::MetricsConfig;
use super::store::StoreConfig;

/// Where the YAML configuration is looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

/// Environment variables with this prefix override file values.
/// Nested keys are separated by `__`, e.g. `DEVREG_METRICS__NAMESPACE`.
pub const ENV_PREFIX: &str = "DEVREG_";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: listener addresses, store seed, metrics and logging.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
#[serde(default)]
pub struct ConfigV1 {
    pub devices_bind_address: String,
    pub metrics_bind_address: String,
    /// Published as the `version` label of the info gauge.
    pub app_version: String,
    pub store: StoreConfig,
    pub metrics: MetricsConfig,
    pub logging: LoggingConfig,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        ConfigV1 {
            devices_bind_address: "0.0.0.0:8080".to_string(),
            metrics_bind_address: "0.0.0.0:8081".to_string(),
            app_version: "2.10.5".to_string(),
            store: StoreConfig::default(),
            metrics: MetricsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// A figment holding only the built-in defaults.
pub fn defaults() -> Figment {
    Figment::from(Serialized::defaults(Config::ConfigV1(ConfigV1::default())))
}

/// Extracts the current configuration version out of a figment.
pub fn extract(figment: Figment) -> Result<ConfigV1, figment::Error> {
    match figment.extract::<Config>()? {
        Config::ConfigV1(c) => Ok(c),
    }
    // handle configuration migration between versions here when necessary
}

/// Load config from defaults, then the YAML file at `path` (if present),
/// then `DEVREG_*` environment variables.
pub fn load_config(path: &str) -> Result<ConfigV1, figment::Error> {
    extract(
        defaults()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__")),
    )
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() -> Result<(), serde_json::Error> {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
