use serde::Deserialize;
use std::net::SocketAddr;

use crate::error::DashboardError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub log: LogSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub title: String,
    /// Compress JSON responses when the client accepts it.
    pub compression: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "NHM Health Monitoring".to_string(),
            compression: true,
        }
    }
}

impl ServerSettings {
    pub fn bind_addr(&self) -> Result<SocketAddr, DashboardError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| DashboardError::Config(format!("bad server address {}: {}", addr, e)))
    }
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

fn builder_with_defaults() -> Result<Builder, config::ConfigError> {
    let defaults = DashboardSettings::default();
    config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("log.filter", "info")?
        .set_default("dashboard.title", defaults.title)?
        .set_default("dashboard.compression", defaults.compression)
}

/// Defaults, then `config/dashboard.{toml,...}` if present, then
/// `DASHBOARD__SECTION__KEY` environment variables.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = builder_with_defaults()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Same layering as [`load_config`] but from an in-memory TOML document
/// instead of files and environment.
pub fn config_from_toml(toml: &str) -> Result<AppConfig, DashboardError> {
    let settings = builder_with_defaults()?
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}
