// Error type shared by services and handlers

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DashboardError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DashboardError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

impl From<config::ConfigError> for DashboardError {
    fn from(err: config::ConfigError) -> Self {
        DashboardError::Config(err.to_string())
    }
}
