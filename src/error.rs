use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("profile not found: {0}")]
    MissingProfile(String),

    #[error("config error: {0}")]
    Config(String),
}
