//! Error types for the forecast_live crate

use thiserror::Error;

/// Custom error types for the forecast_live crate
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Error from invalid pipeline configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error from the aggregation layer
    #[error("Aggregation error: {0}")]
    Stream(#[from] stream_agg::StreamError),

    /// Error from the event simulation layer
    #[error("Simulation error: {0}")]
    Sim(#[from] sales_sim::SimError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, PipelineError>;
