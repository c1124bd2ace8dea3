//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure mode
//! during startup, the run itself, and narration output.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: carcel_core::ConfigError,
    },

    /// The simulation failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: carcel_core::RunnerError,
    },

    /// Writing narration to stdout failed.
    #[error("narration output failed: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Encoding a narration line as JSON failed.
    #[error("narration encoding failed: {source}")]
    Encode {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
