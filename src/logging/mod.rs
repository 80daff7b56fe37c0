//! Logging and observability
//!
//! Structured logging with JSON-formatted file output, configurable log
//! levels, and local rotation. Session content never reaches the logs;
//! only counts, identifiers and decisions do.
//!
//! # Example
//!
//! ```no_run
//! use argus::logging::init_logging;
//! use argus::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a preparation batch
#[macro_export]
macro_rules! log_prepare_start {
    ($session_count:expr) => {
        tracing::info!(sessions = $session_count, "Starting preparation");
    };
}

/// Log an error with context
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_compile() {
        // Compile-only check; log output is not asserted in unit tests
    }
}
