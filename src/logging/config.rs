//! # Logging Bootstrap
//!
//! Tracing-subscriber setup for hosts that let this crate own the logging
//! configuration. Hosts with their own subscriber can skip this entirely;
//! enrichment does not depend on it.

use serde_json::{json, Value};
use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{EnrichError, EnrichResult};
use crate::foundation::constants::DEFAULT_LOG_LEVEL;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "warn")
    pub level: String,
    /// Enable JSON structured logging (vs plain text)
    pub json_format: bool,
    /// Enable pretty printing for development
    pub pretty_print: bool,
    /// Environment filter (supports complex filters like "correlog=debug")
    pub env_filter: Option<String>,
    /// Custom fields reported when logging is initialized
    pub global_fields: serde_json::Map<String, Value>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            pretty_print: true,
            env_filter: None,
            global_fields: serde_json::Map::new(),
        }
    }
}

impl LoggingConfig {
    /// Create production logging configuration
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            json_format: true,
            pretty_print: false,
            env_filter: Some("correlog=info".to_string()),
            global_fields: {
                let mut fields = serde_json::Map::new();
                fields.insert("env".to_string(), json!("production"));
                fields
            },
        }
    }

    /// Create development logging configuration
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            json_format: false,
            pretty_print: true,
            env_filter: Some("correlog=debug".to_string()),
            global_fields: {
                let mut fields = serde_json::Map::new();
                fields.insert("env".to_string(), json!("development"));
                fields
            },
        }
    }

    /// Create test logging configuration (minimal output)
    pub fn test() -> Self {
        Self {
            level: "error".to_string(),
            json_format: false,
            pretty_print: false,
            env_filter: Some("correlog=error".to_string()),
            global_fields: serde_json::Map::new(),
        }
    }

    /// Add a field to report when logging is initialized
    pub fn with_global_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.global_fields.insert(key.into(), value.into());
        self
    }

    /// Set environment filter
    pub fn with_env_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.env_filter = Some(filter.into());
        self
    }
}

/// Initialize structured logging for the application
pub fn init_logging(config: LoggingConfig) -> EnrichResult<()> {
    let env_filter = config.env_filter.as_deref().unwrap_or(&config.level);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(env_filter))
        .map_err(|e| EnrichError::logging_init(e.to_string()))?;

    let result = if config.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new().with_writer(io::stdout).json())
            .try_init()
    } else if config.pretty_print {
        tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new().with_writer(io::stdout).pretty())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new().with_writer(io::stdout))
            .try_init()
    };
    result.map_err(|e| EnrichError::logging_init(e.to_string()))?;

    if config.global_fields.is_empty() {
        tracing::info!(
            target: "correlog::logging",
            "Logging initialized (level: {}, format: {})",
            config.level,
            if config.json_format { "JSON" } else { "text" }
        );
    } else {
        let mut init_msg = json!({
            "message": "Logging initialized",
            "level": config.level,
            "json_format": config.json_format,
        });
        for (key, value) in config.global_fields {
            init_msg[key] = value;
        }
        tracing::info!(target: "correlog::logging", "{}", init_msg);
    }

    Ok(())
}
