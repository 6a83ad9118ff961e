//! Observability for the stores API
//!
//! This module provides:
//! - Logging initialisation (`tracing-subscriber`, pretty or JSON)
//! - Typed lifecycle events with stable names
//! - Scope-based begin/complete logging
//!
//! # Usage
//!
//! ```ignore
//! use stores_api::observability::{init_logging, log_event, Event, LogFormat, ObservationScope};
//!
//! init_logging(LogFormat::Json);
//! log_event(Event::BootStart);
//!
//! let scope = ObservationScope::new("SCHEMA_INIT");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod scope;

pub use events::Event;
pub use scope::ObservationScope;

use std::fmt;
use std::str::FromStr;
use std::sync::Once;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "stores_api=info,tower_http=info";

static INIT_ONCE: Once = Once::new();

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines for a terminal
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}' (expected pretty or json)", other)),
        }
    }
}

/// Install the global tracing subscriber.
///
/// Only the first call has an effect. The level filter comes from
/// `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn init_logging(format: LogFormat) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);
        // try_init: a subscriber installed by a test harness wins
        let _ = match format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
    });
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    if event.is_failure() {
        tracing::error!(event = event.as_str());
    } else {
        tracing::info!(event = event.as_str());
    }
}
