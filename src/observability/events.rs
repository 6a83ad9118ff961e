//! Lifecycle events for the stores API
//!
//! Events are explicit and typed. The string form is what appears in the
//! `event` field of every log line, so it must stay stable.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Startup failed, process will exit
    BootFailed,
    /// Configuration resolved
    ConfigLoaded,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,

    // Stores
    StoreCreated,
    StoreDeleted,

    // Items
    ItemCreated,
    ItemUpdated,
    ItemDeleted,

    // Requests
    /// A request was refused by a constraint or lookup
    RequestRejected,
    /// A request hit an unexpected storage failure
    RequestFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "STARTUP_BEGIN",
            Event::BootFailed => "STARTUP_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_BEGIN",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::StoreCreated => "STORE_CREATED",
            Event::StoreDeleted => "STORE_DELETED",

            Event::ItemCreated => "ITEM_CREATED",
            Event::ItemUpdated => "ITEM_UPDATED",
            Event::ItemDeleted => "ITEM_DELETED",

            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::BootFailed | Event::RequestFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
