//! ObservationScope for automatic begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` with elapsed time on `complete()`
//! - Logs `{name}_ERROR` on drop if never completed

use std::cell::Cell;
use std::time::Instant;

/// A scope that automatically logs begin and complete events
///
/// # Usage
///
/// ```ignore
/// let scope = ObservationScope::new("SCHEMA_INIT");
/// // ... do work, returning early with `?` on failure ...
/// scope.complete(); // logs SCHEMA_INIT_COMPLETE
/// // an early return drops the scope and logs SCHEMA_INIT_ERROR
/// ```
pub struct ObservationScope<'a> {
    name: &'a str,
    context: String,
    started: Instant,
    completed: Cell<bool>,
}

impl<'a> ObservationScope<'a> {
    /// Create a new observation scope
    ///
    /// Logs `{name}_BEGIN` immediately.
    pub fn new(name: &'a str) -> Self {
        Self::with_fields(name, &[])
    }

    /// Create a new observation scope whose events carry `fields`
    pub fn with_fields(name: &'a str, fields: &[(&str, &str)]) -> Self {
        let context = fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(event = %format!("{}_BEGIN", name), context = %context);

        Self {
            name,
            context,
            started: Instant::now(),
            completed: Cell::new(false),
        }
    }

    /// Mark the scope as successfully completed
    pub fn complete(self) {
        self.completed.set(true);
        tracing::info!(
            event = %format!("{}_COMPLETE", self.name),
            context = %self.context,
            elapsed_ms = self.started.elapsed().as_millis() as u64,
        );
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            tracing::error!(
                event = %format!("{}_ERROR", self.name),
                context = %self.context,
                reason = "scope dropped without completion",
            );
        }
    }
}
