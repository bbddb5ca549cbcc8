//! Observable events
//!
//! Every log line names one of these; events are explicit and typed.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved (file or defaults)
    ConfigLoaded,
    /// Server is binding its listener
    ServerStart,
    /// Listener bound, accepting requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// All connections drained
    ShutdownComplete,
    /// Server could not start or crashed (FATAL)
    ServerFailed,

    // Requests
    /// A request finished (any status)
    RequestHandled,

    // Collections
    /// Record appended to a collection
    RecordCreated,
    /// Record removed from a collection
    RecordDeleted,
    /// A configured collection was not mounted
    CollectionSkipped,
    /// A response body could not be serialized
    EncodeFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ServerFailed => "SERVER_FAILED",
            Event::RequestHandled => "REQUEST_HANDLED",
            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::CollectionSkipped => "COLLECTION_SKIPPED",
            Event::EncodeFailed => "ENCODE_FAILED",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
