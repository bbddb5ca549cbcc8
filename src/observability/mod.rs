//! Observability for restcoll
//!
//! Structured JSON logging of lifecycle and request events.
//!
//! ```ignore
//! use restcoll::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::Serving, &[("addr", "0.0.0.0:8080")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields; fatal events go to stderr
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    if event.is_fatal() {
        Logger::fatal(event.as_str(), fields);
    } else {
        Logger::info(event.as_str(), fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::ServerStart);
        log_event_with_fields(Event::RecordCreated, &[("collection", "items"), ("id", "1")]);
    }
}
