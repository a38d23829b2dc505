//! Observability subsystem for gradelens
//!
//! - Structured logging (JSON lines)
//! - Typed lifecycle events
//! - Begin/complete scopes around dataset loads and requests
//!
//! # Usage
//!
//! ```ignore
//! use gradelens::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::DatasetLoaded, &[("rows", "395")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

fn severity_for(event: Event) -> Severity {
    if event.is_failure() {
        Severity::Error
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
///
/// Failure events go to stderr.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    match severity_for(event) {
        Severity::Error | Severity::Fatal => Logger::error(event.as_str(), fields),
        severity => Logger::log(severity, event.as_str(), fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_events_log_at_error() {
        assert_eq!(severity_for(Event::RequestFailed), Severity::Error);
        assert_eq!(severity_for(Event::RequestServed), Severity::Info);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::ConfigLoaded, &[("dataset_path", "data/dados.csv")]);
        log_event(Event::DashboardExit);
    }
}
