//! Observable events for gradelens
//!
//! Events are explicit and typed; every log line emitted through
//! [`super::log_event`] names one of these.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Service configuration loaded and validated
    ConfigLoaded,

    // Dataset
    /// Dataset file read and bound
    DatasetLoaded,
    /// Dataset could not be loaded
    DatasetLoadFailed,

    // Data service
    /// Listener bound, ready for requests
    ServiceListening,
    /// Request received
    RequestReceived,
    /// Request answered successfully
    RequestServed,
    /// Request answered with an error status
    RequestFailed,

    // Filter pipeline
    /// Filters applied and views recomputed
    FilterApplied,

    // Dashboard
    /// Terminal dashboard session started
    DashboardStart,
    /// Terminal dashboard session ended
    DashboardExit,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatasetLoadFailed => "DATASET_LOAD_FAILED",
            Event::ServiceListening => "SERVICE_LISTENING",
            Event::RequestReceived => "REQUEST_BEGIN",
            Event::RequestServed => "REQUEST_COMPLETE",
            Event::RequestFailed => "REQUEST_FAILED",
            Event::FilterApplied => "FILTER_APPLIED",
            Event::DashboardStart => "DASHBOARD_START",
            Event::DashboardExit => "DASHBOARD_EXIT",
        }
    }

    /// Returns true if the event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::DatasetLoadFailed | Event::RequestFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_are_upper_snake_case() {
        let events = [
            Event::ConfigLoaded,
            Event::DatasetLoaded,
            Event::DatasetLoadFailed,
            Event::ServiceListening,
            Event::RequestReceived,
            Event::RequestServed,
            Event::RequestFailed,
            Event::FilterApplied,
            Event::DashboardStart,
            Event::DashboardExit,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_failure_events() {
        assert!(Event::DatasetLoadFailed.is_failure());
        assert!(Event::RequestFailed.is_failure());
        assert!(!Event::RequestServed.is_failure());
    }
}
