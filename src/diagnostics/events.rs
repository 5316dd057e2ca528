// SPDX-License-Identifier: MPL-2.0
//! Event types for toast lifecycle tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// One engine decision or lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ToastEvent {
    /// A queued request was promoted into the display slot.
    Shown { source: String },
    /// A request replaced the current toast's content in place, without
    /// replaying the slide-in.
    Coalesced { source: String },
    /// A request joined the queue at the given depth (1 = next up).
    Queued { source: String, depth: usize },
    /// A live request took the slot, discarding whatever was showing.
    Preempted { source: String },
    /// The current toast's timer ran out; the slide-out started.
    Expired { source: String },
    /// A caller retracted its toast while it was showing.
    Cancelled { source: String },
    /// The slide-out completed and the slot emptied.
    Finished { source: String },
    /// A hard reset dropped this many requests (current + queued).
    Cleared { dropped: usize },
}

impl ToastEvent {
    /// The source id the event concerns, if it concerns one.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        match self {
            ToastEvent::Shown { source }
            | ToastEvent::Coalesced { source }
            | ToastEvent::Queued { source, .. }
            | ToastEvent::Preempted { source }
            | ToastEvent::Expired { source }
            | ToastEvent::Cancelled { source }
            | ToastEvent::Finished { source } => Some(source),
            ToastEvent::Cleared { .. } => None,
        }
    }
}

/// A recorded event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    recorded_at: Instant,
    kind: ToastEvent,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: ToastEvent) -> Self {
        Self {
            recorded_at: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn recorded_at(&self) -> Instant {
        self.recorded_at
    }

    #[must_use]
    pub fn kind(&self) -> &ToastEvent {
        &self.kind
    }
}

/// Serializable snapshot of the collector's buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// RFC 3339 timestamp of report generation.
    pub generated_at: String,
    /// Buffered events, oldest first.
    pub events: Vec<ToastEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_accessor_covers_all_sourced_events() {
        let sourced = [
            ToastEvent::Shown {
                source: "s".into(),
            },
            ToastEvent::Coalesced {
                source: "s".into(),
            },
            ToastEvent::Queued {
                source: "s".into(),
                depth: 1,
            },
            ToastEvent::Preempted {
                source: "s".into(),
            },
            ToastEvent::Expired {
                source: "s".into(),
            },
            ToastEvent::Cancelled {
                source: "s".into(),
            },
            ToastEvent::Finished {
                source: "s".into(),
            },
        ];
        for event in sourced {
            assert_eq!(event.source(), Some("s"));
        }
        assert_eq!(ToastEvent::Cleared { dropped: 2 }.source(), None);
    }

    #[test]
    fn events_serialize_with_snake_case_tags() {
        let report = DiagnosticReport {
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            events: vec![
                ToastEvent::Queued {
                    source: "saver".into(),
                    depth: 1,
                },
                ToastEvent::Shown {
                    source: "saver".into(),
                },
            ],
        };
        let serialized = toml::to_string(&report).expect("report should serialize");
        assert!(serialized.contains("event = \"queued\""));
        assert!(serialized.contains("event = \"shown\""));
        assert!(serialized.contains("source = \"saver\""));
    }
}
