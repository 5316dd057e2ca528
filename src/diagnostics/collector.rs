// SPDX-License-Identifier: MPL-2.0
//! Collector aggregating toast lifecycle events.
//!
//! The collector owns the receiving end of a bounded channel and a ring
//! buffer. Producers hold a [`DiagnosticsHandle`] and never block: a full
//! channel drops the event instead of stalling the frame that produced
//! it. The host drains pending events at its own pace (typically once
//! per tick).

use chrono::Utc;
use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::CircularBuffer;
use super::events::{DiagnosticEvent, DiagnosticReport, ToastEvent};

/// Default ring buffer capacity.
const BUFFER_CAPACITY: usize = 256;

/// Bounded channel capacity between producers and the collector.
const CHANNEL_CAPACITY: usize = 64;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone; every clone feeds the same collector.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a toast lifecycle event.
    ///
    /// Non-blocking: the event is dropped if the channel is full.
    pub fn log(&self, kind: ToastEvent) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Central collector storing events in a circular buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_tx: Sender<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            event_tx,
            event_rx,
            buffer: CircularBuffer::with_capacity(BUFFER_CAPACITY),
        }
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle producers can log through.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending channel event into the buffer. Returns how
    /// many were drained.
    pub fn drain_pending(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            drained += 1;
        }
        drained
    }

    /// Iterates buffered events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discards all buffered events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Builds a serializable snapshot of the buffer.
    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        DiagnosticReport {
            generated_at: Utc::now().to_rfc3339(),
            events: self.buffer.iter().map(|e| e.kind().clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_collector_is_empty() {
        let collector = DiagnosticsCollector::new();
        assert!(collector.is_empty());
        assert_eq!(collector.len(), 0);
    }

    #[test]
    fn handle_events_arrive_after_drain() {
        let mut collector = DiagnosticsCollector::new();
        let handle = collector.handle();

        handle.log(ToastEvent::Shown {
            source: "a".into(),
        });
        handle.log(ToastEvent::Expired {
            source: "a".into(),
        });
        assert!(collector.is_empty());

        assert_eq!(collector.drain_pending(), 2);
        assert_eq!(collector.len(), 2);

        let kinds: Vec<_> = collector.events().map(DiagnosticEvent::kind).collect();
        assert!(matches!(kinds[0], ToastEvent::Shown { .. }));
        assert!(matches!(kinds[1], ToastEvent::Expired { .. }));
    }

    #[test]
    fn cloned_handles_feed_the_same_collector() {
        let mut collector = DiagnosticsCollector::new();
        let first = collector.handle();
        let second = first.clone();

        first.log(ToastEvent::Cleared { dropped: 0 });
        second.log(ToastEvent::Cleared { dropped: 1 });

        assert_eq!(collector.drain_pending(), 2);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::new();
        let handle = collector.handle();

        for i in 0..(CHANNEL_CAPACITY + 10) {
            handle.log(ToastEvent::Cleared { dropped: i });
        }

        // Only the channel capacity made it through; the rest were
        // dropped silently.
        assert_eq!(collector.drain_pending(), CHANNEL_CAPACITY);
    }

    #[test]
    fn report_snapshots_buffered_events() {
        let mut collector = DiagnosticsCollector::new();
        let handle = collector.handle();
        handle.log(ToastEvent::Queued {
            source: "x".into(),
            depth: 1,
        });
        collector.drain_pending();

        let report = collector.report();
        assert_eq!(report.events.len(), 1);
        assert!(!report.generated_at.is_empty());
    }

    #[test]
    fn clear_discards_buffered_events() {
        let mut collector = DiagnosticsCollector::new();
        let handle = collector.handle();
        handle.log(ToastEvent::Cleared { dropped: 0 });
        collector.drain_pending();

        collector.clear();
        assert!(collector.is_empty());
    }
}
