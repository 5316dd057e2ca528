// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for toast lifecycle decisions.
//!
//! The engine's admission rules (coalesce vs. queue vs. preempt) are the
//! one place where callers get surprised, so every decision is recorded
//! as an event. Events flow through a cheap-to-clone [`DiagnosticsHandle`]
//! into a bounded channel; the owning [`DiagnosticsCollector`] drains
//! them into a ring buffer and can produce a serializable report.
//!
//! Sends never block: when the channel is full the event is dropped
//! rather than stalling the frame.

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticReport, ToastEvent};
