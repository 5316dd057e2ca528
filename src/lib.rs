// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a single-slot, queue-backed toast notification engine.
//!
//! Many independent callers report short-lived status (success, error,
//! live countdowns) through one shared display slot; the engine decides
//! whether each request coalesces into the current toast, waits in the
//! queue, or preempts. A host loop drives it with one `tick` per frame
//! and reads back render data when something is visible.

pub mod app;
pub mod config;
pub mod confirm;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod notifications;
pub mod ui;
