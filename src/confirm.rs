// SPDX-License-Identifier: MPL-2.0
//! Two-press confirmation gate.
//!
//! Destructive actions ask the user to press again within a short
//! window. The gate owns the pending flag and countdown; the caller
//! pairs it with a live countdown toast (`show_confirm`) and hides the
//! toast when the window closes, one way or the other.

/// Tick-driven state for a "press again within N seconds" flow.
#[derive(Debug, Clone)]
pub struct ConfirmGate {
    timeout: f32,
    remaining: f32,
    pending: bool,
}

impl ConfirmGate {
    /// Creates a gate with the given confirmation window in seconds.
    #[must_use]
    pub fn new(timeout: f32) -> Self {
        Self {
            timeout,
            remaining: 0.0,
            pending: false,
        }
    }

    /// Opens (or re-opens) the confirmation window.
    pub fn arm(&mut self) {
        self.pending = true;
        self.remaining = self.timeout;
    }

    /// Consumes a pending confirmation. Returns `true` exactly when a
    /// window was open, i.e. the second press arrived in time.
    pub fn confirm(&mut self) -> bool {
        let confirmed = self.pending;
        self.pending = false;
        confirmed
    }

    /// Closes the window without confirming.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Advances the countdown. Returns `true` in the tick where an open
    /// window expires, so the caller can retract its toast.
    pub fn tick(&mut self, delta_seconds: f32) -> bool {
        if !self.pending {
            return false;
        }
        self.remaining -= delta_seconds;
        if self.remaining <= 0.0 {
            self.pending = false;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn timeout(&self) -> f32 {
        self.timeout
    }
}
