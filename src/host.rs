// SPDX-License-Identifier: MPL-2.0
//! Host-state boundary.
//!
//! The engine consumes exactly two facts about its host: whether the
//! host is paused, and whether an exclusive full-screen UI currently
//! owns the display. Both suppress rendering; pause additionally freezes
//! the engine (enforced inside [`tick`], not here).
//!
//! [`tick`]: crate::notifications::Engine::tick

/// Read-only view of the host signals the toast engine polls each frame.
pub trait HostState {
    /// Whether the host is paused. While true, callers are expected to
    /// pass `is_paused = true` into `tick` as well.
    fn is_paused(&self) -> bool;

    /// Whether an exclusive full-screen UI owns the display, e.g. a
    /// transition screen. Suppresses toast rendering without touching
    /// timers.
    fn owns_full_screen(&self) -> bool;
}
