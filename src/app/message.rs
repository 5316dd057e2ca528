// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo host.

use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic frame tick driving the engine.
    Tick(Instant),
    /// Repeated status report under one source id (coalescing path).
    ReportProgress,
    /// One-shot success toast.
    SaveCompleted,
    /// One-shot error toast.
    SaveFailed,
    /// First press arms the confirmation countdown; a second press
    /// within the window confirms.
    SkipPressed,
    /// Hard reset, as on a scene transition.
    ClearAll,
    /// Simulated host pause signal.
    TogglePause,
    /// Simulated exclusive full-screen UI.
    ToggleFullScreen,
}

/// Startup flags parsed in `main`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional override for the settings file location.
    pub config_path: Option<PathBuf>,
}
