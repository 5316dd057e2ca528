// SPDX-License-Identifier: MPL-2.0
//! Demo host application.
//!
//! A small Iced app standing in for the host loop: it owns the engine,
//! drives it from a periodic tick subscription, and exposes buttons that
//! exercise every admission path (coalescing status reports, queued
//! one-shots, a live confirmation countdown, cancellation, hard reset).
//! Two toggles simulate the host's pause and full-screen-ownership
//! signals.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::confirm::ConfirmGate;
use crate::diagnostics::DiagnosticsCollector;
use crate::host::HostState;
use crate::notifications::Engine;
use iced::{Element, Subscription, Task};
use std::time::Instant;

/// Source id for the coalescing status-report button.
const PROGRESS_SOURCE: &str = "progress_report";

/// Source id for the save success/failure buttons.
const SAVE_SOURCE: &str = "autosave";

/// Source id for the two-press skip flow.
const SKIP_SOURCE: &str = "quick_skip";

/// Ceiling on one frame's delta, so a stalled subscription does not
/// expire a toast the instant ticks resume.
const MAX_FRAME_DELTA: f32 = 0.25;

/// Host signals the demo lets the user toggle by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostToggles {
    pub paused: bool,
    pub full_screen: bool,
}

impl HostState for HostToggles {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn owns_full_screen(&self) -> bool {
        self.full_screen
    }
}

/// Root application state: the engine plus everything that drives it.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    collector: DiagnosticsCollector,
    confirm: ConfirmGate,
    config: Config,
    host: HostToggles,
    last_tick: Option<Instant>,
    progress_count: u32,
}

impl App {
    /// Builds the app, loading preferences from the flagged path or the
    /// platform config directory.
    #[must_use]
    pub fn new(flags: Flags) -> Self {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };

        let collector = DiagnosticsCollector::new();
        let mut engine = Engine::new();
        engine.set_animation_speed(config.animation_speed());
        engine.set_diagnostics(collector.handle());

        let confirm = ConfirmGate::new(config.confirm_timeout());

        Self {
            engine,
            collector,
            confirm,
            config,
            host: HostToggles::default(),
            last_tick: None,
            progress_count: 0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Flags::default())
    }
}
