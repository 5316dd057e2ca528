// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Engine`] owns the pending queue, the single display slot, and a
//! three-phase visibility machine (`Hidden -> Showing -> Exiting`) with a
//! continuous animation progress. All mutation happens inside the public
//! request calls and [`Engine::tick`]; the engine is single-threaded by
//! construction and owned by the host loop, not looked up globally.

use std::collections::VecDeque;

use super::request::{LiveRequest, Request, DEFAULT_CONFIRM_TIMEOUT};
use crate::diagnostics::{DiagnosticsHandle, ToastEvent};
use crate::host::HostState;
use iced::Color;

/// Base animation rate in progress units per second. Exit runs at this
/// rate; entry runs at twice it, so toasts appear briskly and fade out
/// more gently.
pub const DEFAULT_ANIMATION_SPEED: f32 = 4.0;

const ENTRY_RATE_FACTOR: f32 = 2.0;

/// Visibility phase of the display slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing on screen, nothing animating. The only phase in which a
    /// queued request is promoted immediately on arrival.
    #[default]
    Hidden,
    /// A toast is on screen (or sliding in) and its timer is counting.
    Showing,
    /// The timer expired or the toast was cancelled; the slide-out is
    /// playing. The slot empties when the animation reaches zero.
    Exiting,
}

/// Snapshot of everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderData {
    pub message: String,
    pub bar_color: Color,
    pub background_color: Color,
    /// Slide animation progress in `[0, 1]`.
    pub progress: f32,
    /// Remaining fraction of the display duration, clamped to `[0, 1]`.
    pub time_ratio: f32,
}

/// Single-slot, queue-backed toast engine.
///
/// At most one toast is current; everything else waits in FIFO order.
/// Repeated status reports under one source id coalesce into the current
/// display instead of queueing, and live countdowns preempt outright.
#[derive(Debug)]
pub struct Engine {
    queue: VecDeque<Request>,
    current: Option<Request>,
    /// Source id of whichever request most recently became current.
    /// Outlives the request itself, until overwritten or cleared.
    last_source: Option<String>,
    live: Option<LiveRequest>,
    phase: Phase,
    timer: f32,
    max_time: f32,
    animation_progress: f32,
    animation_speed: f32,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an empty engine with the default animation speed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            current: None,
            last_source: None,
            live: None,
            phase: Phase::Hidden,
            timer: 0.0,
            max_time: 0.0,
            animation_progress: 0.0,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            diagnostics: None,
        }
    }

    /// Overrides the base animation rate (exit rate; entry is twice it).
    /// Values are floored so the fade can always finish.
    pub fn set_animation_speed(&mut self, speed: f32) {
        self.animation_speed = speed.max(0.1);
    }

    /// Sets the diagnostics handle used to record lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    // ── Admission ────────────────────────────────────────────────────

    /// Requests display of a toast.
    ///
    /// If the current toast carries the same source id that most recently
    /// became current and no live request is active for that id, the
    /// request replaces the current content in place: timer and bar reset,
    /// but the slide-in does not replay. A feature repeatedly reporting
    /// status under one id therefore refreshes its toast without
    /// flickering.
    ///
    /// Otherwise the request joins the queue tail (superseding any live
    /// request registered under the same id) and is promoted as soon as
    /// the slot is free.
    pub fn show(&mut self, request: Request) {
        let same_source = self.current.is_some()
            && self.last_source.as_deref() == Some(request.source_id());
        let live_holds_source = self
            .live
            .as_ref()
            .is_some_and(|live| live.source_id() == request.source_id());

        if same_source && !live_holds_source {
            // A live request for another source cannot be valid here:
            // its source is no longer current.
            self.live = None;
            self.timer = request.duration();
            self.max_time = request.duration();
            self.phase = Phase::Showing;
            self.animation_progress = 1.0;
            self.log(ToastEvent::Coalesced {
                source: request.source_id().to_string(),
            });
            self.current = Some(request);
        } else {
            if live_holds_source {
                self.live = None;
            }
            self.log(ToastEvent::Queued {
                source: request.source_id().to_string(),
                depth: self.queue.len() + 1,
            });
            self.queue.push_back(request);
            if self.phase == Phase::Hidden {
                self.show_next();
            }
        }
    }

    /// Convenience: success toast (green accent).
    pub fn show_success(&mut self, source_id: &str, message: impl Into<String>, duration: f32) {
        self.show(Request::success(source_id, message).with_duration(duration));
    }

    /// Convenience: error toast (red accent).
    pub fn show_error(&mut self, source_id: &str, message: impl Into<String>, duration: f32) {
        self.show(Request::error(source_id, message).with_duration(duration));
    }

    /// Convenience: info toast (blue accent).
    pub fn show_info(&mut self, source_id: &str, message: impl Into<String>, duration: f32) {
        self.show(Request::info(source_id, message).with_duration(duration));
    }

    /// Convenience: confirmation countdown, e.g. `"Press again to skip (4.2s)"`.
    pub fn show_confirm(&mut self, source_id: &str, message: impl Into<String>, timeout: f32) {
        let timeout = if timeout > 0.0 {
            timeout
        } else {
            DEFAULT_CONFIRM_TIMEOUT
        };
        self.show_live(LiveRequest::countdown(source_id, message, timeout));
    }

    /// Displays a live toast, bypassing the queue entirely.
    ///
    /// Whatever is currently showing is discarded (not re-queued) and the
    /// slide-in replays from zero: an active countdown must visibly
    /// (re)start each time it is invoked, even when a toast with the same
    /// source id is already on screen.
    pub fn show_live(&mut self, live: LiveRequest) {
        let request = Request::new(live.source_id(), live.generate(live.duration()))
            .with_duration(live.duration())
            .with_bar_color(live.bar_color())
            .with_background(live.background_color());

        self.last_source = Some(live.source_id().to_string());
        self.timer = live.duration();
        self.max_time = live.duration();
        self.phase = Phase::Showing;
        self.animation_progress = 0.0;
        self.log(ToastEvent::Preempted {
            source: live.source_id().to_string(),
        });
        self.current = Some(request);
        self.live = Some(live);
    }

    // ── Cancellation ─────────────────────────────────────────────────

    /// Retracts everything a source has requested.
    ///
    /// A matching current toast starts its slide-out (it does not snap
    /// away); a matching live request is invalidated; matching queued
    /// entries are removed so nothing stale surfaces later. Unknown
    /// source ids are a no-op.
    pub fn hide(&mut self, source_id: &str) {
        if self
            .current
            .as_ref()
            .is_some_and(|current| current.source_id() == source_id)
        {
            self.phase = Phase::Exiting;
            self.log(ToastEvent::Cancelled {
                source: source_id.to_string(),
            });
        }
        if self
            .live
            .as_ref()
            .is_some_and(|live| live.source_id() == source_id)
        {
            self.live = None;
        }
        self.queue.retain(|request| request.source_id() != source_id);
    }

    /// Hard reset for scene/context transitions: empties the queue,
    /// clears the slot and the remembered source, discards any live
    /// request, and returns to `Hidden` with no animation.
    pub fn clear_all(&mut self) {
        let dropped = self.queue.len() + usize::from(self.current.is_some());
        self.queue.clear();
        self.current = None;
        self.last_source = None;
        self.live = None;
        self.phase = Phase::Hidden;
        self.animation_progress = 0.0;
        self.timer = 0.0;
        self.max_time = 0.0;
        self.log(ToastEvent::Cleared { dropped });
    }

    // ── Per-tick update ──────────────────────────────────────────────

    /// Advances timers, animation, and live text by `delta_seconds`.
    ///
    /// When the host is paused the entire update is skipped, so nothing
    /// expires or animates while the host is frozen. Otherwise the order
    /// is fixed: timer, then animation, then live regeneration. A toast
    /// expiring this frame still receives one final text refresh with the
    /// remaining time clamped to zero before its slide-out begins.
    pub fn tick(&mut self, delta_seconds: f32, is_paused: bool) {
        if is_paused {
            return;
        }
        let just_expired = self.advance_timer(delta_seconds);
        self.advance_animation(delta_seconds);
        self.regenerate_live(just_expired);
    }

    fn advance_timer(&mut self, delta: f32) -> bool {
        if self.phase != Phase::Showing || self.current.is_none() {
            return false;
        }
        self.timer -= delta;
        if self.timer <= 0.0 {
            self.phase = Phase::Exiting;
            if let Some(current) = &self.current {
                let source = current.source_id().to_string();
                self.log(ToastEvent::Expired { source });
            }
            return true;
        }
        false
    }

    fn advance_animation(&mut self, delta: f32) {
        let visible = self.phase == Phase::Showing;
        if visible && self.animation_progress < 1.0 {
            self.animation_progress = (self.animation_progress
                + delta * self.animation_speed * ENTRY_RATE_FACTOR)
                .min(1.0);
        } else if !visible && self.animation_progress > 0.0 {
            self.animation_progress =
                (self.animation_progress - delta * self.animation_speed).max(0.0);
            if self.animation_progress <= 0.0 {
                self.finish_exit();
            }
        } else if self.phase == Phase::Exiting {
            // Cancelled or expired before the slide-in ever started
            // (zero-duration request, or hide() in the promotion frame):
            // there is nothing to animate out.
            self.finish_exit();
        }
    }

    fn finish_exit(&mut self) {
        self.phase = Phase::Hidden;
        self.animation_progress = 0.0;
        if let Some(request) = self.current.take() {
            self.log(ToastEvent::Finished {
                source: request.source_id().to_string(),
            });
        }
        // The sole path by which the queue drains.
        self.show_next();
    }

    fn regenerate_live(&mut self, just_expired: bool) {
        if self.phase != Phase::Showing && !just_expired {
            return;
        }
        let Some(live) = self.live.as_ref() else {
            return;
        };
        let Some(current) = self.current.as_mut() else {
            return;
        };
        if current.source_id() == live.source_id() {
            current.set_message(live.generate(self.timer.max(0.0)));
        }
    }

    /// Promotes the queue head into the display slot.
    fn show_next(&mut self) {
        let Some(request) = self.queue.pop_front() else {
            return;
        };
        self.last_source = Some(request.source_id().to_string());
        self.timer = request.duration();
        self.max_time = request.duration();
        self.phase = Phase::Showing;
        self.animation_progress = 0.0;
        // A live request must never outlive its own toast's tenure.
        if self
            .live
            .as_ref()
            .is_some_and(|live| live.source_id() != request.source_id())
        {
            self.live = None;
        }
        self.log(ToastEvent::Shown {
            source: request.source_id().to_string(),
        });
        self.current = Some(request);
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Returns the data needed to draw this frame, or `None` when
    /// rendering is suppressed: nothing current, or the host is paused,
    /// or an exclusive full-screen UI owns the display.
    ///
    /// This is a pure read; a suppressed frame still ticks normally.
    #[must_use]
    pub fn render_data(&self, is_paused: bool, owns_full_screen: bool) -> Option<RenderData> {
        if self.phase == Phase::Hidden || is_paused || owns_full_screen {
            return None;
        }
        let current = self.current.as_ref()?;
        Some(RenderData {
            message: current.message().to_string(),
            bar_color: current.bar_color(),
            background_color: current.background_color(),
            progress: self.animation_progress,
            time_ratio: if self.max_time > 0.0 {
                (self.timer / self.max_time).clamp(0.0, 1.0)
            } else {
                0.0
            },
        })
    }

    /// [`Engine::render_data`] with the two gates read from a host.
    #[must_use]
    pub fn render_data_for(&self, host: &impl HostState) -> Option<RenderData> {
        self.render_data(host.is_paused(), host.owns_full_screen())
    }

    // ── Queries ──────────────────────────────────────────────────────

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn animation_progress(&self) -> f32 {
        self.animation_progress
    }

    /// Remaining display time of the current toast, in seconds.
    #[must_use]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn current_source(&self) -> Option<&str> {
        self.current.as_ref().map(Request::source_id)
    }

    /// Source id of whichever request most recently became current.
    #[must_use]
    pub fn last_source(&self) -> Option<&str> {
        self.last_source.as_deref()
    }

    #[must_use]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(Request::message)
    }

    #[must_use]
    pub fn has_live(&self) -> bool {
        self.live.is_some()
    }

    /// Whether the engine still needs ticks: something is on screen,
    /// animating out, or waiting in the queue.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Hidden || !self.queue.is_empty()
    }

    fn log(&self, event: ToastEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}
