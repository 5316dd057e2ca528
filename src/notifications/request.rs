// SPDX-License-Identifier: MPL-2.0
//! Request value types for the toast engine.
//!
//! A [`Request`] is a plain, fire-and-forget message; a [`LiveRequest`]
//! carries a generator that rewrites the message every tick from the
//! remaining display time (countdown confirmations and similar flows).

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Default display duration for plain requests, in seconds.
pub const DEFAULT_DURATION: f32 = 1.2;

/// Default countdown window for confirmation toasts, in seconds.
pub const DEFAULT_CONFIRM_TIMEOUT: f32 = 5.0;

/// A request to display one toast.
///
/// The source id identifies the caller for coalescing and cancellation;
/// it is never displayed.
#[derive(Debug, Clone)]
pub struct Request {
    message: String,
    duration: f32,
    bar_color: Color,
    background_color: Color,
    source_id: String,
}

impl Request {
    /// Creates a request with the info accent and default duration.
    pub fn new(source_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: DEFAULT_DURATION,
            bar_color: palette::INFO_500,
            background_color: palette::TOAST_BACKGROUND,
            source_id: source_id.into(),
        }
    }

    /// Creates a success request (green accent).
    pub fn success(source_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(source_id, message).with_bar_color(palette::SUCCESS_500)
    }

    /// Creates an error request (red accent).
    pub fn error(source_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(source_id, message).with_bar_color(palette::ERROR_500)
    }

    /// Creates an info request (blue accent).
    pub fn info(source_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(source_id, message)
    }

    /// Sets the display duration in seconds.
    ///
    /// Non-positive durations are accepted; such a request is treated as
    /// already expired and fades out on the next unpaused tick.
    #[must_use]
    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    /// Sets the countdown bar color.
    #[must_use]
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    /// Sets the backdrop color.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[must_use]
    pub fn bar_color(&self) -> Color {
        self.bar_color
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Rewrites the message in place. Live regeneration uses this every
    /// tick while the owning live request is active.
    pub(crate) fn set_message(&mut self, message: String) {
        self.message = message;
    }
}

/// A live request whose text is regenerated every tick from the time
/// remaining on screen.
///
/// Unlike a plain [`Request`], a live request never queues: it preempts
/// whatever is showing and always replays the slide-in animation, so an
/// active countdown visibly (re)starts each time it is invoked.
pub struct LiveRequest {
    source_id: String,
    duration: f32,
    bar_color: Color,
    background_color: Color,
    generator: Box<dyn Fn(f32) -> String>,
}

impl LiveRequest {
    /// Creates a live request. The generator receives the remaining time
    /// in seconds (clamped to zero) and returns the text to display.
    pub fn new(
        source_id: impl Into<String>,
        duration: f32,
        generator: impl Fn(f32) -> String + 'static,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            duration,
            bar_color: palette::INFO_500,
            background_color: palette::TOAST_BACKGROUND,
            generator: Box::new(generator),
        }
    }

    /// Creates a confirmation countdown: the fixed message followed by
    /// the remaining time, e.g. `"Press again to skip (4.2s)"`.
    pub fn countdown(
        source_id: impl Into<String>,
        message: impl Into<String>,
        timeout: f32,
    ) -> Self {
        let message = message.into();
        Self::new(source_id, timeout, move |remaining| {
            format!("{} ({:.1}s)", message, remaining.max(0.0))
        })
    }

    /// Sets the countdown bar color.
    #[must_use]
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    /// Sets the backdrop color.
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[must_use]
    pub fn bar_color(&self) -> Color {
        self.bar_color
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Runs the generator for the given remaining time.
    #[must_use]
    pub fn generate(&self, remaining_seconds: f32) -> String {
        (self.generator)(remaining_seconds)
    }
}

impl fmt::Debug for LiveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveRequest")
            .field("source_id", &self.source_id)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}
