// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast notification engine.
//!
//! Feature code reports short-lived status through one shared display
//! slot. Requests are keyed by a caller-chosen source id; the engine
//! decides whether a request coalesces into the toast already on screen,
//! waits in the FIFO queue, or (for live countdowns) preempts outright.
//! The host loop drives everything by calling [`Engine::tick`] once per
//! frame and reading [`Engine::render_data`] when it wants to draw.
//!
//! # Components
//!
//! - [`request`] - `Request` and `LiveRequest` value types
//! - [`engine`] - the `Engine` state machine and queue
//! - [`layout`] - easing and geometry shared with the presentation layer
//! - [`toast`] - Iced widget rendering the engine's render data
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::notifications::{Engine, Request};
//!
//! let mut engine = Engine::new();
//! engine.show(Request::success("saver", "Saved!"));
//!
//! // Once per frame:
//! engine.tick(delta_seconds, host.is_paused());
//! if let Some(data) = engine.render_data_for(&host) {
//!     // hand `data` to the presentation layer
//! }
//! ```

pub mod engine;
pub mod layout;
pub mod request;
pub mod toast;

pub use engine::{Engine, Phase, RenderData};
pub use request::{LiveRequest, Request, DEFAULT_CONFIRM_TIMEOUT, DEFAULT_DURATION};
pub use toast::Toast;
