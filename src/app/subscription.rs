// SPDX-License-Identifier: MPL-2.0
//! Tick subscription for the demo host.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval while the engine needs driving.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Ticks only while there is work: something showing or queued, or a
/// confirmation window counting down. Idle costs nothing.
pub fn subscription(app: &App) -> Subscription<Message> {
    if app.engine.is_active() || app.confirm.is_pending() {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
