// SPDX-License-Identifier: MPL-2.0
//! Update logic for the demo host.

use super::{App, Message, MAX_FRAME_DELTA, PROGRESS_SOURCE, SAVE_SOURCE, SKIP_SOURCE};
use crate::host::HostState;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Tick(now) => {
            let delta = app
                .last_tick
                .map(|previous| now.duration_since(previous).as_secs_f32())
                .unwrap_or(0.0)
                .min(MAX_FRAME_DELTA);
            app.last_tick = Some(now);

            let paused = app.host.is_paused();
            app.engine.tick(delta, paused);

            // The confirmation window freezes with the host, like every
            // other timer.
            if !paused && app.confirm.tick(delta) {
                app.engine.hide(SKIP_SOURCE);
            }

            app.collector.drain_pending();
        }
        Message::ReportProgress => {
            app.progress_count += 1;
            let text = format!("Progress saved ({}x)", app.progress_count);
            let duration = app.config.duration();
            app.engine.show_info(PROGRESS_SOURCE, text, duration);
        }
        Message::SaveCompleted => {
            app.engine
                .show_success(SAVE_SOURCE, "Saved!", app.config.duration());
        }
        Message::SaveFailed => {
            app.engine.show_error(SAVE_SOURCE, "Save failed", 2.5);
        }
        Message::SkipPressed => {
            if app.confirm.confirm() {
                app.engine.hide(SKIP_SOURCE);
                app.engine
                    .show_success(SKIP_SOURCE, "Level skipped!", app.config.duration());
            } else {
                app.confirm.arm();
                app.engine.show_confirm(
                    SKIP_SOURCE,
                    "Press Skip again to confirm",
                    app.confirm.timeout(),
                );
            }
        }
        Message::ClearAll => {
            app.engine.clear_all();
            app.confirm.cancel();
        }
        Message::TogglePause => {
            app.host.paused = !app.host.paused;
        }
        Message::ToggleFullScreen => {
            app.host.full_screen = !app.host.full_screen;
        }
    }
    Task::none()
}
