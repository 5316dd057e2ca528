// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo host.

use super::{App, Message};
use crate::notifications::Toast;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text, Column, Container, Row};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let title = text("iced_toast demo").size(typography::TITLE_MD);

    let request_buttons = Row::new()
        .spacing(spacing::XS)
        .push(control("Report progress", Message::ReportProgress))
        .push(control("Save", Message::SaveCompleted))
        .push(control("Fail", Message::SaveFailed))
        .push(control("Skip level", Message::SkipPressed))
        .push(control("Clear all", Message::ClearAll));

    let host_buttons = Row::new()
        .spacing(spacing::XS)
        .push(control(
            if app.host.paused {
                "Resume host"
            } else {
                "Pause host"
            },
            Message::TogglePause,
        ))
        .push(control(
            if app.host.full_screen {
                "Close full-screen UI"
            } else {
                "Open full-screen UI"
            },
            Message::ToggleFullScreen,
        ));

    let status = text(format!(
        "phase: {:?} | queued: {} | events: {}",
        app.engine.phase(),
        app.engine.queued_count(),
        app.collector.len(),
    ))
    .size(typography::BODY_SM);

    let controls = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(title)
        .push(request_buttons)
        .push(host_buttons)
        .push(status);

    let render_data = app.engine.render_data_for(&app.host);

    Column::new()
        .push(controls)
        .push(Toast::overlay(render_data.as_ref()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn control(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding(spacing::XS)
        .into()
}
