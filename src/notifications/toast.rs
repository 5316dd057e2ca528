// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the engine's render data.
//!
//! The widget is stateless: everything it needs for one frame comes from
//! a [`RenderData`] snapshot. Motion follows the [`layout`] contract:
//! the card rises with a smoothstep ease and the countdown bar shrinks
//! with the remaining-time ratio.

use super::engine::RenderData;
use super::layout;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card from a frame snapshot.
    pub fn view<'a, Message: 'a>(data: &RenderData) -> Element<'a, Message> {
        let message = text(data.message.clone())
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            })
            .align_x(alignment::Horizontal::Center);

        let bar_color = data.bar_color;
        let bar = Container::new(text(""))
            .width(Length::Fixed(layout::bar_width(
                sizing::TOAST_WIDTH,
                data.time_ratio,
            )))
            .height(Length::Fixed(sizing::TOAST_BAR_HEIGHT))
            .style(move |_theme: &Theme| bar_style(bar_color));

        // Layout: centered message above the countdown bar along the
        // card's bottom edge.
        let content = Column::new()
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .align_x(alignment::Horizontal::Center),
            )
            .push(bar);

        let background = data.background_color;
        let accent = data.bar_color;
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .style(move |_theme: &Theme| card_style(background, accent))
            .into()
    }

    /// Renders the bottom-center overlay, or an empty element when there
    /// is nothing to draw this frame.
    pub fn overlay<'a, Message: 'a>(data: Option<&RenderData>) -> Element<'a, Message> {
        let Some(data) = data else {
            // Takes no space while hidden.
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        // The card travels from flush against the bottom edge up to its
        // resting margin as the slide progresses.
        let rise = layout::slide_y(data.progress, 0.0, sizing::TOAST_MARGIN);

        Container::new(Toast::view(data))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(Padding {
                top: 0.0,
                right: 0.0,
                bottom: rise,
                left: 0.0,
            })
            .into()
    }
}

/// Style for the toast card: request backdrop, accent border.
fn card_style(background: Color, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Style for the countdown bar: solid accent fill, square corners.
fn bar_style(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::NONE.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_style_uses_request_colors() {
        let style = card_style(palette::TOAST_BACKGROUND, palette::SUCCESS_500);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::TOAST_BACKGROUND))
        );
    }

    #[test]
    fn bar_style_fills_with_accent() {
        let style = bar_style(palette::ERROR_500);
        assert_eq!(style.background, Some(Background::Color(palette::ERROR_500)));
    }
}
