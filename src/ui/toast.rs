// SPDX-License-Identifier: MPL-2.0
//! Toast widget rendering the notification stack.
//!
//! The view reads the manager's document: each notification element becomes
//! a card, its classes decide how it is drawn. Clicks are reported back as
//! [`Message::Clicked`] with the element that was hit, so the manager routes
//! them exactly like clicks on the document.

use crate::notifications::render::{INBOUND_CLASS, NOT_DISMISSABLE_CLASS, NO_HOVER_CLASS};
use crate::notifications::{Action, Document, Manager, Message, Parts};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single notification element.
    pub fn view(doc: &Document, parts: Parts, accent_color: Color) -> Element<'_, Message> {
        let root = parts.root;
        let alpha = if doc.has_class(root, INBOUND_CLASS) {
            opacity::OPAQUE
        } else {
            opacity::ENTERING
        };

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
        let title = doc.text(parts.title);
        if !title.is_empty() {
            body = body.push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .style(move |theme: &Theme| faded_text(theme, alpha)),
            );
        }
        let message = doc.text(parts.text);
        if !message.is_empty() {
            body = body.push(
                Text::new(message)
                    .size(typography::BODY)
                    .style(move |theme: &Theme| faded_text(theme, alpha)),
            );
        }

        // Layout: [title / text] [close]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(body);

        if !doc.has_class(root, NOT_DISMISSABLE_CLASS) {
            // Without hover the close control must be easy to hit.
            let hit_size = if doc.has_class(root, NO_HOVER_CLASS) {
                sizing::CLOSE_HIT_SIZE
            } else {
                sizing::ICON_MD
            };
            let close = button(Text::new("×").size(typography::BODY_LG))
                .on_press(Message::Clicked(parts.close))
                .width(Length::Fixed(hit_size))
                .height(Length::Fixed(hit_size))
                .padding(spacing::XXS)
                .style(close_button_style);
            content = content.push(close);
        }

        let card = Container::new(content)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha));

        mouse_area(card).on_press(Message::Clicked(root)).into()
    }

    /// Renders every attached notification in document order.
    ///
    /// On wide viewports the stack sits in the top-right corner with a fixed
    /// width; otherwise it spans the top of the window.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let doc = manager.document();
        let toasts: Vec<Element<'_, Message>> = manager
            .stacked()
            .map(|(id, parts)| {
                let accent = accent_color(manager.options(&id).map(|options| &options.action));
                Self::view(doc, parts, accent)
            })
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (width, align_x) = if manager.is_wide() {
            (
                Length::Fixed(sizing::TOAST_WIDTH),
                alignment::Horizontal::Right,
            )
        } else {
            (Length::Fill, alignment::Horizontal::Center)
        };

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .width(width);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }
}

/// Accent border: highlighted when clicking the toast does something.
fn accent_color(action: Option<&Action>) -> Color {
    match action {
        Some(action) if !action.is_none() => palette::PRIMARY_500,
        _ => palette::GRAY_400,
    }
}

fn faded_text(theme: &Theme, alpha: f32) -> text::Style {
    let color = theme.palette().text;
    text::Style {
        color: Some(Color {
            a: color.a * alpha,
            ..color
        }),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE * alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: accent_color.a * alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let highlight = |a: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => highlight(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => highlight(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
