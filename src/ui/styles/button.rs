// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::BLACK, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for slideshow navigation and overlay close buttons: a translucent
/// dark circle that darkens on hover.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for outbound link badges (pill-shaped, filled).
pub fn badge(
    background: Color,
    text_color: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: opacity::OVERLAY_HOVER,
                ..background
            },
            _ => background,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for slideshow indicator dots. The active dot is solid white, the
/// rest are translucent.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = if active {
            opacity::OPAQUE
        } else if matches!(status, button::Status::Hovered) {
            opacity::INDICATOR_HOVER
        } else {
            opacity::OVERLAY_BACKDROP
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..Color::WHITE
            })),
            text_color: Color::WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
