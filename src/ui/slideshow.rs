// SPDX-License-Identifier: MPL-2.0
//! Image slideshow component with circular navigation.
//!
//! The slideshow owns a current index over an ordered image set and a
//! direction hint for the last transition. Navigation wraps at both ends.
//! The image set itself is owned by the caller and passed to [`view`]; the
//! state deliberately holds no copy of it, so the same state type serves both
//! the inline card preview and the gallery overlay.

use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, container as container_styles, overlay};
use iced::widget::{button, column, container, image, row, svg, text, Space};
use iced::{Alignment, Color, ContentFit, Element, Fill, Length};
use std::path::PathBuf;

/// Direction of the most recent transition. A rendering hint for slide
/// animations; it never affects which image is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

/// Slideshow navigation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    current: usize,
    direction: Direction,
}

/// Messages emitted by the slideshow controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    JumpTo(usize),
}

impl State {
    /// Creates a slideshow positioned on the first image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the currently shown image.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Direction hint of the last transition.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Applies a navigation message against an image set of length `len`.
    pub fn update(&mut self, message: Message, len: usize) {
        match message {
            Message::Previous => self.previous(len),
            Message::Next => self.next(len),
            Message::JumpTo(index) => self.jump_to(index, len),
        }
    }

    /// Steps back one image, wrapping from the first to the last.
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.direction = Direction::Backward;
        self.current = if self.current == 0 {
            len - 1
        } else {
            self.current - 1
        };
    }

    /// Steps forward one image, wrapping from the last to the first.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.direction = Direction::Forward;
        self.current = if self.current == len - 1 {
            0
        } else {
            self.current + 1
        };
    }

    /// Jumps directly to `index`. The direction hint points toward the
    /// target: forward when jumping ahead, backward otherwise.
    pub fn jump_to(&mut self, index: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index.min(len - 1);
    }
}

/// Inputs needed to render a slideshow.
pub struct ViewContext<'a> {
    /// Ordered image set. May be empty, in which case nothing renders.
    pub images: &'a [PathBuf],
    /// Accessible label shown in the position counter.
    pub alt: &'a str,
    /// Height of the slideshow area.
    pub height: f32,
    /// Fill color behind letterboxed images.
    pub background: Color,
}

/// Renders the slideshow. With an empty image set this renders nothing; with
/// a single image it renders the image without controls or indicators.
pub fn view<'a>(state: &State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.images.is_empty() {
        return Space::new().width(0.0).height(0.0).into();
    }

    let len = ctx.images.len();
    let index = state.current().min(len - 1);

    let photo = container(
        image(image::Handle::from_path(&ctx.images[index]))
            .content_fit(ContentFit::Contain)
            .width(Fill)
            .height(Fill),
    )
    .width(Fill)
    .height(Length::Fixed(ctx.height))
    .style(container_styles::preview(ctx.background));

    if len == 1 {
        return photo.into();
    }

    let left_arrow = button(
        svg(icons::handle(icons::CHEVRON_LEFT))
            .width(sizing::ICON_SM)
            .height(sizing::ICON_SM)
            .style(overlay::icon(Color::WHITE)),
    )
    .padding(spacing::XXS)
    .style(button_styles::overlay(
        Color::WHITE,
        opacity::OVERLAY_BACKDROP,
        opacity::OVERLAY_STRONG,
    ))
    .on_press(Message::Previous);

    let right_arrow = button(
        svg(icons::handle(icons::CHEVRON_RIGHT))
            .width(sizing::ICON_SM)
            .height(sizing::ICON_SM)
            .style(overlay::icon(Color::WHITE)),
    )
    .padding(spacing::XXS)
    .style(button_styles::overlay(
        Color::WHITE,
        opacity::OVERLAY_BACKDROP,
        opacity::OVERLAY_STRONG,
    ))
    .on_press(Message::Next);

    let nav = row![
        container(left_arrow)
            .height(Length::Fixed(ctx.height))
            .align_y(Alignment::Center)
            .padding(spacing::XS),
        Space::new().width(Fill),
        container(right_arrow)
            .height(Length::Fixed(ctx.height))
            .align_y(Alignment::Center)
            .padding(spacing::XS),
    ]
    .width(Fill)
    .height(Length::Fixed(ctx.height));

    let dots = row((0..len).map(|i| {
        let active = i == index;
        button(
            Space::new()
                .width(if active {
                    sizing::INDICATOR_ACTIVE_WIDTH
                } else {
                    sizing::INDICATOR
                })
                .height(sizing::INDICATOR),
        )
        .padding(0)
        .style(button_styles::indicator(active))
        .on_press(Message::JumpTo(i))
        .into()
    }))
    .spacing(spacing::XXS)
    .align_y(Alignment::Center);

    let indicators = column![
        Space::new().height(Fill),
        container(dots).width(Fill).align_x(Alignment::Center),
    ]
    .width(Fill)
    .height(Length::Fixed(ctx.height))
    .padding(spacing::XS);

    let counter = container(
        text(format!("{} · {} / {}", ctx.alt, index + 1, len)).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(overlay::counter(radius::FULL));

    let counter_layer = container(counter).padding(spacing::XS);

    iced::widget::stack![photo, nav, indicators, counter_layer]
        .width(Fill)
        .height(Length::Fixed(ctx.height))
        .into()
}
