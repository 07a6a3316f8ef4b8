// SPDX-License-Identifier: MPL-2.0
//! Project card component.
//!
//! A card renders a project summary (title, dates, markdown description, tag
//! badges, outbound link badges) above a preview slot. The preview slot shows,
//! in precedence order, an inline slideshow over the project's image set, a
//! video placeholder, or a single image.
//!
//! Gallery-enabled projects make the whole card pressable: a press opens a
//! full-screen overlay holding a second, independent slideshow over the same
//! image set, the full description, and the tags. Opening acquires the page
//! scroll lock; the guard lives inside the `Open` state, so every exit path
//! (backdrop, close button, Escape, or the card being dropped) releases it.

use crate::markdown;
use crate::portfolio::{Preview, Project};
use crate::scroll_lock::{ScrollGuard, ScrollLock};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::slideshow;
use crate::ui::styles::{button as button_styles, container as container_styles, overlay};
use crate::ui::theming::ColorScheme;
use iced::font::Weight;
use iced::mouse::Interaction;
use iced::widget::{
    button, column, container, image, mouse_area, opaque, row, scrollable, svg, text, Column, Space,
};
use iced::{Alignment, Color, ContentFit, Element, Fill, Font, Length};
use std::path::Path;

/// Gallery overlay state machine: `Closed` or `Open`. The open state owns the
/// overlay's slideshow and the scroll-lock guard.
#[derive(Debug)]
enum Gallery {
    Closed,
    Open {
        slideshow: slideshow::State,
        _scroll: ScrollGuard,
    },
}

/// Per-card state.
#[derive(Debug)]
pub struct State {
    inline: slideshow::State,
    gallery: Gallery,
    description: markdown::Document,
}

impl State {
    /// Creates card state for a project, parsing its description once.
    #[must_use]
    pub fn new(project: &Project) -> Self {
        Self {
            inline: slideshow::State::new(),
            gallery: Gallery::Closed,
            description: markdown::parse(&project.description),
        }
    }

    /// Whether the gallery overlay is currently open.
    #[must_use]
    pub fn is_gallery_open(&self) -> bool {
        matches!(self.gallery, Gallery::Open { .. })
    }

    /// The overlay's slideshow state, while open.
    #[must_use]
    pub fn overlay_slideshow(&self) -> Option<&slideshow::State> {
        match &self.gallery {
            Gallery::Open { slideshow, .. } => Some(slideshow),
            Gallery::Closed => None,
        }
    }

    /// The inline preview's slideshow state.
    #[must_use]
    pub fn inline_slideshow(&self) -> &slideshow::State {
        &self.inline
    }

    fn close_gallery(&mut self) -> Event {
        if self.is_gallery_open() {
            self.gallery = Gallery::Closed;
            Event::GalleryClosed
        } else {
            Event::None
        }
    }
}

/// Messages emitted by a card's widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Inline preview slideshow navigation.
    Inline(slideshow::Message),
    /// Overlay slideshow navigation.
    Overlay(slideshow::Message),
    /// Press on the card body (opens the gallery when eligible).
    Pressed,
    /// Press on a non-gallery preview that carries an `href`.
    PreviewPressed,
    /// Press on an outbound link badge or a description link.
    LinkPressed(String),
    /// Backdrop press, close button, or Escape.
    CloseRequested,
    /// Press inside the overlay's content panel. Swallowed so it never
    /// reaches the backdrop's close handler.
    PanelPressed,
}

/// Events propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    GalleryOpened,
    GalleryClosed,
    /// Copy an outbound URL to the clipboard (a desktop viewer has nowhere
    /// to navigate to).
    CopyUrl(String),
}

/// Processes a card message and returns the event for the application.
pub fn update(
    state: &mut State,
    project: &Project,
    message: Message,
    scroll_lock: &ScrollLock,
) -> Event {
    match message {
        Message::Inline(nav) => {
            state.inline.update(nav, project.images.len());
            Event::None
        }
        Message::Overlay(nav) => {
            if let Gallery::Open { slideshow, .. } = &mut state.gallery {
                slideshow.update(nav, project.images.len());
            }
            Event::None
        }
        Message::Pressed => {
            if project.has_gallery() && !state.is_gallery_open() {
                state.gallery = Gallery::Open {
                    slideshow: slideshow::State::new(),
                    _scroll: scroll_lock.acquire(),
                };
                Event::GalleryOpened
            } else {
                Event::None
            }
        }
        Message::PreviewPressed => project
            .href
            .clone()
            .map_or(Event::None, Event::CopyUrl),
        Message::LinkPressed(url) => Event::CopyUrl(url),
        Message::CloseRequested => state.close_gallery(),
        Message::PanelPressed => Event::None,
    }
}

/// Contextual data needed to render a card or its overlay.
pub struct ViewContext<'a> {
    pub project: &'a Project,
    pub state: &'a State,
    pub scheme: &'a ColorScheme,
}

/// Renders the card.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scheme = ctx.scheme;
    let project = ctx.project;

    let mut body: Column<'a, Message> = column![]
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .width(Fill);

    body = body.push(
        text(&project.title)
            .size(typography::TITLE_SM)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            })
            .color(scheme.text_primary),
    );
    body = body.push(
        text(&project.dates)
            .size(typography::CAPTION)
            .color(scheme.text_secondary),
    );

    if let Some(link) = project.display_link() {
        body = body.push(
            text(link)
                .size(typography::CAPTION)
                .color(scheme.text_tertiary),
        );
    }

    if !ctx.state.description.is_empty() {
        body = body.push(
            markdown::view(&ctx.state.description, description_appearance(scheme))
                .map(Message::LinkPressed),
        );
    }

    if !project.tags.is_empty() {
        body = body.push(tag_badges(&project.tags, scheme));
    }

    if !project.links.is_empty() {
        body = body.push(link_badges(project, scheme));
    }

    let mut card: Column<'a, Message> = column![].width(Length::Fixed(sizing::CARD_WIDTH));
    if let Some(preview) = preview_slot(ctx) {
        card = card.push(preview);
    }
    card = card.push(body);

    let surface = container(card).style(container_styles::card(
        scheme.surface_primary,
        Color {
            a: 0.25,
            ..scheme.text_tertiary
        },
    ));

    if project.has_gallery() {
        mouse_area(surface)
            .interaction(Interaction::Pointer)
            .on_press(Message::Pressed)
            .into()
    } else {
        surface.into()
    }
}

/// Renders the gallery overlay layer, or `None` while it is closed.
pub fn overlay_view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let Gallery::Open { slideshow: gallery_state, .. } = &ctx.state.gallery else {
        return None;
    };
    let scheme = ctx.scheme;
    let project = ctx.project;

    let close_button = button(
        svg(icons::handle(icons::CLOSE))
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
    .on_press(Message::CloseRequested);

    let header = row![
        text(&project.title)
            .size(typography::TITLE_MD)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            })
            .color(scheme.text_primary),
        Space::new().width(Fill),
        close_button,
    ]
    .align_y(Alignment::Center)
    .padding(spacing::MD);

    let gallery = slideshow::view(
        gallery_state,
        slideshow::ViewContext {
            images: &project.images,
            alt: &project.title,
            height: sizing::OVERLAY_SLIDESHOW_HEIGHT,
            background: scheme.surface_secondary,
        },
    )
    .map(Message::Overlay);

    let mut details: Column<'a, Message> = column![gallery].spacing(spacing::MD);
    if !ctx.state.description.is_empty() {
        details = details.push(
            markdown::view(&ctx.state.description, description_appearance(scheme))
                .map(Message::LinkPressed),
        );
    }
    if !project.tags.is_empty() {
        details = details.push(tag_badges(&project.tags, scheme));
    }

    let panel_content = column![
        header,
        scrollable(container(details).padding(spacing::MD)).height(Fill),
    ]
    .width(Length::Fixed(sizing::OVERLAY_PANEL_WIDTH));

    // The panel swallows presses so they never fall through to the backdrop.
    let panel = mouse_area(
        container(panel_content)
            .max_height(sizing::OVERLAY_PANEL_MAX_HEIGHT)
            .style(overlay::panel(scheme.surface_primary)),
    )
    .on_press(Message::PanelPressed);

    let backdrop = mouse_area(
        container(Space::new().width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(overlay::backdrop(scheme.overlay_backdrop)),
    )
    .on_press(Message::CloseRequested);

    let layered = iced::widget::stack![
        backdrop,
        container(panel)
            .width(Fill)
            .height(Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .padding(spacing::XL),
    ]
    .width(Fill)
    .height(Fill);

    // Block every event (presses, hover, wheel) from reaching the page.
    Some(opaque(layered))
}

fn description_appearance(scheme: &ColorScheme) -> markdown::Appearance {
    markdown::Appearance {
        text_size: typography::BODY,
        text_color: scheme.text_secondary,
        link_color: scheme.brand_primary,
    }
}

fn preview_slot<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let scheme = ctx.scheme;
    let project = ctx.project;

    match project.preview() {
        Preview::Gallery(images) => Some(
            slideshow::view(
                &ctx.state.inline,
                slideshow::ViewContext {
                    images,
                    alt: &project.title,
                    height: sizing::PREVIEW_HEIGHT,
                    background: scheme.surface_secondary,
                },
            )
            .map(Message::Inline),
        ),
        Preview::Video(path) => Some(linkable_preview(
            video_placeholder(path, scheme),
            project,
        )),
        Preview::Image(path) => {
            let photo = container(
                image(image::Handle::from_path(path))
                    .content_fit(ContentFit::Cover)
                    .width(Fill)
                    .height(Fill),
            )
            .width(Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .style(container_styles::preview(scheme.surface_secondary));

            Some(linkable_preview(photo.into(), project))
        }
        Preview::None => None,
    }
}

/// Wraps a preview in a press area when the project has an `href`. Pressing
/// copies the URL; the press never reaches the card's own press handler
/// because the inner area captures it first.
fn linkable_preview<'a>(preview: Element<'a, Message>, project: &Project) -> Element<'a, Message> {
    if project.href.is_some() {
        mouse_area(preview)
            .interaction(Interaction::Pointer)
            .on_press(Message::PreviewPressed)
            .into()
    } else {
        preview
    }
}

fn video_placeholder<'a>(path: &'a Path, scheme: &ColorScheme) -> Element<'a, Message> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    container(
        column![
            svg(icons::handle(icons::FILM))
                .width(sizing::ICON_MD)
                .height(sizing::ICON_MD)
                .style(overlay::icon(scheme.text_tertiary)),
            text(name)
                .size(typography::CAPTION)
                .color(scheme.text_tertiary),
        ]
        .spacing(spacing::XXS)
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(container_styles::preview(scheme.surface_secondary))
    .into()
}

fn tag_badges<'a>(tags: &'a [String], scheme: &ColorScheme) -> Element<'a, Message> {
    let badge_background = scheme.badge_background;
    let badge_text = scheme.badge_text;

    column(tags.chunks(6).map(|chunk| {
        row(chunk.iter().map(|tag| {
            container(text(tag.as_str()).size(typography::BADGE))
                .padding([spacing::XXS / 2.0, spacing::XS])
                .style(container_styles::badge(badge_background, badge_text))
                .into()
        }))
        .spacing(spacing::XXS)
        .into()
    }))
    .spacing(spacing::XXS)
    .into()
}

fn link_badges<'a>(project: &'a Project, scheme: &ColorScheme) -> Element<'a, Message> {
    row(project.links.iter().map(|link| {
        button(
            row![
                svg(icons::link_icon(link.icon.as_deref()))
                    .width(sizing::ICON_SM * 0.75)
                    .height(sizing::ICON_SM * 0.75)
                    .style(overlay::icon(scheme.badge_text)),
                text(link.label.as_str()).size(typography::BADGE),
            ]
            .spacing(spacing::XXS)
            .align_y(Alignment::Center),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(button_styles::badge(scheme.badge_background, scheme.badge_text))
        .on_press(Message::LinkPressed(link.url.clone()))
        .into()
    }))
    .spacing(spacing::XXS)
    .into()
}
