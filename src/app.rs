// SPDX-License-Identifier: MPL-2.0
//! Application shell: window setup, top-level state, and the page view.
//!
//! The page is a scrollable column of project cards. While any card's gallery
//! overlay is open the page scrollable sits behind a scroll gate, so wheel
//! input is ignored without disturbing the stored scroll offset. Overlays are
//! stacked above the page; Escape closes whichever gallery is open.

use crate::config::{self, Config};
use crate::portfolio::{self, Portfolio};
use crate::scroll_lock::ScrollLock;
use crate::ui::card;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles::container as container_styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::widgets::scroll_gate;
use iced::widget::{column, container, scrollable, stack, Stack};
use iced::{keyboard, Alignment, Element, Fill, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use tracing::{debug, info, warn};

const WINDOW_DEFAULT_SIZE: Size = Size::new(900.0, 700.0);
const WINDOW_MIN_SIZE: Size = Size::new(480.0, 360.0);

/// Command-line startup options.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Portfolio file to open. Falls back to the last opened one.
    pub portfolio_path: Option<PathBuf>,
    /// Theme override: `light`, `dark`, or `system`.
    pub theme: Option<String>,
}

pub struct App {
    portfolio: Portfolio,
    cards: Vec<card::State>,
    scroll_lock: ScrollLock,
    dark: bool,
    scheme: ColorScheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Card(usize, card::Message),
    EscapePressed,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = config::load().unwrap_or_else(|e| {
            warn!("failed to load config: {e}");
            Config::default()
        });
        debug!(?config, "config loaded");

        let theme_mode = flags
            .theme
            .as_deref()
            .map(ThemeMode::from_name)
            .unwrap_or(config.theme_mode);

        let path = flags
            .portfolio_path
            .clone()
            .or_else(|| config.portfolio_path.clone());

        let portfolio = match &path {
            Some(path) => portfolio::load_from_path(path).unwrap_or_else(|e| {
                warn!("failed to load portfolio: {e}");
                Portfolio::default()
            }),
            None => Portfolio::default(),
        };

        // Remember the explicitly opened file for the next launch.
        if let Some(path) = flags.portfolio_path {
            if config.portfolio_path.as_deref() != Some(path.as_path()) {
                config.portfolio_path = Some(path);
                if let Err(e) = config::save(&config) {
                    warn!("failed to save config: {e}");
                }
            }
        }

        info!(projects = portfolio.projects.len(), "portfolio loaded");

        let cards = portfolio.projects.iter().map(card::State::new).collect();
        let dark = theme_mode.is_dark();

        (
            Self {
                portfolio,
                cards,
                scroll_lock: ScrollLock::new(),
                dark,
                scheme: theme_mode.scheme(),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.portfolio
            .title
            .clone()
            .unwrap_or_else(|| String::from("Folio"))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Card(index, card_message) => {
                let (Some(state), Some(project)) = (
                    self.cards.get_mut(index),
                    self.portfolio.projects.get(index),
                ) else {
                    return Task::none();
                };

                match card::update(state, project, card_message, &self.scroll_lock) {
                    card::Event::None => Task::none(),
                    card::Event::GalleryOpened => {
                        debug!(project = %project.title, "gallery opened");
                        Task::none()
                    }
                    card::Event::GalleryClosed => {
                        debug!(project = %project.title, "gallery closed");
                        Task::none()
                    }
                    card::Event::CopyUrl(url) => {
                        info!(%url, "copied link to clipboard");
                        iced::clipboard::write(url)
                    }
                }
            }
            Message::EscapePressed => {
                for (state, project) in self.cards.iter_mut().zip(&self.portfolio.projects) {
                    if state.is_gallery_open() {
                        card::update(
                            state,
                            project,
                            card::Message::CloseRequested,
                            &self.scroll_lock,
                        );
                        debug!(project = %project.title, "gallery closed");
                    }
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let cards = column(
            self.portfolio
                .projects
                .iter()
                .zip(&self.cards)
                .enumerate()
                .map(|(index, (project, state))| {
                    card::view(card::ViewContext {
                        project,
                        state,
                        scheme: &self.scheme,
                    })
                    .map(move |message| Message::Card(index, message))
                }),
        )
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::CARD_WIDTH));

        let page = scrollable(
            container(cards)
                .width(Fill)
                .align_x(Alignment::Center)
                .padding(spacing::XL),
        )
        .width(Fill)
        .height(Fill);

        let base = container(scroll_gate(page, self.scroll_lock.is_locked()))
            .width(Fill)
            .height(Fill)
            .style(container_styles::preview(self.scheme.surface_secondary));

        let mut layers: Stack<'_, Message> = stack![base].width(Fill).height(Fill);

        for (index, (project, state)) in self
            .portfolio
            .projects
            .iter()
            .zip(&self.cards)
            .enumerate()
        {
            if let Some(overlay) = card::overlay_view(card::ViewContext {
                project,
                state,
                scheme: &self.scheme,
            }) {
                layers = layers.push(overlay.map(move |message| Message::Card(index, message)));
            }
        }

        layers.into()
    }

    fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            } => Some(Message::EscapePressed),
            _ => None,
        })
    }
}

fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: WINDOW_DEFAULT_SIZE,
        min_size: Some(WINDOW_MIN_SIZE),
        ..Default::default()
    }
}

/// Runs the application.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window_settings())
        .run()
}
