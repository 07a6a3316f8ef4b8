// SPDX-License-Identifier: MPL-2.0
//! Folio is a small desktop portfolio viewer. It renders a TOML-described
//! list of projects as cards with image slideshows, markdown descriptions,
//! and a full-screen gallery overlay for selected projects.

pub mod app;
pub mod config;
pub mod error;
pub mod markdown;
pub mod portfolio;
pub mod scroll_lock;
pub mod ui;
