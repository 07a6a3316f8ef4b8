// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for buttons, containers, and the gallery overlay.
//!
//! Style functions are color-parameterized rather than theme-matching so the
//! same functions serve both light and dark schemes; callers pass colors from
//! the active [`ColorScheme`](crate::ui::theming::ColorScheme).

pub mod button;
pub mod container;
pub mod overlay;
