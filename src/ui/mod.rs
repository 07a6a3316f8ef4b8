// SPDX-License-Identifier: MPL-2.0
//! UI components, styling, and custom widgets.

pub mod card;
pub mod design_tokens;
pub mod icons;
pub mod slideshow;
pub mod styles;
pub mod theming;
pub mod widgets;
