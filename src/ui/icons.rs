// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are small stroke-based glyphs embedded as source text and handed to
//! the `svg` widget from memory, so the binary ships with no icon assets.

use iced::widget::svg;

pub const CHEVRON_LEFT: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m15 18-6-6 6-6"/></svg>"##;

pub const CHEVRON_RIGHT: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m9 18 6-6-6-6"/></svg>"##;

pub const CLOSE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M18 6 6 18"/><path d="m6 6 12 12"/></svg>"##;

pub const GITHUB: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/></svg>"##;

pub const GLOBE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/></svg>"##;

pub const LINK: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/></svg>"##;

pub const FILM: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect width="18" height="18" x="3" y="3" rx="2"/><path d="M7 3v18"/><path d="M17 3v18"/><path d="M3 7.5h4"/><path d="M3 12h18"/><path d="M3 16.5h4"/><path d="M17 7.5h4"/><path d="M17 16.5h4"/></svg>"##;

/// Builds an `svg` handle from an embedded icon.
#[must_use]
pub fn handle(source: &'static str) -> svg::Handle {
    svg::Handle::from_memory(source.as_bytes())
}

/// Maps a link badge's icon name to an embedded glyph. Unknown or absent
/// names fall back to the generic link glyph.
#[must_use]
pub fn link_icon(name: Option<&str>) -> svg::Handle {
    let source = match name {
        Some("github") => GITHUB,
        Some("globe") | Some("website") => GLOBE,
        _ => LINK,
    };
    handle(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_are_svg_documents() {
        for source in [CHEVRON_LEFT, CHEVRON_RIGHT, CLOSE, GITHUB, GLOBE, LINK, FILM] {
            assert!(source.starts_with("<svg"));
            assert!(source.ends_with("</svg>"));
        }
    }

    #[test]
    fn unknown_link_icon_falls_back_to_generic() {
        // Handles compare by internal id, so just verify construction works
        let _ = link_icon(Some("mystery"));
        let _ = link_icon(None);
        let _ = link_icon(Some("github"));
    }
}
