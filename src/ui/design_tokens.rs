// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view: palette, opacity, spacing, sizing,
//! typography, border and radius scales, and shadows. Components never embed
//! raw magic values; they pull from here so the visual language stays
//! consistent.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Dimmed backdrop behind the gallery overlay.
    pub const OVERLAY_BACKDROP: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Inactive slideshow indicator dots on hover.
    pub const INDICATOR_HOVER: f32 = 0.75;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

/// Spacing scale (8px baseline grid).
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    // Cards
    pub const CARD_WIDTH: f32 = 560.0;
    pub const PREVIEW_HEIGHT: f32 = 190.0;

    // Slideshow indicator dots
    pub const INDICATOR: f32 = 7.0;
    pub const INDICATOR_ACTIVE_WIDTH: f32 = 16.0;

    // Gallery overlay panel
    pub const OVERLAY_PANEL_WIDTH: f32 = 760.0;
    pub const OVERLAY_PANEL_MAX_HEIGHT: f32 = 620.0;
    pub const OVERLAY_SLIDESHOW_HEIGHT: f32 = 380.0;
}

/// Font size scale.
pub mod typography {
    /// Gallery overlay heading.
    pub const TITLE_MD: f32 = 20.0;

    /// Card titles.
    pub const TITLE_SM: f32 = 16.0;

    /// Description text.
    pub const BODY: f32 = 13.0;

    /// Dates, canonical link line, slideshow counter.
    pub const CAPTION: f32 = 11.0;

    /// Tag and link badges.
    pub const BADGE: f32 = 10.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_BACKDROP > 0.0 && opacity::OVERLAY_BACKDROP < 1.0);

    // Typography validation
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
    assert!(typography::CAPTION > typography::BADGE);

    // Sizing validation
    assert!(sizing::INDICATOR_ACTIVE_WIDTH > sizing::INDICATOR);
    assert!(sizing::OVERLAY_PANEL_WIDTH > sizing::CARD_WIDTH);
    assert!(sizing::OVERLAY_PANEL_MAX_HEIGHT > sizing::OVERLAY_SLIDESHOW_HEIGHT);

    // Opacity ordering for indicator and overlay button states
    assert!(opacity::INDICATOR_HOVER > opacity::OVERLAY_BACKDROP);
    assert!(opacity::INDICATOR_HOVER < opacity::OPAQUE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
