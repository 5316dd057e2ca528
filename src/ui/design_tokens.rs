// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens, following the W3C Design Tokens standard.
//!
//! - **Palette**: base colors and toast presets
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border**: border width scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    // Semantic colors, used as toast accent presets
    pub const SUCCESS_500: Color = Color::from_rgb(0.2, 0.8, 0.3);
    pub const ERROR_500: Color = Color::from_rgb(0.8, 0.2, 0.2);
    pub const INFO_500: Color = Color::from_rgb(0.2, 0.6, 0.9);

    /// Default toast backdrop: near-black with a slight blue cast, mostly
    /// opaque so the countdown bar stays readable over any scene.
    pub const TOAST_BACKGROUND: Color = Color::from_rgba(0.1, 0.1, 0.15, 0.9);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed toast card width.
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Height of the countdown bar along the toast's bottom edge.
    pub const TOAST_BAR_HEIGHT: f32 = 5.0;

    /// Gap between the fully risen toast and the bottom window edge; the
    /// slide animation travels this distance.
    pub const TOAST_MARGIN: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - hints, secondary labels
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Sizing validation
    assert!(sizing::TOAST_MARGIN > 0.0);
    assert!(sizing::TOAST_WIDTH > sizing::TOAST_BAR_HEIGHT);

    // Border validation
    assert!(border::WIDTH_MD > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn toast_presets_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
        assert_ne!(palette::SUCCESS_500, palette::INFO_500);
        assert_ne!(palette::ERROR_500, palette::INFO_500);
    }
}
