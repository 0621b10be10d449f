// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base and brand colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_compare::ui::design_tokens::{palette, spacing};

// Brand background for action buttons
let button_bg = palette::BRAND_500;

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// `#ccc`, frame border and the revealed side of the slider rail.
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);

    // Brand colors (green scale)
    pub const BRAND_400: Color = Color::from_rgb(0.086, 0.757, 0.498); // Hover
    pub const BRAND_500: Color = Color::from_rgb(0.016, 0.667, 0.427); // #04AA6D
    pub const BRAND_600: Color = Color::from_rgb(0.012, 0.557, 0.357); // Pressed

    /// Remaining side of the slider rail.
    pub const ACCENT_500: Color = Color::from_rgb(0.0, 0.0, 1.0);

    /// Divider line drawn at the reveal edge.
    pub const DIVIDER: Color = Color::from_rgb(1.0, 0.0, 0.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Faded controls
    pub const DISABLED: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Action buttons
    pub const BUTTON_WIDTH: f32 = 150.0;
    pub const BUTTON_HEIGHT: f32 = 50.0;

    // Reveal slider
    pub const SLIDER_RAIL: f32 = 4.0;
    pub const SLIDER_HANDLE_RADIUS: f32 = 10.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Button labels
    pub const BODY_LG: f32 = 16.0;

    /// Hints and slot labels
    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 2.0;
    pub const LG: f32 = 16.0;
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

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::BUTTON_WIDTH > sizing::BUTTON_HEIGHT);
};
