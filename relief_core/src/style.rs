// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface appearance configuration.
//!
//! A [`SurfaceStyle`] bundles everything about a surface that is not geometry
//! or elevation: the four shadow colors, the background fill, the optional
//! bezel, and where the recessed clip mask is applied. Every type here is a
//! plain value with a [`Default`] and `with_*` builders.

use peniko::Color;

use crate::shadow::ShadowRole;

/// The soft blue-gray used for shadows on the dark side of a surface.
pub const SOFT_SHADOW: Color = Color::new([0.53, 0.65, 0.75, 0.48]);

/// The four shadow colors of a surface.
///
/// The light is assumed to come from the upper left: the bright outer shadow
/// falls toward the upper left, the dark one toward the lower right. Inside a
/// recess the dark shadow hugs the upper-left sides and the bright one the
/// lower-right sides.
///
/// A transparent color disables the corresponding light direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowPalette {
    /// Color of the outer shadow cast toward the upper left.
    pub outer_bright: Color,
    /// Color of the outer shadow cast toward the lower right.
    pub outer_dark: Color,
    /// Color of the inner shadow along the lower-right sides.
    pub inner_bright: Color,
    /// Color of the inner shadow along the upper-left sides.
    pub inner_dark: Color,
}

impl Default for ShadowPalette {
    fn default() -> Self {
        Self {
            outer_bright: Color::WHITE,
            outer_dark: SOFT_SHADOW,
            inner_bright: Color::WHITE,
            inner_dark: SOFT_SHADOW.with_alpha(1.0),
        }
    }
}

impl ShadowPalette {
    /// Returns the color assigned to `role`.
    #[must_use]
    pub fn color(&self, role: ShadowRole) -> Color {
        match role {
            ShadowRole::OuterBright => self.outer_bright,
            ShadowRole::OuterDark => self.outer_dark,
            ShadowRole::InnerBright => self.inner_bright,
            ShadowRole::InnerDark => self.inner_dark,
        }
    }

    /// Assigns the color of `role`.
    pub fn set_color(&mut self, role: ShadowRole, color: Color) {
        match role {
            ShadowRole::OuterBright => self.outer_bright = color,
            ShadowRole::OuterDark => self.outer_dark = color,
            ShadowRole::InnerBright => self.inner_bright = color,
            ShadowRole::InnerDark => self.inner_dark = color,
        }
    }

    /// Builder form of [`set_color`](Self::set_color).
    #[must_use]
    pub fn with_color(mut self, role: ShadowRole, color: Color) -> Self {
        self.set_color(role, color);
        self
    }

    /// Returns the palette with the two inner colors exchanged.
    ///
    /// Used for surfaces that reflect light the opposite way, such as a small
    /// indicator lamp.
    #[must_use]
    pub fn with_inner_swapped(self) -> Self {
        Self {
            inner_bright: self.inner_dark,
            inner_dark: self.inner_bright,
            ..self
        }
    }
}

/// A thin gradient outline traced along the inside of the surface edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezelStyle {
    width: f64,
    /// Gradient color at the upper-left end.
    pub upper_left: Color,
    /// Gradient color at the lower-right end. Always painted opaque.
    pub lower_right: Color,
}

impl Default for BezelStyle {
    fn default() -> Self {
        Self {
            width: 0.0,
            upper_left: Color::WHITE,
            lower_right: SOFT_SHADOW,
        }
    }
}

impl BezelStyle {
    /// Gradient stop offsets along the upper-left to lower-right diagonal.
    pub const STOPS: [f32; 2] = [0.4, 1.0];

    /// Returns the stroke width. Zero means no bezel.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sets the stroke width. Negative widths are made positive.
    pub fn set_width(&mut self, width: f64) {
        self.width = width.abs();
    }

    /// Builder form of [`set_width`](Self::set_width).
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.set_width(width);
        self
    }

    /// Builder for both gradient colors.
    #[must_use]
    pub fn with_colors(self, upper_left: Color, lower_right: Color) -> Self {
        Self {
            upper_left,
            lower_right,
            ..self
        }
    }

    /// Returns the style with the two gradient colors exchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        self.with_colors(self.lower_right, self.upper_left)
    }

    /// Returns `true` if a bezel is drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

/// Where the clip mask of a recessed surface is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaskTarget {
    /// The whole surface is clipped. Content is drawn above the inner
    /// shadows.
    #[default]
    Container,
    /// The content and the inner shadows are clipped. Inner shadows are drawn
    /// above the content, and the fill and bezel stay unclipped. Without
    /// content, no clip is applied.
    Content,
}

/// Everything about a surface's appearance besides geometry and elevation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceStyle {
    /// Shadow colors.
    pub palette: ShadowPalette,
    /// Fill color of the surface; `None` is transparent.
    pub background: Option<Color>,
    /// Bezel stroke.
    pub bezel: BezelStyle,
    /// Clip policy for recessed surfaces.
    pub mask_target: MaskTarget,
}

impl SurfaceStyle {
    /// Builder for the palette.
    #[must_use]
    pub fn with_palette(self, palette: ShadowPalette) -> Self {
        Self { palette, ..self }
    }

    /// Builder for the background.
    #[must_use]
    pub fn with_background(self, background: Color) -> Self {
        Self {
            background: Some(background),
            ..self
        }
    }

    /// Builder for the bezel.
    #[must_use]
    pub fn with_bezel(self, bezel: BezelStyle) -> Self {
        Self { bezel, ..self }
    }

    /// Builder for the mask target.
    #[must_use]
    pub fn with_mask_target(self, mask_target: MaskTarget) -> Self {
        Self {
            mask_target,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bezel_width_is_absolute() {
        let bezel = BezelStyle::default().with_width(-2.5);
        assert_eq!(bezel.width(), 2.5);
        assert!(bezel.is_visible(), "non-zero width is visible");
        assert!(!BezelStyle::default().is_visible(), "default has no bezel");
    }

    #[test]
    fn palette_roles() {
        let palette = ShadowPalette::default().with_color(ShadowRole::InnerBright, Color::BLACK);
        assert_eq!(palette.color(ShadowRole::InnerBright), Color::BLACK);
        assert_eq!(palette.color(ShadowRole::OuterBright), Color::WHITE);
    }

    #[test]
    fn swapping() {
        let palette = ShadowPalette::default().with_inner_swapped();
        assert_eq!(palette.inner_dark, Color::WHITE);
        assert_eq!(palette.inner_bright, SOFT_SHADOW.with_alpha(1.0));

        let bezel = BezelStyle::default().swapped();
        assert_eq!(bezel.upper_left, SOFT_SHADOW);
        assert_eq!(bezel.lower_right, Color::WHITE);
    }
}
