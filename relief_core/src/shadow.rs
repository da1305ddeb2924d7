// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shadow primitives.
//!
//! Every surface owns four [`ShadowPrimitive`] slots, one per
//! [`ShadowRole`]. Outer primitives cast a blurred copy of the surface
//! outline behind the surface. Inner primitives fill an L-band just outside
//! the outline; clipped to the outline, only their shadow remains visible,
//! falling into the recess.
//!
//! Offsets follow a light source at the upper left. For a magnitude `m`:
//!
//! | role | offset |
//! |---|---|
//! | outer dark | `( m/2,  m/4)` |
//! | outer bright | `(-m/2, -m/4)` |
//! | inner dark | `(-m/2, -m/4)` |
//! | inner bright | `( m/2,  m/4)` |
//!
//! All four use a blur radius of `|m|`.

use kurbo::{BezPath, Vec2};
use peniko::{Color, Fill};

use crate::elevation::Polarity;

/// The four shadow slots of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShadowRole {
    /// Outer shadow toward the upper left.
    OuterBright,
    /// Outer shadow toward the lower right.
    OuterDark,
    /// Inner shadow along the lower-right sides.
    InnerBright,
    /// Inner shadow along the upper-left sides.
    InnerDark,
}

impl ShadowRole {
    /// All roles in slot order.
    pub const ALL: [Self; 4] = [
        Self::OuterBright,
        Self::OuterDark,
        Self::InnerBright,
        Self::InnerDark,
    ];

    /// Returns the slot index of this role.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::OuterBright => 0,
            Self::OuterDark => 1,
            Self::InnerBright => 2,
            Self::InnerDark => 3,
        }
    }

    /// Returns `true` for the roles cast outside the surface.
    #[must_use]
    pub const fn is_outer(self) -> bool {
        matches!(self, Self::OuterBright | Self::OuterDark)
    }

    /// Returns `true` for the roles on the lit side.
    #[must_use]
    pub const fn is_bright(self) -> bool {
        matches!(self, Self::OuterBright | Self::InnerBright)
    }

    /// Returns the polarity under which this role is visible.
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        if self.is_outer() {
            Polarity::Raised
        } else {
            Polarity::Recessed
        }
    }
}

/// Returns the shadow offset of `role` for a signed magnitude.
#[must_use]
pub fn shadow_offset(role: ShadowRole, magnitude: f64) -> Vec2 {
    let toward_lower_right = Vec2::new(magnitude / 2.0, magnitude / 4.0);
    match role {
        ShadowRole::OuterDark | ShadowRole::InnerBright => toward_lower_right,
        ShadowRole::OuterBright | ShadowRole::InnerDark => -toward_lower_right,
    }
}

/// Returns the blur radius for a signed magnitude.
#[must_use]
pub fn blur_radius(magnitude: f64) -> f64 {
    magnitude.abs()
}

/// One shadow-casting layer of a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowPrimitive {
    /// Which slot this is.
    pub role: ShadowRole,
    /// Shadow color.
    pub color: Color,
    /// Shadow opacity; always fully opaque.
    pub opacity: f32,
    /// Silhouette that casts the shadow.
    pub path: BezPath,
    /// Fill rule of `path` when it is painted.
    pub fill_rule: Fill,
    /// Color `path` is filled with, for inner primitives.
    pub fill: Option<Color>,
    /// Shadow offset.
    pub offset: Vec2,
    /// Shadow blur radius.
    pub blur_radius: f64,
    /// Whether the primitive is hidden.
    pub hidden: bool,
}

impl ShadowPrimitive {
    /// Creates an empty, hidden primitive for `role`.
    ///
    /// Outer primitives only cast a shadow; inner primitives also paint their
    /// band with the shadow color under the even-odd rule.
    #[must_use]
    pub fn new(role: ShadowRole, color: Color) -> Self {
        let outer = role.is_outer();
        Self {
            role,
            color,
            opacity: 1.0,
            path: BezPath::new(),
            fill_rule: if outer { Fill::NonZero } else { Fill::EvenOdd },
            fill: if outer { None } else { Some(color) },
            offset: Vec2::ZERO,
            blur_radius: 0.0,
            hidden: true,
        }
    }

    /// Changes the shadow color, and the band color of inner primitives.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        if self.fill.is_some() {
            self.fill = Some(color);
        }
    }

    /// Replaces the silhouette and shadow parameters for `magnitude`.
    pub fn update(&mut self, path: BezPath, magnitude: f64) {
        self.path = path;
        self.offset = shadow_offset(self.role, magnitude);
        self.blur_radius = blur_radius(magnitude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGNITUDES: [f64; 7] = [-50.0, -15.0, -3.0, 0.0, 2.0, 5.0, 50.0];

    #[test]
    fn raised_offsets() {
        assert_eq!(shadow_offset(ShadowRole::OuterDark, 20.0), Vec2::new(10.0, 5.0));
        assert_eq!(shadow_offset(ShadowRole::OuterBright, 20.0), Vec2::new(-10.0, -5.0));
    }

    #[test]
    fn recessed_offsets_invert_raised_ones() {
        for m in MAGNITUDES {
            assert_eq!(
                shadow_offset(ShadowRole::InnerDark, m),
                -shadow_offset(ShadowRole::OuterDark, m),
                "m={m}"
            );
            assert_eq!(
                shadow_offset(ShadowRole::InnerBright, m),
                -shadow_offset(ShadowRole::OuterBright, m),
                "m={m}"
            );
        }
    }

    #[test]
    fn dark_and_bright_are_opposite() {
        for m in MAGNITUDES {
            assert_eq!(
                shadow_offset(ShadowRole::OuterDark, m),
                -shadow_offset(ShadowRole::OuterBright, m),
                "m={m}"
            );
            assert_eq!(
                shadow_offset(ShadowRole::OuterDark, m),
                shadow_offset(ShadowRole::OuterBright, -m),
                "m={m}"
            );
        }
    }

    #[test]
    fn recessed_offsets_for_negative_magnitude() {
        // The dark inner shadow is cast from the upper-left band toward the
        // lower right, into the recess.
        assert_eq!(shadow_offset(ShadowRole::InnerDark, -15.0), Vec2::new(7.5, 3.75));
        assert_eq!(shadow_offset(ShadowRole::InnerBright, -15.0), Vec2::new(-7.5, -3.75));
    }

    #[test]
    fn blur_is_absolute() {
        assert_eq!(blur_radius(-15.0), 15.0);
        assert_eq!(blur_radius(5.0), 5.0);
        assert_eq!(blur_radius(0.0), 0.0);
    }

    #[test]
    fn inner_primitives_fill_even_odd() {
        let inner = ShadowPrimitive::new(ShadowRole::InnerDark, Color::BLACK);
        assert_eq!(inner.fill, Some(Color::BLACK));
        assert_eq!(inner.fill_rule, Fill::EvenOdd);
        let outer = ShadowPrimitive::new(ShadowRole::OuterDark, Color::BLACK);
        assert_eq!(outer.fill, None);
        assert!(outer.hidden && inner.hidden, "slots start hidden");
    }

    #[test]
    fn recolor_tracks_fill() {
        let mut inner = ShadowPrimitive::new(ShadowRole::InnerBright, Color::BLACK);
        inner.set_color(Color::WHITE);
        assert_eq!(inner.fill, Some(Color::WHITE));
    }
}
