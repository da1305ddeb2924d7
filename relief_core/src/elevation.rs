// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elevation model.
//!
//! An [`Elevation`] describes how far a surface appears to rise above
//! (positive) or sink below (negative) its surrounding plane. Every elevation
//! resolves to a signed [`magnitude`](Elevation::magnitude) and a
//! [`Polarity`], which selects between the outer (raised) and inner
//! (recessed) shadow pair.
//!
//! Magnitudes are conventionally kept within [`MAGNITUDE_RANGE`]. Values
//! outside that range are accepted but render poorly.

use core::ops::RangeInclusive;

/// Magnitudes outside this range are accepted but degrade visual quality.
pub const MAGNITUDE_RANGE: RangeInclusive<f64> = -50.0..=50.0;

/// How far a surface appears above or below its surroundings.
///
/// Variants prefixed with `Convex` create a levitating effect; variants
/// prefixed with `Concave` make the surface look carved into its
/// surroundings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Elevation {
    /// Magnitude 50.
    ConvexHigh,
    /// Magnitude 30.
    ConvexMedium,
    /// Magnitude 15.
    ConvexLow,
    /// Magnitude 5.
    ConvexSlight,
    /// Magnitude 0.
    #[default]
    Flat,
    /// Magnitude -5.
    ConcaveSlight,
    /// Magnitude -15.
    ConcaveLow,
    /// Magnitude -30.
    ConcaveMedium,
    /// Magnitude -50.
    ConcaveHigh,
    /// An arbitrary signed magnitude.
    Custom(f64),
}

impl Elevation {
    /// All named presets, from highest to lowest.
    pub const PRESETS: [Self; 9] = [
        Self::ConvexHigh,
        Self::ConvexMedium,
        Self::ConvexLow,
        Self::ConvexSlight,
        Self::Flat,
        Self::ConcaveSlight,
        Self::ConcaveLow,
        Self::ConcaveMedium,
        Self::ConcaveHigh,
    ];

    /// Returns the signed magnitude of this elevation.
    #[must_use]
    pub const fn magnitude(self) -> f64 {
        match self {
            Self::ConvexHigh => 50.0,
            Self::ConvexMedium => 30.0,
            Self::ConvexLow => 15.0,
            Self::ConvexSlight => 5.0,
            Self::Flat => 0.0,
            Self::ConcaveSlight => -5.0,
            Self::ConcaveLow => -15.0,
            Self::ConcaveMedium => -30.0,
            Self::ConcaveHigh => -50.0,
            Self::Custom(magnitude) => magnitude,
        }
    }

    /// Returns the polarity selected by this elevation's magnitude.
    #[must_use]
    pub fn polarity(self) -> Polarity {
        Polarity::of(self.magnitude())
    }

    /// Returns `true` if the surface is raised.
    ///
    /// Zero elevation is not convex.
    #[must_use]
    pub fn is_convex(self) -> bool {
        self.polarity() == Polarity::Raised
    }

    /// Returns `true` if the magnitude lies within [`MAGNITUDE_RANGE`].
    #[must_use]
    pub fn is_within_recommended_range(self) -> bool {
        MAGNITUDE_RANGE.contains(&self.magnitude())
    }
}

impl From<f64> for Elevation {
    fn from(magnitude: f64) -> Self {
        Self::Custom(magnitude)
    }
}

/// Which shadow pair a surface shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Outer drop shadows; the surface levitates.
    Raised,
    /// Inner shadows clipped to the outline; the surface is carved in.
    Recessed,
}

impl Polarity {
    /// Resolves the polarity of a signed magnitude.
    ///
    /// Only strictly positive magnitudes are raised. Zero, negative and NaN
    /// magnitudes are recessed.
    #[must_use]
    pub fn of(magnitude: f64) -> Self {
        if magnitude > 0.0 {
            Self::Raised
        } else {
            Self::Recessed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_table() {
        let expected = [50.0, 30.0, 15.0, 5.0, 0.0, -5.0, -15.0, -30.0, -50.0];
        for (preset, magnitude) in Elevation::PRESETS.iter().zip(expected) {
            assert_eq!(preset.magnitude(), magnitude, "{preset:?}");
        }
    }

    #[test]
    fn presets_round_trip() {
        assert_eq!(Elevation::ConvexHigh.magnitude(), 50.0);
        assert_eq!(Elevation::Custom(17.5).magnitude(), 17.5);
        assert_eq!(Elevation::from(-2.25).magnitude(), -2.25);
    }

    #[test]
    fn polarity_follows_sign() {
        assert_eq!(Elevation::ConvexSlight.polarity(), Polarity::Raised);
        assert_eq!(Elevation::ConcaveSlight.polarity(), Polarity::Recessed);
        assert_eq!(Elevation::Custom(0.001).polarity(), Polarity::Raised);
        assert_eq!(Elevation::Custom(-0.001).polarity(), Polarity::Recessed);
    }

    #[test]
    fn zero_is_recessed() {
        assert!(!Elevation::Flat.is_convex(), "flat must not be convex");
        assert!(!Elevation::Custom(0.0).is_convex(), "zero must not be convex");
        assert!(!Elevation::Custom(-0.0).is_convex(), "-0 must not be convex");
        for _ in 0..8 {
            assert_eq!(Elevation::Flat.polarity(), Polarity::Recessed);
        }
    }

    #[test]
    fn nan_is_recessed() {
        assert_eq!(Elevation::Custom(f64::NAN).polarity(), Polarity::Recessed);
    }

    #[test]
    fn recommended_range() {
        assert!(Elevation::ConcaveHigh.is_within_recommended_range());
        assert!(Elevation::ConvexHigh.is_within_recommended_range());
        assert!(!Elevation::Custom(75.0).is_within_recommended_range());
    }
}
