// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inner-shadow L-bands.
//!
//! An inner shadow is cast by a thick band that hugs two adjacent sides of
//! the rounded rectangle from the outside:
//!
//! ```text
//!    _______
//!  //       \\
//! //
//! ||
//! ||
//! \\
//! ```
//!
//! Filled with the even-odd rule and clipped to the surface outline, the band
//! itself is invisible and only its shadow falls inward.

use core::f64::consts::PI;

use kurbo::{Affine, Arc, BezPath, Point, Size};

use super::arc::{Winding, circular_arc, path_from_arcs};

/// Thickness of the band outside the outline.
pub const BAND_THICKNESS: f64 = 10.0;

/// Padding added to the bounds so the band overlaps the view edge and leaves
/// no anti-aliasing seam.
pub const EDGE_BLEED: f64 = 1.0;

/// Returns the six arcs of the upper-left band for `size`.
///
/// The first three arcs follow the outline with `radius`; the last three
/// return along a parallel curve [`BAND_THICKNESS`] further out.
#[must_use]
pub fn band_arcs(size: Size, radius: f64) -> [Arc; 6] {
    let w = size.width + EDGE_BLEED;
    let h = size.height + EDGE_BLEED;
    let r = radius;
    let outer = radius + BAND_THICKNESS;
    let lower_left = Point::new(r, h - r);
    let upper_left = Point::new(r, r);
    let upper_right = Point::new(w - r, r);
    [
        circular_arc(lower_left, r, 0.75 * PI, PI, Winding::Clockwise),
        circular_arc(upper_left, r, PI, 1.5 * PI, Winding::Clockwise),
        circular_arc(upper_right, r, 1.5 * PI, 1.75 * PI, Winding::Clockwise),
        circular_arc(upper_right, outer, 1.75 * PI, 1.5 * PI, Winding::CounterClockwise),
        circular_arc(upper_left, outer, 1.5 * PI, PI, Winding::CounterClockwise),
        circular_arc(lower_left, outer, PI, 0.75 * PI, Winding::CounterClockwise),
    ]
}

/// Returns the untransformed band path.
#[must_use]
pub fn band_path(size: Size, radius: f64) -> BezPath {
    path_from_arcs(&band_arcs(size, radius), true)
}

/// Returns the band along the upper and left sides.
///
/// This is the silhouette of the dark inner shadow.
#[must_use]
pub fn upper_left_band(size: Size, radius: f64) -> BezPath {
    let mut path = band_path(size, radius);
    path.apply_affine(Affine::translate((-EDGE_BLEED, -EDGE_BLEED)));
    path
}

/// Returns the band along the lower and right sides.
///
/// This is the base band turned half a revolution so it lands on the
/// opposite corners. It is the silhouette of the bright inner shadow.
#[must_use]
pub fn lower_right_band(size: Size, radius: f64) -> BezPath {
    let mut path = band_path(size, radius);
    let transform = Affine::translate((size.width + EDGE_BLEED, size.height + EDGE_BLEED))
        * Affine::rotate(PI);
    path.apply_affine(transform);
    path
}
