// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full rounded-rectangle outline.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Arc, BezPath, Point, Size};

use super::arc::{Winding, circular_arc, path_from_arcs};

/// Returns the four corner arcs of a rounded rectangle of `size`, starting
/// at the bottom-left corner and proceeding clockwise.
#[must_use]
pub fn outline_arcs(size: Size, radius: f64) -> [Arc; 4] {
    let (w, h, r) = (size.width, size.height, radius);
    [
        circular_arc(Point::new(r, h - r), r, FRAC_PI_2, PI, Winding::Clockwise),
        circular_arc(Point::new(r, r), r, PI, 1.5 * PI, Winding::Clockwise),
        circular_arc(Point::new(w - r, r), r, 1.5 * PI, 2.0 * PI, Winding::Clockwise),
        circular_arc(Point::new(w - r, h - r), r, 2.0 * PI, 2.5 * PI, Winding::Clockwise),
    ]
}

/// Returns the closed outline of a rounded rectangle of `size` at the origin.
///
/// This is the silhouette of outer shadows and the clip mask of recessed
/// surfaces. Radii larger than half the smaller side produce a
/// self-intersecting outline.
#[must_use]
pub fn outline_path(size: Size, radius: f64) -> BezPath {
    path_from_arcs(&outline_arcs(size, radius), true)
}
