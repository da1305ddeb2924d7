// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constant-width rounded ring used by the bezel stroke.

use kurbo::{Affine, BezPath, Size};

use super::outline::outline_path;

/// Returns a ring of `stroke_width` that grows inward from the outline of a
/// rounded rectangle of `size`.
///
/// The path holds two contours (the outline and an outline inset by
/// `stroke_width`) and must be filled with the even-odd rule. The inner
/// corner radius is `radius - stroke_width`, floored at zero, and the inner
/// size is floored at zero.
#[must_use]
pub fn ring_path(size: Size, radius: f64, stroke_width: f64) -> BezPath {
    let width = stroke_width.abs();
    let inner_radius = if radius < width { 0.0 } else { radius - width };
    let inner_size = Size::new(
        (size.width - 2.0 * width).max(0.0),
        (size.height - 2.0 * width).max(0.0),
    );

    let mut path = outline_path(size, radius);
    let mut inner = outline_path(inner_size, inner_radius);
    inner.apply_affine(Affine::translate((width, width)));
    path.extend(inner);
    path
}
