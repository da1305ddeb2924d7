// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path builders for soft-UI surfaces.
//!
//! All builders are pure functions of a size and a corner radius, in the
//! surface's local coordinate space (origin at the top-left corner, y
//! pointing down):
//!
//! - [`outline_path`]: the closed rounded-rectangle silhouette.
//! - [`upper_left_band`] / [`lower_right_band`]: thick L-shaped bands that
//!   cast inner shadows.
//! - [`ring_path`]: a constant-width ring for the bezel stroke.
//!
//! Paths are assembled from circular [`kurbo::Arc`]s joined by straight
//! edges. No input is rejected: a corner radius larger than half the smaller
//! side yields a self-intersecting but finite path.

mod arc;
mod band;
mod outline;
mod ring;

pub use arc::{
    ARC_TOLERANCE, Winding, append_arc, arc_end, arc_start, circular_arc, path_from_arcs,
};
pub use band::{
    BAND_THICKNESS, EDGE_BLEED, band_arcs, band_path, lower_right_band, upper_left_band,
};
pub use outline::{outline_arcs, outline_path};
pub use ring::ring_path;

use kurbo::Size;

/// Bounds and corner radius of a surface, as assigned by the host layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceGeometry {
    /// Width and height of the surface.
    pub size: Size,
    /// Corner radius. Never negative.
    pub corner_radius: f64,
}

impl SurfaceGeometry {
    /// Creates a geometry, clamping the corner radius to be non-negative.
    #[must_use]
    pub fn new(size: Size, corner_radius: f64) -> Self {
        Self {
            size,
            corner_radius: corner_radius.max(0.0),
        }
    }

    /// Returns `true` if the corner radius fits within the bounds.
    ///
    /// Larger radii are not rejected, but render as malformed arcs.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.corner_radius <= self.size.width.min(self.size.height) / 2.0
    }
}
