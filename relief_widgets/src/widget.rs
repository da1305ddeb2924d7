// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The common widget contract.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Arc, BezPath, Point, Rect, RoundedRect, Size};
use peniko::Color;
use relief_core::geometry::{Winding, circular_arc, path_from_arcs};
use relief_core::surface::{SurfaceId, SurfaceStore};

/// Stroke width of a thumb rim.
pub const RIM_STROKE_WIDTH: f64 = 1.0;

/// Stroke color of a thumb rim.
pub const RIM_STROKE_COLOR: Color = Color::BLACK;

/// Opacity of the shadow cast by a thumb rim.
pub const RIM_SHADOW_OPACITY: f32 = 0.25;

/// Blur radius of the shadow cast by a thumb rim.
pub const RIM_SHADOW_BLUR: f64 = 0.5;

/// Gap between a track's edge and the bounds its thumb is clipped to.
pub const THUMB_CLIP_INSET: f64 = 1.0;

/// Value-changed notification of a switch.
///
/// Setters return it only when the state actually flips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SwitchToggled {
    /// The new state.
    pub on: bool,
}

/// What the host should do after a tap or drag step on a switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwitchFeedback {
    /// Play a light haptic tick.
    pub haptic: bool,
    /// The switch changed state.
    pub toggled: Option<SwitchToggled>,
}

/// A thin shadowed stroke under a switch thumb.
///
/// The host strokes `path` and paints only its soft shadow, which reads as a
/// rim of light catching the bottom of the thumb. The path is in host
/// coordinates and follows the thumb as it moves.
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbRimDecoration {
    /// Lower half of the thumb outline, pushed 1 pt out and 2 pt down.
    pub path: BezPath,
    /// Stroke width.
    pub stroke_width: f64,
    /// Stroke color.
    pub stroke_color: Color,
    /// Shadow opacity.
    pub shadow_opacity: f32,
    /// Shadow blur radius.
    pub shadow_blur: f64,
}

impl ThumbRimDecoration {
    /// Builds the rim of a thumb occupying `thumb` with corner `radius`.
    pub(crate) fn for_thumb(thumb: Rect, radius: f64) -> Self {
        Self {
            path: path_from_arcs(&rim_arcs(thumb, radius), false),
            stroke_width: RIM_STROKE_WIDTH,
            stroke_color: RIM_STROKE_COLOR,
            shadow_opacity: RIM_SHADOW_OPACITY,
            shadow_blur: RIM_SHADOW_BLUR,
        }
    }
}

/// Lower-left and lower-right quarter circles of the rim.
pub(crate) fn rim_arcs(thumb: Rect, radius: f64) -> [Arc; 2] {
    let y = thumb.y1 - radius + 2.0;
    let rim = radius + 1.0;
    [
        circular_arc(
            Point::new(thumb.x0 + radius, y),
            rim,
            PI,
            FRAC_PI_2,
            Winding::CounterClockwise,
        ),
        circular_arc(
            Point::new(thumb.x1 - radius, y),
            rim,
            FRAC_PI_2,
            0.0,
            Winding::CounterClockwise,
        ),
    ]
}

/// Bounds a thumb is clipped to: the track inset by [`THUMB_CLIP_INSET`].
pub(crate) fn thumb_clip(track: Rect, radius: f64) -> RoundedRect {
    RoundedRect::from_rect(
        track.inset(-THUMB_CLIP_INSET),
        (radius - THUMB_CLIP_INSET).max(0.0),
    )
}

/// A control made of surfaces in a [`SurfaceStore`].
pub trait Widget {
    /// Natural size of the widget.
    ///
    /// A zero component means the widget takes whatever the host gives it
    /// along that axis.
    fn intrinsic_size(&self) -> Size;

    /// Places the widget's surfaces inside `frame`, in host coordinates.
    fn layout(&mut self, store: &mut SurfaceStore, frame: Rect);

    /// Returns the widget's surfaces, bottom first.
    fn surfaces(&self) -> Vec<SurfaceId>;

    /// Destroys every surface of the widget.
    fn destroy(self, store: &mut SurfaceStore)
    where
        Self: Sized,
    {
        for id in self.surfaces() {
            store.destroy_surface(id);
        }
    }
}

/// Origin that centers `size` vertically in `frame`, flush with its leading
/// edge.
pub(crate) fn leading_origin(frame: Rect, size: Size) -> Point {
    Point::new(frame.x0, frame.center().y - size.height / 2.0)
}

/// Moves `id` to `origin` unless it is already there.
pub(crate) fn move_surface(store: &mut SurfaceStore, id: SurfaceId, origin: Point) {
    if store.frame(id).origin() != origin {
        store.set_origin(id, origin);
    }
}

/// Clips `id` to `bounds` unless it already is.
pub(crate) fn clip_surface(store: &mut SurfaceStore, id: SurfaceId, bounds: RoundedRect) {
    if store.clip_bounds(id) != Some(bounds) {
        store.set_clip_bounds(id, Some(bounds));
    }
}

#[cfg(test)]
mod tests {
    use relief_core::geometry::{arc_end, arc_start};

    use super::*;

    #[test]
    fn rim_arcs_hug_the_lower_corners() {
        let [left, right] = rim_arcs(Rect::new(10.0, 0.0, 46.0, 36.0), 10.0);
        assert_eq!(left.center, Point::new(20.0, 28.0));
        assert_eq!(right.center, Point::new(36.0, 28.0));
        assert_eq!(left.radii.x, 11.0);
        assert!((arc_start(&left) - Point::new(9.0, 28.0)).hypot() < 1e-9, "starts left");
        assert!((arc_end(&left) - Point::new(20.0, 39.0)).hypot() < 1e-9, "dips down");
        assert!((arc_end(&right) - Point::new(47.0, 28.0)).hypot() < 1e-9, "ends right");
    }

    #[test]
    fn thumb_clip_is_inset_track() {
        let clip = thumb_clip(Rect::new(0.0, 0.0, 80.0, 40.0), 12.0);
        assert_eq!(clip.rect(), Rect::new(1.0, 1.0, 79.0, 39.0));
        assert_eq!(clip.radii().top_left, 11.0);
        assert_eq!(thumb_clip(Rect::new(0.0, 0.0, 4.0, 4.0), 0.5).radii().top_left, 0.0);
    }
}
