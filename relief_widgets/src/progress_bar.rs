// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A horizontal progress bar.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{BezPath, Point, Rect, RoundedRect, Size, Vec2};
use peniko::{Color, Gradient};
use relief_core::elevation::Elevation;
use relief_core::geometry::{Winding, circular_arc, path_from_arcs};
use relief_core::shadow::ShadowRole;
use relief_core::style::{ShadowPalette, SurfaceStyle};
use relief_core::surface::{SurfaceId, SurfaceStore};

use crate::motion::{TRANSITION_DURATION, ThumbMotion};
use crate::widget::{Widget, clip_surface, move_surface};

/// Height of the track.
pub const HEIGHT: f64 = 16.0;

/// Height of the indicator.
pub const INDICATOR_HEIGHT: f64 = HEIGHT - 3.0;

/// Corner radius of the indicator.
pub const INDICATOR_RADIUS: f64 = INDICATOR_HEIGHT / 2.0;

/// Inset of the indicator from the track's top and leading edges, and from
/// its trailing edge at full progress.
pub const INDICATOR_MARGIN: f64 = 2.0;

/// Elevation of the track.
pub const TRACK_ELEVATION: Elevation = Elevation::ConcaveSlight;

/// Elevation of the indicator.
pub const INDICATOR_ELEVATION: Elevation = Elevation::Custom(2.0);

/// Default track color.
pub const DEFAULT_TRACK_COLOR: Color = Color::from_rgb8(227, 237, 247);

/// Default left color of the indicator gradient.
pub const DEFAULT_LEFT_TINT: Color = Color::from_rgb8(236, 242, 248);

/// Default right color of the indicator gradient.
pub const DEFAULT_RIGHT_TINT: Color = Color::from_rgb8(213, 223, 234);

/// Stop offsets of the indicator gradient.
pub const GRADIENT_STOPS: [f32; 2] = [-0.3, 1.5];

/// Color of the shadow under the indicator's bottom edge.
pub const SMILE_COLOR: Color = Color::from_rgb8(39, 88, 126);

/// Opacity of the bottom-edge shadow.
pub const SMILE_OPACITY: f32 = 0.55;

/// Blur radius of the bottom-edge shadow.
pub const SMILE_BLUR: f64 = 1.0;

/// Offset of the bottom-edge shadow.
pub const SMILE_OFFSET: Vec2 = Vec2::new(0.0, -1.0);

/// Paint the host layers over the indicator fill, in indicator-local
/// coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorDecoration {
    /// Horizontal gradient filling the indicator.
    pub gradient: Gradient,
    /// Open curve along the bottom edge, stroked 1 pt wide and used as the
    /// silhouette of a small upward shadow.
    pub smile: BezPath,
    /// Shadow color of the smile.
    pub smile_color: Color,
    /// Shadow opacity of the smile.
    pub smile_opacity: f32,
    /// Shadow blur radius of the smile.
    pub smile_blur: f64,
    /// Shadow offset of the smile.
    pub smile_offset: Vec2,
}

/// A 16 pt high recessed track with a raised indicator growing from the
/// leading edge.
///
/// The indicator is a raised surface at elevation 2 with no bright outer
/// shadow, so its only shadow is the dark outer one: offset (1, 0.5), blur 2.
/// The indicator and its shadow are clipped to the track.
#[derive(Debug)]
pub struct ProgressBar {
    track: SurfaceId,
    indicator: SurfaceId,
    progress: f32,
    width: ThumbMotion,
    tints: [Color; 2],
}

impl ProgressBar {
    /// Creates an empty progress bar.
    pub fn new(store: &mut SurfaceStore) -> Self {
        let track_style = SurfaceStyle::default().with_background(DEFAULT_TRACK_COLOR);
        let track = store.create_surface_with(track_style, None);
        store.set_size(track, Size::new(0.0, HEIGHT));
        store.set_corner_radius(track, HEIGHT / 2.0);
        store.set_elevation(track, TRACK_ELEVATION);

        let indicator_style = SurfaceStyle::default()
            .with_palette(
                ShadowPalette::default().with_color(ShadowRole::OuterBright, Color::TRANSPARENT),
            )
            .with_background(DEFAULT_LEFT_TINT);
        let indicator = store.create_surface_with(indicator_style, None);
        store.set_corner_radius(indicator, INDICATOR_RADIUS);
        store.set_elevation(indicator, INDICATOR_ELEVATION);

        let bar = Self {
            track,
            indicator,
            progress: 0.0,
            width: ThumbMotion::settled(0.0),
            tints: [DEFAULT_LEFT_TINT, DEFAULT_RIGHT_TINT],
        };
        bar.place_indicator(store);
        bar
    }

    /// The track surface.
    #[must_use]
    pub fn track(&self) -> SurfaceId {
        self.track
    }

    /// The indicator surface.
    #[must_use]
    pub fn indicator(&self) -> SurfaceId {
        self.indicator
    }

    /// Current progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current indicator width.
    #[must_use]
    pub fn indicator_width(&self) -> f64 {
        self.width.value()
    }

    /// Sets the progress, optionally animating the indicator width.
    ///
    /// Values outside `[0, 1]` are clamped; NaN counts as zero. Returns the
    /// width transition, which lasts 0.2 s when animated and is settled
    /// otherwise.
    pub fn set_progress(
        &mut self,
        store: &mut SurfaceStore,
        progress: f32,
        animated: bool,
    ) -> ThumbMotion {
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let duration = if animated { TRANSITION_DURATION } else { 0.0 };
        self.width.retarget(self.target_width(store), duration);
        self.place_indicator(store);
        self.width
    }

    /// Steps the width animation by `dt` seconds.
    ///
    /// Returns `true` while the indicator is still resizing.
    pub fn advance(&mut self, store: &mut SurfaceStore, dt: f64) -> bool {
        self.width.advance(dt);
        self.place_indicator(store);
        !self.width.is_finished()
    }

    /// Sets the track color.
    pub fn set_track_color(&mut self, store: &mut SurfaceStore, color: Color) {
        store.set_background(self.track, Some(color));
    }

    /// Sets the two indicator gradient colors.
    pub fn set_tints(&mut self, store: &mut SurfaceStore, left: Color, right: Color) {
        self.tints = [left, right];
        store.set_background(self.indicator, Some(left));
    }

    /// Gradient and bottom-edge shadow for the current indicator width.
    #[must_use]
    pub fn decoration(&self) -> IndicatorDecoration {
        let width = self.indicator_width();
        let [left, right] = self.tints;
        let mid = INDICATOR_HEIGHT / 2.0;
        IndicatorDecoration {
            gradient: Gradient::new_linear((0.0, mid), (width, mid))
                .with_stops([(GRADIENT_STOPS[0], left), (GRADIENT_STOPS[1], right)]),
            smile: smile_path(width),
            smile_color: SMILE_COLOR,
            smile_opacity: SMILE_OPACITY,
            smile_blur: SMILE_BLUR,
            smile_offset: SMILE_OFFSET,
        }
    }

    fn target_width(&self, store: &SurfaceStore) -> f64 {
        let track_width = store.frame(self.track).width();
        (f64::from(self.progress) * (track_width - 2.0 * INDICATOR_MARGIN)).max(0.0)
    }

    fn place_indicator(&self, store: &mut SurfaceStore) {
        let track = store.frame(self.track);
        clip_surface(store, self.indicator, RoundedRect::from_rect(track, HEIGHT / 2.0));
        let size = Size::new(self.width.value(), INDICATOR_HEIGHT);
        if store.frame(self.indicator).size() != size {
            store.set_size(self.indicator, size);
        }
        let origin = Point::new(track.x0 + INDICATOR_MARGIN, track.y0 + INDICATOR_MARGIN);
        move_surface(store, self.indicator, origin);
    }
}

/// Lower-left quarter circle, bottom edge, lower-right quarter circle, one
/// point outside the indicator outline.
fn smile_path(width: f64) -> BezPath {
    let r = INDICATOR_RADIUS;
    path_from_arcs(
        &[
            circular_arc(Point::new(r, r), r + 1.0, PI, FRAC_PI_2, Winding::CounterClockwise),
            circular_arc(
                Point::new(width - r, r),
                r + 1.0,
                FRAC_PI_2,
                0.0,
                Winding::CounterClockwise,
            ),
        ],
        false,
    )
}

impl Widget for ProgressBar {
    fn intrinsic_size(&self) -> Size {
        Size::new(0.0, HEIGHT)
    }

    fn layout(&mut self, store: &mut SurfaceStore, frame: Rect) {
        let y0 = frame.center().y - HEIGHT / 2.0;
        store.set_frame(self.track, Rect::new(frame.x0, y0, frame.x1, y0 + HEIGHT));
        self.width = ThumbMotion::settled(self.target_width(store));
        self.place_indicator(store);
    }

    fn surfaces(&self) -> Vec<SurfaceId> {
        Vec::from([self.track, self.indicator])
    }
}
