// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The classic on/off switch with an indicator lamp.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use peniko::{Color, Gradient};
use relief_core::elevation::Elevation;
use relief_core::shadow::ShadowRole;
use relief_core::style::{BezelStyle, ShadowPalette, SurfaceStyle};
use relief_core::surface::{SurfaceId, SurfaceStore};

use crate::indicator::{self, IndicatorLight};
use crate::motion::{TRANSITION_DURATION, ThumbMotion};
use crate::widget::{
    SwitchToggled, ThumbRimDecoration, Widget, clip_surface, leading_origin, move_surface,
    thumb_clip,
};

/// Size of the track.
pub const TRACK_SIZE: Size = Size::new(51.0, 31.0);

/// Size of the thumb: the track height minus a 1 pt bezel and a 1 pt gap on
/// each side.
pub const THUMB_SIZE: Size = Size::new(TRACK_SIZE.height - 4.0, TRACK_SIZE.height - 4.0);

/// Horizontal distance of the thumb center from the track center.
pub const THUMB_OFFSET: f64 = TRACK_SIZE.width / 2.0 - THUMB_SIZE.width / 2.0 - 2.0;

/// Gap between the track and the indicator lamp.
pub const INDICATOR_MARGIN: f64 = 8.0;

/// Elevation of the track.
pub const TRACK_ELEVATION: Elevation = Elevation::Custom(-3.0);

/// Elevation of the thumb.
pub const THUMB_ELEVATION: Elevation = Elevation::Custom(2.0);

/// Default track color.
pub const DEFAULT_TRACK_COLOR: Color = Color::from_rgb8(222, 232, 242);

/// Default upper-left color of the thumb gradient.
pub const DEFAULT_THUMB_UPPER_LEFT: Color = Color::from_rgb8(227, 237, 247);

/// Default lower-right color of the thumb gradient.
pub const DEFAULT_THUMB_LOWER_RIGHT: Color = Color::WHITE;

/// Stop offsets of the thumb gradient along its diagonal.
pub const THUMB_GRADIENT_STOPS: [f32; 2] = [-0.3, 1.5];

/// A 51×31 switch with a raised round thumb and an LED to its right.
///
/// The track has no bright inner shadow and the thumb no bright outer
/// shadow. The thumb is clipped to the track inset by 1 pt and carries a
/// [`ThumbRimDecoration`]. The lamp lights with the on tint while the switch
/// is on.
#[derive(Debug)]
pub struct Switch {
    track: SurfaceId,
    thumb: SurfaceId,
    indicator: IndicatorLight,
    on: bool,
    motion: ThumbMotion,
    thumb_colors: [Color; 2],
}

impl Switch {
    /// Creates a switch in the off position.
    pub fn new(store: &mut SurfaceStore) -> Self {
        let track_style = SurfaceStyle::default()
            .with_palette(
                ShadowPalette::default().with_color(ShadowRole::InnerBright, Color::TRANSPARENT),
            )
            .with_bezel(BezelStyle::default().with_width(1.0))
            .with_background(DEFAULT_TRACK_COLOR);
        let track = store.create_surface_with(track_style, None);
        store.set_size(track, TRACK_SIZE);
        store.set_corner_radius(track, TRACK_SIZE.height / 2.0);
        store.set_elevation(track, TRACK_ELEVATION);

        let thumb_style = SurfaceStyle::default()
            .with_palette(
                ShadowPalette::default().with_color(ShadowRole::OuterBright, Color::TRANSPARENT),
            )
            .with_background(DEFAULT_THUMB_UPPER_LEFT);
        let thumb = store.create_surface_with(thumb_style, None);
        store.set_size(thumb, THUMB_SIZE);
        store.set_corner_radius(thumb, THUMB_SIZE.width / 2.0);
        store.set_elevation(thumb, THUMB_ELEVATION);

        let indicator = IndicatorLight::new(store);

        let switch = Self {
            track,
            thumb,
            indicator,
            on: false,
            motion: ThumbMotion::settled(-THUMB_OFFSET),
            thumb_colors: [DEFAULT_THUMB_UPPER_LEFT, DEFAULT_THUMB_LOWER_RIGHT],
        };
        switch.place_thumb(store);
        switch
    }

    /// Whether the switch is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// The track surface.
    #[must_use]
    pub fn track(&self) -> SurfaceId {
        self.track
    }

    /// The thumb surface.
    #[must_use]
    pub fn thumb(&self) -> SurfaceId {
        self.thumb
    }

    /// The indicator lamp.
    #[must_use]
    pub fn indicator(&self) -> &IndicatorLight {
        &self.indicator
    }

    /// Current thumb offset from the track center.
    #[must_use]
    pub fn thumb_offset(&self) -> f64 {
        self.motion.value()
    }

    /// The running thumb motion.
    #[must_use]
    pub fn motion(&self) -> &ThumbMotion {
        &self.motion
    }

    /// Turns the switch on or off, optionally animating the thumb.
    ///
    /// The thumb is always sent to the position matching `on`, even if the
    /// state does not change. Returns a notification only when it does.
    pub fn set_on(
        &mut self,
        store: &mut SurfaceStore,
        on: bool,
        animated: bool,
    ) -> Option<SwitchToggled> {
        let changed = self.on != on;
        self.on = on;
        let target = if on { THUMB_OFFSET } else { -THUMB_OFFSET };
        let duration = if animated { TRANSITION_DURATION } else { 0.0 };
        self.motion.retarget(target, duration);
        self.place_thumb(store);
        self.indicator.set_on(store, on);
        changed.then_some(SwitchToggled { on })
    }

    /// Flips the state with animation, as a tap does.
    pub fn toggle(&mut self, store: &mut SurfaceStore) -> Option<SwitchToggled> {
        self.set_on(store, !self.on, true)
    }

    /// Steps the thumb animation by `dt` seconds.
    ///
    /// Returns `true` while the thumb is still moving.
    pub fn advance(&mut self, store: &mut SurfaceStore, dt: f64) -> bool {
        self.motion.advance(dt);
        self.place_thumb(store);
        !self.motion.is_finished()
    }

    /// Sets the lamp color used while on.
    pub fn set_on_tint(&mut self, store: &mut SurfaceStore, color: Color) {
        self.indicator.set_on_tint(store, color);
    }

    /// Sets the track color.
    pub fn set_track_color(&mut self, store: &mut SurfaceStore, color: Color) {
        store.set_background(self.track, Some(color));
    }

    /// Sets the two thumb gradient colors.
    pub fn set_thumb_colors(
        &mut self,
        store: &mut SurfaceStore,
        upper_left: Color,
        lower_right: Color,
    ) {
        self.thumb_colors = [upper_left, lower_right];
        store.set_background(self.thumb, Some(upper_left));
    }

    /// Diagonal sheen the host paints over the thumb fill, in thumb-local
    /// coordinates.
    #[must_use]
    pub fn thumb_gradient(&self) -> Gradient {
        let [upper_left, lower_right] = self.thumb_colors;
        Gradient::new_linear((0.0, 0.0), (THUMB_SIZE.width, THUMB_SIZE.height)).with_stops([
            (THUMB_GRADIENT_STOPS[0], upper_left),
            (THUMB_GRADIENT_STOPS[1], lower_right),
        ])
    }

    /// Shadowed rim under the thumb at its current position.
    #[must_use]
    pub fn thumb_rim(&self, store: &SurfaceStore) -> ThumbRimDecoration {
        ThumbRimDecoration::for_thumb(store.frame(self.thumb), store.corner_radius(self.thumb))
    }

    fn place_thumb(&self, store: &mut SurfaceStore) {
        let track = store.frame(self.track);
        let center = track.center() + Vec2::new(self.motion.value(), 0.0);
        let origin = Point::new(
            center.x - THUMB_SIZE.width / 2.0,
            center.y - THUMB_SIZE.height / 2.0,
        );
        move_surface(store, self.thumb, origin);
        clip_surface(store, self.thumb, thumb_clip(track, TRACK_SIZE.height / 2.0));
    }
}

impl Widget for Switch {
    fn intrinsic_size(&self) -> Size {
        Size::new(
            TRACK_SIZE.width + INDICATOR_MARGIN + indicator::SIZE.width,
            TRACK_SIZE.height,
        )
    }

    fn layout(&mut self, store: &mut SurfaceStore, frame: Rect) {
        let track = Rect::from_origin_size(leading_origin(frame, TRACK_SIZE), TRACK_SIZE);
        store.set_frame(self.track, track);
        self.place_thumb(store);

        let lamp_frame = Rect::new(
            track.x1 + INDICATOR_MARGIN,
            frame.y0,
            track.x1 + INDICATOR_MARGIN + indicator::SIZE.width,
            frame.y1,
        );
        self.indicator.layout(store, lamp_frame);
    }

    fn surfaces(&self) -> Vec<SurfaceId> {
        let mut surfaces = Vec::from([self.track, self.thumb]);
        surfaces.extend(self.indicator.surfaces());
        surfaces
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Shape;
    use relief_core::elevation::Polarity;

    use super::*;

    fn laid_out(store: &mut SurfaceStore) -> Switch {
        let mut switch = Switch::new(store);
        let size = switch.intrinsic_size();
        switch.layout(store, Rect::from_origin_size((0.0, 0.0), size));
        store.recompute();
        switch
    }

    #[test]
    fn layout_constants() {
        assert_eq!(THUMB_SIZE, Size::new(27.0, 27.0));
        assert_eq!(THUMB_OFFSET, 10.0);
        let mut store = SurfaceStore::new();
        let switch = Switch::new(&mut store);
        assert_eq!(switch.intrinsic_size(), Size::new(67.0, 31.0));
    }

    #[test]
    fn parts_are_styled() {
        let mut store = SurfaceStore::new();
        let switch = laid_out(&mut store);

        assert_eq!(store.polarity(switch.track()), Polarity::Recessed);
        assert_eq!(store.polarity(switch.thumb()), Polarity::Raised);
        assert_eq!(store.corner_radius(switch.track()), 15.5);
        assert_eq!(store.corner_radius(switch.thumb()), 13.5);
        assert_eq!(store.style(switch.track()).bezel.width(), 1.0);
        assert_eq!(
            store.style(switch.track()).palette.inner_bright,
            Color::TRANSPARENT,
            "track has no bright inner shadow"
        );
        assert_eq!(
            store.style(switch.thumb()).palette.outer_bright,
            Color::TRANSPARENT,
            "thumb has no bright outer shadow"
        );
        assert_eq!(
            store.frame(switch.indicator().surface()),
            Rect::new(59.0, 11.5, 67.0, 19.5)
        );
    }

    #[test]
    fn thumb_starts_at_negative_offset() {
        let mut store = SurfaceStore::new();
        let switch = laid_out(&mut store);
        let thumb = store.frame(switch.thumb());
        assert_eq!(thumb.center(), Point::new(25.5 - THUMB_OFFSET, 15.5));
        assert!(!switch.is_on(), "switches start off");
    }

    #[test]
    fn toggling_twice_returns_home() {
        let mut store = SurfaceStore::new();
        let mut switch = laid_out(&mut store);
        let home = store.frame(switch.thumb());

        for _ in 0..2 {
            assert_eq!(
                switch.set_on(&mut store, true, false),
                Some(SwitchToggled { on: true })
            );
            store.recompute();
            assert!(switch.indicator().is_on(), "lamp follows the switch");
            assert_eq!(switch.thumb_offset(), THUMB_OFFSET);

            assert_eq!(
                switch.set_on(&mut store, false, false),
                Some(SwitchToggled { on: false })
            );
            store.recompute();
        }

        assert!(!switch.is_on(), "ends off");
        assert_eq!(switch.thumb_offset(), -THUMB_OFFSET);
        assert_eq!(store.frame(switch.thumb()), home);
    }

    #[test]
    fn setting_same_state_is_silent() {
        let mut store = SurfaceStore::new();
        let mut switch = laid_out(&mut store);
        assert_eq!(switch.set_on(&mut store, false, false), None);
        let changes = store.recompute();
        assert!(changes.updated.is_empty(), "nothing moved");
    }

    #[test]
    fn animated_toggle_moves_the_thumb_each_frame() {
        let mut store = SurfaceStore::new();
        let mut switch = laid_out(&mut store);

        assert_eq!(switch.toggle(&mut store), Some(SwitchToggled { on: true }));
        assert_eq!(switch.thumb_offset(), -THUMB_OFFSET, "thumb has not moved yet");

        assert!(switch.advance(&mut store, 0.1), "still moving half way");
        assert!(switch.thumb_offset().abs() < 1e-9, "thumb centered half way");
        let changes = store.recompute();
        assert!(
            changes.updated.contains(&switch.thumb().index()),
            "moving thumb is recomputed"
        );

        assert!(!switch.advance(&mut store, 0.1), "motion done");
        assert_eq!(switch.thumb_offset(), THUMB_OFFSET);
    }

    #[test]
    fn thumb_is_clipped_to_the_inset_track() {
        let mut store = SurfaceStore::new();
        let switch = laid_out(&mut store);
        let clip = store.clip_bounds(switch.thumb()).expect("thumb is clipped");
        assert_eq!(clip.rect(), Rect::new(1.0, 1.0, 50.0, 30.0));
        assert_eq!(clip.radii().top_left, 14.5);
        assert_eq!(store.render_plan(switch.thumb()).clip_bounds, Some(clip));
        assert_eq!(store.clip_bounds(switch.track()), None, "track is not clipped");
    }

    #[test]
    fn thumb_rim_follows_the_thumb() {
        let mut store = SurfaceStore::new();
        let mut switch = laid_out(&mut store);

        // Thumb at (2, 2)..(29, 29): rim centered at (15.5, 17.5), radius 14.5.
        let rim = switch.thumb_rim(&store);
        assert_eq!(rim.stroke_width, 1.0);
        assert_eq!(rim.shadow_opacity, 0.25);
        assert_eq!(rim.shadow_blur, 0.5);
        let bounds = rim.path.bounding_box();
        assert!((bounds.x0 - 1.0).abs() < 1e-6, "1 pt left of the thumb: {bounds:?}");
        assert!((bounds.x1 - 30.0).abs() < 1e-6, "1 pt right of the thumb: {bounds:?}");
        assert!((bounds.y0 - 17.5).abs() < 1e-6, "starts level with the center: {bounds:?}");
        assert!((bounds.y1 - 32.0).abs() < 1e-6, "dips 3 pt below: {bounds:?}");

        switch.set_on(&mut store, true, false);
        let moved = switch.thumb_rim(&store).path.bounding_box();
        assert!((moved.x0 - 21.0).abs() < 1e-6, "rim moves with the thumb: {moved:?}");
        assert_eq!(
            store.clip_bounds(switch.thumb()).map(|clip| clip.rect()),
            Some(Rect::new(1.0, 1.0, 50.0, 30.0)),
            "clip stays with the track"
        );
    }

    #[test]
    fn thumb_gradient_spans_the_thumb() {
        let mut store = SurfaceStore::new();
        let switch = Switch::new(&mut store);
        let gradient = switch.thumb_gradient();
        let offsets: Vec<f32> = gradient.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, THUMB_GRADIENT_STOPS);
    }
}
