// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A wide switch whose thumb can be dragged.
//!
//! Besides taps, the [`SlideSwitch`] follows a horizontal pan gesture. The
//! host forwards the gesture's translation since it began:
//!
//! - [`pan_changed`](SlideSwitch::pan_changed) moves the thumb with the
//!   finger, clamped to the track ends.
//! - [`pan_ended`](SlideSwitch::pan_ended) settles on the side the thumb is
//!   on.
//! - [`pan_cancelled`](SlideSwitch::pan_cancelled) settles off.
//!
//! An off-tint overlay between the track and the thumb fades out as the
//! thumb travels toward the on side. The thumb and its grip dots are clipped
//! to the overlay's bounds, the track inset by 1 pt.

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};
use peniko::Color;
use relief_core::elevation::Elevation;
use relief_core::shadow::ShadowRole;
use relief_core::style::{BezelStyle, ShadowPalette, SurfaceStyle};
use relief_core::surface::{SurfaceId, SurfaceStore};

use crate::motion::{TRANSITION_DURATION, ThumbMotion};
use crate::widget::{
    SwitchFeedback, SwitchToggled, ThumbRimDecoration, Widget, clip_surface, leading_origin,
    move_surface, thumb_clip,
};

/// Size of the track.
pub const TRACK_SIZE: Size = Size::new(80.0, 40.0);

/// Corner radius of the track.
pub const TRACK_RADIUS: f64 = 12.0;

/// Size of the thumb.
pub const THUMB_SIZE: Size = Size::new(TRACK_SIZE.height - 4.0, TRACK_SIZE.height - 4.0);

/// Corner radius of the thumb.
pub const THUMB_RADIUS: f64 = 10.0;

/// Horizontal distance of the thumb center from the track center.
pub const THUMB_OFFSET: f64 = TRACK_SIZE.width / 2.0 - THUMB_SIZE.width / 2.0 - 2.0;

/// Elevation of the track.
pub const TRACK_ELEVATION: Elevation = Elevation::Custom(-3.0);

/// Elevation of the thumb.
pub const THUMB_ELEVATION: Elevation = Elevation::Custom(2.0);

/// Size of one grip dot.
pub const DOT_SIZE: Size = Size::new(6.0, 6.0);

/// Distance between neighboring grip dots, origin to origin.
pub const DOT_SPACING: f64 = 10.0;

/// Elevation of the grip dots.
pub const DOT_ELEVATION: Elevation = Elevation::Custom(1.0);

/// Default thumb color.
pub const DEFAULT_THUMB_COLOR: Color = Color::from_rgb8(227, 237, 247);

/// Default track color, visible when on.
pub const DEFAULT_ON_TINT: Color = Color::from_rgb8(222, 232, 242);

/// Default overlay color, visible when off.
pub const DEFAULT_OFF_TINT: Color = Color::from_rgb8(161, 184, 207);

/// Default grip dot color.
pub const DEFAULT_DOT_COLOR: Color = Color::from_rgb8(214, 224, 234);

/// Lower-right bezel color of the grip dots.
pub const DOT_BEZEL_LOWER_RIGHT: Color = Color::from_rgb8(178, 195, 214);

const OVERLAY_INSET: f64 = 1.0;

/// An 80×40 switch with a draggable thumb carrying four grip dots.
#[derive(Debug)]
pub struct SlideSwitch {
    track: SurfaceId,
    overlay: SurfaceId,
    thumb: SurfaceId,
    dots: [SurfaceId; 4],
    on: bool,
    motion: ThumbMotion,
    off_tint: Color,
}

impl SlideSwitch {
    /// Creates a switch in the off position.
    pub fn new(store: &mut SurfaceStore) -> Self {
        let track_style = SurfaceStyle::default()
            .with_palette(
                ShadowPalette::default().with_color(ShadowRole::InnerBright, Color::TRANSPARENT),
            )
            .with_bezel(BezelStyle::default().with_width(1.0))
            .with_background(DEFAULT_ON_TINT);
        let track = store.create_surface_with(track_style, None);
        store.set_size(track, TRACK_SIZE);
        store.set_corner_radius(track, TRACK_RADIUS);
        store.set_elevation(track, TRACK_ELEVATION);

        let overlay_style = SurfaceStyle::default()
            .with_palette(ShadowPalette {
                outer_bright: Color::TRANSPARENT,
                outer_dark: Color::TRANSPARENT,
                inner_bright: Color::TRANSPARENT,
                inner_dark: Color::TRANSPARENT,
            })
            .with_background(DEFAULT_OFF_TINT);
        let overlay = store.create_surface_with(overlay_style, None);
        store.set_size(overlay, overlay_size());
        store.set_corner_radius(overlay, TRACK_RADIUS - OVERLAY_INSET);

        let thumb_style = SurfaceStyle::default()
            .with_palette(
                ShadowPalette::default().with_color(ShadowRole::OuterBright, Color::TRANSPARENT),
            )
            .with_background(DEFAULT_THUMB_COLOR);
        let thumb = store.create_surface_with(thumb_style, None);
        store.set_size(thumb, THUMB_SIZE);
        store.set_corner_radius(thumb, THUMB_RADIUS);
        store.set_elevation(thumb, THUMB_ELEVATION);

        let dot_style = SurfaceStyle::default()
            .with_bezel(
                BezelStyle::default()
                    .with_width(1.0)
                    .with_colors(Color::WHITE, DOT_BEZEL_LOWER_RIGHT),
            )
            .with_background(DEFAULT_DOT_COLOR);
        let dots = [(); 4].map(|()| {
            let dot = store.create_surface_with(dot_style, None);
            store.set_size(dot, DOT_SIZE);
            store.set_corner_radius(dot, DOT_SIZE.width / 2.0);
            store.set_elevation(dot, DOT_ELEVATION);
            dot
        });

        let switch = Self {
            track,
            overlay,
            thumb,
            dots,
            on: false,
            motion: ThumbMotion::settled(-THUMB_OFFSET),
            off_tint: DEFAULT_OFF_TINT,
        };
        switch.place_parts(store);
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

    /// The off-tint overlay surface.
    #[must_use]
    pub fn overlay(&self) -> SurfaceId {
        self.overlay
    }

    /// The thumb surface.
    #[must_use]
    pub fn thumb(&self) -> SurfaceId {
        self.thumb
    }

    /// The four grip dots: top-left, bottom-left, top-right, bottom-right.
    #[must_use]
    pub fn dots(&self) -> [SurfaceId; 4] {
        self.dots
    }

    /// Current thumb offset from the track center.
    #[must_use]
    pub fn thumb_offset(&self) -> f64 {
        self.motion.value()
    }

    /// Overlay opacity for the current thumb position: 1 fully off, 0 fully
    /// on.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "alpha in [0, 1] is exact enough as f32"
    )]
    pub fn overlay_alpha(&self) -> f32 {
        let ratio = 1.0 - (self.thumb_offset() + THUMB_OFFSET) / (2.0 * THUMB_OFFSET);
        ratio.clamp(0.0, 1.0) as f32
    }

    /// Turns the switch on or off, optionally animating the thumb.
    ///
    /// Returns a notification only when the state changes.
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
        self.place_parts(store);
        changed.then_some(SwitchToggled { on })
    }

    /// Flips the state with animation, as a tap does.
    pub fn toggle(&mut self, store: &mut SurfaceStore) -> SwitchFeedback {
        SwitchFeedback {
            haptic: true,
            toggled: self.set_on(store, !self.on, true),
        }
    }

    /// Moves the thumb to follow a pan `translation` along x.
    ///
    /// The thumb stops at either end of the track; reaching an end it was
    /// not already resting on asks for a haptic tick.
    pub fn pan_changed(&mut self, store: &mut SurfaceStore, translation: f64) -> SwitchFeedback {
        let current = self.thumb_offset();
        let (target, haptic) = if translation >= THUMB_OFFSET {
            (THUMB_OFFSET, current != THUMB_OFFSET)
        } else if translation <= -THUMB_OFFSET {
            (-THUMB_OFFSET, current != -THUMB_OFFSET)
        } else {
            (translation, false)
        };
        self.motion = ThumbMotion::settled(target);
        self.place_parts(store);
        SwitchFeedback {
            haptic,
            toggled: None,
        }
    }

    /// Finishes a pan, settling on the side of the current thumb position.
    ///
    /// A thumb released between the ends asks for a haptic tick.
    pub fn pan_ended(&mut self, store: &mut SurfaceStore) -> SwitchFeedback {
        let current = self.thumb_offset();
        let haptic = current != THUMB_OFFSET && current != -THUMB_OFFSET;
        SwitchFeedback {
            haptic,
            toggled: self.set_on(store, current > 0.0, true),
        }
    }

    /// Aborts a pan, settling in the off position.
    pub fn pan_cancelled(&mut self, store: &mut SurfaceStore) -> SwitchFeedback {
        SwitchFeedback {
            haptic: false,
            toggled: self.set_on(store, false, true),
        }
    }

    /// Steps the thumb animation by `dt` seconds.
    ///
    /// Returns `true` while the thumb is still moving.
    pub fn advance(&mut self, store: &mut SurfaceStore, dt: f64) -> bool {
        self.motion.advance(dt);
        self.place_parts(store);
        !self.motion.is_finished()
    }

    /// Sets the track color shown when on.
    pub fn set_on_tint(&mut self, store: &mut SurfaceStore, color: Color) {
        store.set_background(self.track, Some(color));
    }

    /// Sets the overlay color shown when off.
    pub fn set_off_tint(&mut self, store: &mut SurfaceStore, color: Color) {
        self.off_tint = color;
        self.place_parts(store);
    }

    /// Shadowed rim under the thumb at its current position.
    #[must_use]
    pub fn thumb_rim(&self, store: &SurfaceStore) -> ThumbRimDecoration {
        ThumbRimDecoration::for_thumb(store.frame(self.thumb), THUMB_RADIUS)
    }

    /// Moves the thumb and dots and fades the overlay to match the thumb.
    fn place_parts(&self, store: &mut SurfaceStore) {
        let track = store.frame(self.track);
        let center = track.center() + Vec2::new(self.thumb_offset(), 0.0);
        let thumb_origin = center - THUMB_SIZE.to_vec2() / 2.0;
        move_surface(store, self.thumb, thumb_origin);

        let clip = thumb_clip(track, TRACK_RADIUS);
        for id in core::iter::once(self.thumb).chain(self.dots) {
            clip_surface(store, id, clip);
        }

        let grid = DOT_SPACING + DOT_SIZE.width;
        let grid_origin = center - Vec2::new(grid, grid) / 2.0;
        let offsets = [
            (0.0, 0.0),
            (0.0, DOT_SPACING),
            (DOT_SPACING, 0.0),
            (DOT_SPACING, DOT_SPACING),
        ];
        for (dot, (dx, dy)) in self.dots.into_iter().zip(offsets) {
            move_surface(store, dot, grid_origin + Vec2::new(dx, dy));
        }

        let overlay_origin = track.center() - overlay_size().to_vec2() / 2.0;
        move_surface(store, self.overlay, overlay_origin);
        let tint = Some(self.off_tint.with_alpha(self.overlay_alpha()));
        if store.style(self.overlay).background != tint {
            store.set_background(self.overlay, tint);
        }
    }
}

fn overlay_size() -> Size {
    Size::new(
        TRACK_SIZE.width - 2.0 * OVERLAY_INSET,
        TRACK_SIZE.height - 2.0 * OVERLAY_INSET,
    )
}

impl Widget for SlideSwitch {
    fn intrinsic_size(&self) -> Size {
        TRACK_SIZE
    }

    fn layout(&mut self, store: &mut SurfaceStore, frame: Rect) {
        let origin = leading_origin(frame, TRACK_SIZE);
        store.set_frame(self.track, Rect::from_origin_size(origin, TRACK_SIZE));
        self.place_parts(store);
    }

    fn surfaces(&self) -> Vec<SurfaceId> {
        let mut surfaces = Vec::from([self.track, self.overlay, self.thumb]);
        surfaces.extend(self.dots);
        surfaces
    }
}
