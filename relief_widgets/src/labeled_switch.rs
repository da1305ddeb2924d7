// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A raised panel switch with an "ON"/"OFF" caption.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use relief_core::elevation::Elevation;
use relief_core::style::SurfaceStyle;
use relief_core::surface::{ContentId, SurfaceId, SurfaceStore};

use crate::motion::{TRANSITION_DURATION, ThumbMotion};
use crate::widget::{SwitchFeedback, SwitchToggled, Widget};

/// Size of the panel.
pub const PANEL_SIZE: Size = Size::new(144.0, 72.0);

/// Corner radius of the panel.
pub const PANEL_RADIUS: f64 = 12.0;

/// Elevation of the panel.
pub const PANEL_ELEVATION: Elevation = Elevation::Custom(7.0);

/// Size of the well holding the face artwork.
pub const WELL_SIZE: Size = Size::new(78.0, 60.0);

/// Corner radius of the well.
pub const WELL_RADIUS: f64 = 8.0;

/// Elevation of the well.
pub const WELL_ELEVATION: Elevation = Elevation::ConcaveSlight;

/// Gap between the well and the trailing edge of the panel.
pub const WELL_MARGIN: f64 = 7.0;

/// Size of the face artwork, centered in the well.
pub const FACE_SIZE: Size = Size::new(64.0, 50.0);

/// Default panel color.
pub const DEFAULT_PANEL_COLOR: Color = Color::from_rgb8(227, 236, 246);

/// Default well color.
pub const DEFAULT_WELL_COLOR: Color = Color::from_rgb8(214, 224, 235);

/// Default caption color.
pub const DEFAULT_LABEL_COLOR: Color = Color::from_rgb8(49, 69, 106);

/// A 144×72 raised panel with a recessed well on its trailing side.
///
/// The well holds host artwork for the pressed or released button face,
/// swapped with a cross-fade when the state changes. The caption reads
/// "ON" or "OFF" and switches once the fade completes.
#[derive(Debug)]
pub struct LabeledSwitch {
    panel: SurfaceId,
    well: SurfaceId,
    faces: [ContentId; 2],
    on: bool,
    caption_on: bool,
    fade: ThumbMotion,
}

impl LabeledSwitch {
    /// Creates a switch in the off position.
    ///
    /// `on_face` and `off_face` are host artwork for the two button faces.
    pub fn new(store: &mut SurfaceStore, on_face: ContentId, off_face: ContentId) -> Self {
        let panel_style = SurfaceStyle::default().with_background(DEFAULT_PANEL_COLOR);
        let panel = store.create_surface_with(panel_style, None);
        store.set_size(panel, PANEL_SIZE);
        store.set_corner_radius(panel, PANEL_RADIUS);
        store.set_elevation(panel, PANEL_ELEVATION);

        let well_style = SurfaceStyle::default().with_background(DEFAULT_WELL_COLOR);
        let well = store.create_surface_with(well_style, Some(off_face));
        store.set_size(well, WELL_SIZE);
        store.set_corner_radius(well, WELL_RADIUS);
        store.set_elevation(well, WELL_ELEVATION);

        let switch = Self {
            panel,
            well,
            faces: [off_face, on_face],
            on: false,
            caption_on: false,
            fade: ThumbMotion::settled(1.0),
        };
        switch.place_well(store);
        switch
    }

    /// Whether the switch is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// The panel surface.
    #[must_use]
    pub fn panel(&self) -> SurfaceId {
        self.panel
    }

    /// The well surface; its content is the current face.
    #[must_use]
    pub fn well(&self) -> SurfaceId {
        self.well
    }

    /// Caption text.
    #[must_use]
    pub fn caption(&self) -> &'static str {
        if self.caption_on { "ON" } else { "OFF" }
    }

    /// Center of the caption: midway between the panel's leading edge and
    /// the well, level with the panel center.
    #[must_use]
    pub fn caption_center(&self, store: &SurfaceStore) -> Point {
        let panel = store.frame(self.panel);
        let well = store.frame(self.well);
        Point::new((panel.x0 + well.x0) / 2.0, panel.center().y)
    }

    /// Where the host draws the face artwork, in host coordinates.
    #[must_use]
    pub fn face_frame(&self, store: &SurfaceStore) -> Rect {
        let center = store.frame(self.well).center();
        Rect::from_center_size(center, FACE_SIZE)
    }

    /// Opacity of the incoming face during a cross-fade; 1 when settled.
    #[must_use]
    pub fn face_opacity(&self) -> f64 {
        self.fade.value()
    }

    /// Turns the switch on or off, optionally cross-fading the face.
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
        let face = self.faces[usize::from(on)];
        if store.content(self.well) != Some(face) {
            store.set_content(self.well, Some(face));
        }
        if animated {
            self.fade = ThumbMotion::new(0.0, 1.0, TRANSITION_DURATION);
        } else {
            self.fade = ThumbMotion::settled(1.0);
            self.caption_on = on;
        }
        changed.then_some(SwitchToggled { on })
    }

    /// Flips the state with animation and a haptic tick, as a tap does.
    pub fn toggle(&mut self, store: &mut SurfaceStore) -> SwitchFeedback {
        SwitchFeedback {
            haptic: true,
            toggled: self.set_on(store, !self.on, true),
        }
    }

    /// Steps the face cross-fade by `dt` seconds.
    ///
    /// Returns `true` while the fade is running.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.fade.advance(dt);
        if self.fade.is_finished() {
            self.caption_on = self.on;
        }
        !self.fade.is_finished()
    }

    fn place_well(&self, store: &mut SurfaceStore) {
        let panel = store.frame(self.panel);
        let origin = Point::new(
            panel.x1 - WELL_MARGIN - WELL_SIZE.width,
            panel.center().y - WELL_SIZE.height / 2.0,
        );
        store.set_frame(self.well, Rect::from_origin_size(origin, WELL_SIZE));
    }
}

impl Widget for LabeledSwitch {
    fn intrinsic_size(&self) -> Size {
        PANEL_SIZE
    }

    fn layout(&mut self, store: &mut SurfaceStore, frame: Rect) {
        store.set_frame(self.panel, Rect::from_center_size(frame.center(), PANEL_SIZE));
        self.place_well(store);
    }

    fn surfaces(&self) -> Vec<SurfaceId> {
        Vec::from([self.panel, self.well])
    }
}

#[cfg(test)]
mod tests {
    use relief_core::elevation::Polarity;

    use super::*;

    const ON: ContentId = ContentId(1);
    const OFF: ContentId = ContentId(2);

    fn laid_out(store: &mut SurfaceStore) -> LabeledSwitch {
        let mut switch = LabeledSwitch::new(store, ON, OFF);
        switch.layout(store, Rect::new(0.0, 0.0, 144.0, 72.0));
        store.recompute();
        switch
    }

    #[test]
    fn panel_and_well_geometry() {
        let mut store = SurfaceStore::new();
        let switch = laid_out(&mut store);

        assert_eq!(store.polarity(switch.panel()), Polarity::Raised);
        assert_eq!(store.polarity(switch.well()), Polarity::Recessed);
        assert_eq!(store.frame(switch.well()), Rect::new(59.0, 6.0, 137.0, 66.0));
        assert_eq!(switch.face_frame(&store), Rect::new(66.0, 11.0, 130.0, 61.0));
        assert_eq!(switch.caption_center(&store), Point::new(29.5, 36.0));
        assert_eq!(switch.caption(), "OFF");
        assert_eq!(store.content(switch.well()), Some(OFF));
    }

    #[test]
    fn immediate_toggle_swaps_face_and_caption() {
        let mut store = SurfaceStore::new();
        let mut switch = laid_out(&mut store);

        assert_eq!(
            switch.set_on(&mut store, true, false),
            Some(SwitchToggled { on: true })
        );
        assert_eq!(switch.caption(), "ON");
        assert_eq!(store.content(switch.well()), Some(ON));
        let changes = store.recompute();
        assert_eq!(changes.content, [switch.well().index()]);
    }

    #[test]
    fn caption_waits_for_the_fade() {
        let mut store = SurfaceStore::new();
        let mut switch = laid_out(&mut store);

        let feedback = switch.toggle(&mut store);
        assert!(feedback.haptic, "taps tick");
        assert_eq!(feedback.toggled, Some(SwitchToggled { on: true }));
        assert_eq!(switch.face_opacity(), 0.0);
        assert_eq!(switch.caption(), "OFF", "caption flips after the fade");

        assert!(switch.advance(0.1), "fade running");
        assert_eq!(switch.caption(), "OFF");
        assert!(!switch.advance(0.1), "fade done");
        assert_eq!(switch.caption(), "ON");
        assert_eq!(switch.face_opacity(), 1.0);
    }
}
