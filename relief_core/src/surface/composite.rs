// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-surface compositing state.
//!
//! A [`Composite`] owns the four shadow slots, the surface fill, the
//! optional bezel and the clip mask of one surface. Slots are created once
//! and mutated in place by [`Composite::update`]; hidden slots keep their
//! last geometry.

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, RoundedRect};
use peniko::{Fill, Gradient};

use super::id::ContentId;
use crate::elevation::Polarity;
use crate::geometry::{
    SurfaceGeometry, lower_right_band, outline_path, ring_path, upper_left_band,
};
use crate::plan::{
    BezelStroke, ClipMask, ContentPlacement, PlanItem, RenderItem, RenderPlan, SurfaceFill,
};
use crate::shadow::{ShadowPrimitive, ShadowRole};
use crate::style::{BezelStyle, MaskTarget, SurfaceStyle};

/// Outer slots in paint order.
const OUTER_PAIR: [ShadowRole; 2] = [ShadowRole::OuterDark, ShadowRole::OuterBright];

/// Inner slots in paint order.
const INNER_PAIR: [ShadowRole; 2] = [ShadowRole::InnerDark, ShadowRole::InnerBright];

/// What a single [`Composite::update`] changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeUpdate {
    /// Polarity before the update, if the composite had been computed.
    pub previous: Option<Polarity>,
    /// Polarity after the update.
    pub polarity: Polarity,
}

impl CompositeUpdate {
    /// Returns `true` if a computed surface switched between raised and
    /// recessed.
    #[must_use]
    pub fn flipped(&self) -> bool {
        self.previous.is_some_and(|previous| previous != self.polarity)
    }
}

/// Layer state of one surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    shadows: [ShadowPrimitive; 4],
    fill: SurfaceFill,
    bezel: Option<BezelStroke>,
    clip: Option<BezPath>,
    mask_target: MaskTarget,
    corner_radius: f64,
    polarity: Option<Polarity>,
    cancel_inner_animations: bool,
}

impl Composite {
    /// Creates the slots for a surface, all hidden.
    #[must_use]
    pub fn new(style: &SurfaceStyle) -> Self {
        Self {
            shadows: ShadowRole::ALL
                .map(|role| ShadowPrimitive::new(role, style.palette.color(role))),
            fill: SurfaceFill {
                shape: RoundedRect::from_rect(Rect::ZERO, 0.0),
                color: style.background,
            },
            bezel: None,
            clip: None,
            mask_target: style.mask_target,
            corner_radius: 0.0,
            polarity: None,
            cancel_inner_animations: false,
        }
    }

    /// Recomputes every slot for the given inputs.
    pub fn update(
        &mut self,
        geometry: SurfaceGeometry,
        magnitude: f64,
        style: &SurfaceStyle,
    ) -> CompositeUpdate {
        let size = geometry.size;
        let radius = geometry.corner_radius;
        let polarity = Polarity::of(magnitude);
        let outline = outline_path(size, radius);

        for role in ShadowRole::ALL {
            let slot = &mut self.shadows[role.index()];
            slot.set_color(style.palette.color(role));
            slot.hidden = role.polarity() != polarity;
        }

        match polarity {
            Polarity::Raised => {
                self.slot_mut(ShadowRole::OuterDark).update(outline.clone(), magnitude);
                self.slot_mut(ShadowRole::OuterBright).update(outline, magnitude);
                self.clip = None;
                self.cancel_inner_animations = true;
            }
            Polarity::Recessed => {
                self.slot_mut(ShadowRole::InnerDark)
                    .update(upper_left_band(size, radius), magnitude);
                self.slot_mut(ShadowRole::InnerBright)
                    .update(lower_right_band(size, radius), magnitude);
                self.clip = Some(outline);
                self.cancel_inner_animations = false;
            }
        }

        self.fill = SurfaceFill {
            shape: RoundedRect::from_origin_size(Point::ZERO, size, radius),
            color: style.background,
        };
        self.bezel = style
            .bezel
            .is_visible()
            .then(|| bezel_stroke(geometry, &style.bezel));
        self.mask_target = style.mask_target;
        self.corner_radius = radius;

        let previous = self.polarity.replace(polarity);
        CompositeUpdate { previous, polarity }
    }

    /// Returns the slot for `role`.
    #[must_use]
    pub fn shadow(&self, role: ShadowRole) -> &ShadowPrimitive {
        &self.shadows[role.index()]
    }

    /// Returns the four slots in [`ShadowRole::ALL`] order.
    #[must_use]
    pub fn shadows(&self) -> &[ShadowPrimitive; 4] {
        &self.shadows
    }

    /// Returns the surface fill.
    #[must_use]
    pub fn fill(&self) -> &SurfaceFill {
        &self.fill
    }

    /// Returns the bezel, if one is drawn.
    #[must_use]
    pub fn bezel(&self) -> Option<&BezelStroke> {
        self.bezel.as_ref()
    }

    /// Returns the clip outline. Only recessed surfaces have one.
    #[must_use]
    pub fn clip(&self) -> Option<&BezPath> {
        self.clip.as_ref()
    }

    /// Returns the polarity of the last update, or `None` before the first.
    #[must_use]
    pub fn polarity(&self) -> Option<Polarity> {
        self.polarity
    }

    /// Returns `true` if the last update entered or stayed raised, which
    /// cancels any running inner-shadow animation.
    #[must_use]
    pub fn cancels_inner_animations(&self) -> bool {
        self.cancel_inner_animations
    }

    /// Builds the ordered draw list for this composite.
    ///
    /// `frame` positions the surface in host coordinates; every path in the
    /// plan stays in the surface's local space.
    #[must_use]
    pub fn plan(&self, frame: Rect, content: Option<ContentId>) -> RenderPlan {
        let polarity = self.polarity.unwrap_or(Polarity::Recessed);
        let mut items = Vec::with_capacity(6);

        let content_item = content.map(|content| RenderItem::Content(ContentPlacement {
            content,
            frame: frame.with_origin(Point::ZERO),
            corner_radius: self.corner_radius,
        }));
        let clip = match (polarity, self.mask_target, content_item) {
            (Polarity::Raised, _, content_item) => {
                items.extend(self.visible_shadows(OUTER_PAIR).map(PlanItem::unclipped));
                items.push(PlanItem::unclipped(RenderItem::Fill(self.fill.clone())));
                items.extend(self.bezel_item(false));
                items.extend(content_item.map(PlanItem::unclipped));
                None
            }
            (Polarity::Recessed, MaskTarget::Container, content_item) => {
                items.push(PlanItem::clipped(RenderItem::Fill(self.fill.clone())));
                items.extend(self.visible_shadows(INNER_PAIR).map(PlanItem::clipped));
                items.extend(self.bezel_item(true));
                items.extend(content_item.map(PlanItem::clipped));
                Some(MaskTarget::Container)
            }
            (Polarity::Recessed, MaskTarget::Content, Some(content_item)) => {
                items.push(PlanItem::unclipped(RenderItem::Fill(self.fill.clone())));
                items.push(PlanItem::clipped(content_item));
                items.extend(self.visible_shadows(INNER_PAIR).map(PlanItem::clipped));
                items.extend(self.bezel_item(false));
                Some(MaskTarget::Content)
            }
            (Polarity::Recessed, MaskTarget::Content, None) => {
                items.push(PlanItem::unclipped(RenderItem::Fill(self.fill.clone())));
                items.extend(self.visible_shadows(INNER_PAIR).map(PlanItem::unclipped));
                items.extend(self.bezel_item(false));
                None
            }
        };

        let clip = clip.and_then(|target| {
            self.clip.as_ref().map(|path| ClipMask {
                path: path.clone(),
                target,
            })
        });
        if clip.is_none() {
            // Before the first update there is no outline to clip to.
            for entry in &mut items {
                entry.clipped = false;
            }
        }

        RenderPlan {
            frame,
            polarity,
            items,
            clip,
            clip_bounds: None,
            cancel_inner_animations: self.cancel_inner_animations,
        }
    }

    fn visible_shadows(&self, roles: [ShadowRole; 2]) -> impl Iterator<Item = RenderItem> + '_ {
        let computed = self.polarity.is_some();
        roles
            .into_iter()
            .map(|role| self.shadow(role))
            .filter(move |slot| computed && !slot.hidden)
            .map(|slot| RenderItem::Shadow(slot.clone()))
    }

    fn bezel_item(&self, clipped: bool) -> Option<PlanItem> {
        self.bezel.clone().map(|bezel| PlanItem {
            item: RenderItem::Bezel(bezel),
            clipped,
        })
    }

    fn slot_mut(&mut self, role: ShadowRole) -> &mut ShadowPrimitive {
        &mut self.shadows[role.index()]
    }
}

/// Builds the even-odd ring and its diagonal gradient.
fn bezel_stroke(geometry: SurfaceGeometry, bezel: &BezelStyle) -> BezelStroke {
    let size = geometry.size;
    let [upper_left_stop, lower_right_stop] = BezelStyle::STOPS;
    BezelStroke {
        path: ring_path(size, geometry.corner_radius, bezel.width()),
        fill_rule: Fill::EvenOdd,
        brush: Gradient::new_linear((0.0, 0.0), (size.width, size.height)).with_stops([
            (upper_left_stop, bezel.upper_left),
            (lower_right_stop, bezel.lower_right.with_alpha(1.0)),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Shape, Size, Vec2};
    use peniko::Color;

    use super::*;

    fn geometry() -> SurfaceGeometry {
        SurfaceGeometry::new(Size::new(100.0, 100.0), 20.0)
    }

    fn visible(composite: &Composite) -> Vec<ShadowRole> {
        composite
            .shadows()
            .iter()
            .filter(|slot| !slot.hidden)
            .map(|slot| slot.role)
            .collect()
    }

    #[test]
    fn raised_shows_the_outer_pair() {
        let mut composite = Composite::new(&SurfaceStyle::default());
        let update = composite.update(geometry(), 5.0, &SurfaceStyle::default());
        assert_eq!(update.polarity, Polarity::Raised);
        assert!(!update.flipped(), "first update is not a flip");
        assert_eq!(visible(&composite), [ShadowRole::OuterBright, ShadowRole::OuterDark]);
        assert!(composite.clip().is_none(), "raised surfaces are unclipped");
        assert!(composite.cancels_inner_animations(), "entering raised cancels inner animations");

        let dark = composite.shadow(ShadowRole::OuterDark);
        assert_eq!(dark.offset, Vec2::new(2.5, 1.25));
        assert_eq!(dark.blur_radius, 5.0);
    }

    #[test]
    fn recessed_shows_the_inner_pair() {
        let mut composite = Composite::new(&SurfaceStyle::default());
        composite.update(geometry(), -15.0, &SurfaceStyle::default());
        assert_eq!(visible(&composite), [ShadowRole::InnerBright, ShadowRole::InnerDark]);
        assert!(!composite.cancels_inner_animations(), "recessed keeps inner animations");
        let clip = composite.clip().expect("recessed surfaces are clipped");
        assert_eq!(clip, &outline_path(Size::new(100.0, 100.0), 20.0));
        for role in [ShadowRole::InnerDark, ShadowRole::InnerBright] {
            assert_eq!(composite.shadow(role).blur_radius, 15.0, "{role:?}");
        }
    }

    #[test]
    fn flip_is_reported() {
        let style = SurfaceStyle::default();
        let mut composite = Composite::new(&style);
        composite.update(geometry(), 5.0, &style);
        let update = composite.update(geometry(), -5.0, &style);
        assert!(update.flipped(), "raised to recessed is a flip");
        assert_eq!(update.previous, Some(Polarity::Raised));
        assert!(!composite.update(geometry(), -30.0, &style).flipped(), "same polarity");
    }

    #[test]
    fn updates_are_idempotent() {
        let style = SurfaceStyle::default().with_bezel(BezelStyle::default().with_width(1.0));
        for magnitude in [-50.0, 0.0, 50.0] {
            let mut composite = Composite::new(&style);
            composite.update(geometry(), magnitude, &style);
            let first = composite.clone();
            composite.update(geometry(), magnitude, &style);
            assert_eq!(first, composite, "m={magnitude}");
        }
    }

    #[test]
    fn fill_tracks_bounds_and_radius() {
        let style = SurfaceStyle::default().with_background(Color::WHITE);
        let mut composite = Composite::new(&style);
        composite.update(SurfaceGeometry::new(Size::new(80.0, 40.0), 12.0), 2.0, &style);
        let fill = composite.fill();
        assert_eq!(fill.color, Some(Color::WHITE));
        assert_eq!(fill.shape.rect(), Rect::new(0.0, 0.0, 80.0, 40.0));
        assert_eq!(fill.shape.radii().top_left, 12.0);
    }

    #[test]
    fn bezel_follows_style() {
        let plain = SurfaceStyle::default();
        let mut composite = Composite::new(&plain);
        composite.update(geometry(), 5.0, &plain);
        assert!(composite.bezel().is_none(), "zero width draws no bezel");

        let beveled = plain.with_bezel(BezelStyle::default().with_width(2.0));
        composite.update(geometry(), 5.0, &beveled);
        let bezel = composite.bezel().expect("bezel is drawn");
        assert_eq!(bezel.fill_rule, Fill::EvenOdd);
        let stops: Vec<_> = bezel.brush.stops.iter().map(|stop| stop.offset).collect();
        assert_eq!(stops, [0.4, 1.0]);
        assert!(bezel.path.bounding_box().width() <= 100.0 + 1e-9, "ring stays inside");
    }

    #[test]
    fn recolor_reaches_hidden_slots() {
        let style = SurfaceStyle::default();
        let mut composite = Composite::new(&style);
        composite.update(geometry(), 5.0, &style);
        let style = SurfaceStyle {
            palette: style.palette.with_color(ShadowRole::InnerDark, Color::BLACK),
            ..style
        };
        composite.update(geometry(), 5.0, &style);
        let slot = composite.shadow(ShadowRole::InnerDark);
        assert!(slot.hidden, "inner slots stay hidden while raised");
        assert_eq!(slot.color, Color::BLACK);
    }

    #[test]
    fn plan_before_first_update_is_unclipped() {
        let composite = Composite::new(&SurfaceStyle::default());
        let plan = composite.plan(Rect::new(0.0, 0.0, 100.0, 100.0), Some(ContentId(4)));
        assert!(plan.clip.is_none(), "no outline computed yet");
        assert_eq!(plan.items.len(), 2, "fill and content only");
        assert!(
            plan.items.iter().all(|entry| !entry.clipped),
            "items never point at a missing clip"
        );
    }

    #[test]
    fn degenerate_geometry_does_not_panic() {
        let style = SurfaceStyle::default();
        let mut composite = Composite::new(&style);
        composite.update(SurfaceGeometry::new(Size::ZERO, 30.0), -50.0, &style);
        composite.update(SurfaceGeometry::new(Size::new(10.0, 4.0), 30.0), 50.0, &style);
        assert_eq!(composite.polarity(), Some(Polarity::Raised));
    }
}
