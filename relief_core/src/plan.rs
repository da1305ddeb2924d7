// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plans: the ordered draw list of one surface.
//!
//! A [`RenderPlan`] is what a host paints for a surface after a compositing
//! pass. Items are listed bottom to top. Each item notes whether it sits
//! under the plan's [`ClipMask`].
//!
//! | polarity | mask target | order |
//! |---|---|---|
//! | raised | any | outer dark, outer bright, fill, bezel, content |
//! | recessed | container | fill, inner dark, inner bright, bezel, content |
//! | recessed | content | fill, content, inner dark, inner bright, bezel |
//!
//! [`compose`] builds a plan directly from its inputs, without a store.

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, RoundedRect};
use peniko::{Color, Fill, Gradient};

use crate::elevation::{Elevation, Polarity};
use crate::geometry::SurfaceGeometry;
use crate::shadow::{ShadowPrimitive, ShadowRole};
use crate::style::{MaskTarget, SurfaceStyle};
use crate::surface::{Composite, ContentId};

/// The flat background layer of a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceFill {
    /// Bounds and corner radius.
    pub shape: RoundedRect,
    /// Fill color; `None` is transparent.
    pub color: Option<Color>,
}

/// The gradient outline of a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct BezelStroke {
    /// Ring-shaped mask.
    pub path: BezPath,
    /// Fill rule for `path`; always even-odd.
    pub fill_rule: Fill,
    /// Diagonal gradient painted through the mask.
    pub brush: Gradient,
}

/// Placement of host content inside a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentPlacement {
    /// The content handle.
    pub content: ContentId,
    /// Content frame in the surface's local space; equals its bounds.
    pub frame: Rect,
    /// Corner radius passed on to the content.
    pub corner_radius: f64,
}

/// The clip mask of a recessed surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipMask {
    /// Full rounded outline of the surface.
    pub path: BezPath,
    /// What the mask is attached to.
    pub target: MaskTarget,
}

/// One drawable in a [`RenderPlan`].
#[derive(Clone, Debug, PartialEq)]
pub enum RenderItem {
    /// A visible shadow primitive.
    Shadow(ShadowPrimitive),
    /// The surface fill.
    Fill(SurfaceFill),
    /// The bezel stroke.
    Bezel(BezelStroke),
    /// Host content.
    Content(ContentPlacement),
}

/// A [`RenderItem`] and whether it is drawn under the clip mask.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanItem {
    /// The drawable.
    pub item: RenderItem,
    /// Whether [`RenderPlan::clip`] applies.
    pub clipped: bool,
}

impl PlanItem {
    pub(crate) fn clipped(item: RenderItem) -> Self {
        Self {
            item,
            clipped: true,
        }
    }

    pub(crate) fn unclipped(item: RenderItem) -> Self {
        Self {
            item,
            clipped: false,
        }
    }
}

/// The ordered draw list of one surface.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    /// Surface frame in host coordinates. Paths are relative to its origin.
    pub frame: Rect,
    /// Polarity the plan was computed for.
    pub polarity: Polarity,
    /// Drawables, bottom first.
    pub items: Vec<PlanItem>,
    /// Clip mask for the items marked `clipped`.
    pub clip: Option<ClipMask>,
    /// Host-space bounds the whole plan is clipped to, shadows included.
    ///
    /// Set with [`SurfaceStore::set_clip_bounds`](crate::surface::SurfaceStore::set_clip_bounds)
    /// to keep a part inside its parent, such as a thumb inside its track.
    pub clip_bounds: Option<RoundedRect>,
    /// Whether the host should stop running inner-shadow animations.
    pub cancel_inner_animations: bool,
}

impl RenderPlan {
    /// Returns the visible shadow primitives, bottom first.
    pub fn shadows(&self) -> impl Iterator<Item = &ShadowPrimitive> {
        self.items.iter().filter_map(|entry| match &entry.item {
            RenderItem::Shadow(shadow) => Some(shadow),
            _ => None,
        })
    }

    /// Returns the visible primitive for `role`, if any.
    #[must_use]
    pub fn shadow(&self, role: ShadowRole) -> Option<&ShadowPrimitive> {
        self.shadows().find(|shadow| shadow.role == role)
    }

    /// Returns the content placement, if content is attached.
    #[must_use]
    pub fn content(&self) -> Option<&ContentPlacement> {
        self.items.iter().find_map(|entry| match &entry.item {
            RenderItem::Content(content) => Some(content),
            _ => None,
        })
    }

    /// Returns the bezel, if one is drawn.
    #[must_use]
    pub fn bezel(&self) -> Option<&BezelStroke> {
        self.items.iter().find_map(|entry| match &entry.item {
            RenderItem::Bezel(bezel) => Some(bezel),
            _ => None,
        })
    }
}

/// Computes the render plan of a surface from its inputs.
///
/// This is the pure form of one compositing pass; the plan is placed at the
/// origin. Calling it twice with the same inputs yields equal plans.
#[must_use]
pub fn compose(
    geometry: SurfaceGeometry,
    elevation: Elevation,
    style: &SurfaceStyle,
    content: Option<ContentId>,
) -> RenderPlan {
    let mut composite = Composite::new(style);
    composite.update(geometry, elevation.magnitude(), style);
    composite.plan(Rect::from_origin_size(Point::ZERO, geometry.size), content)
}
