// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays surface storage with allocation and property management.

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, RoundedRect, Size};
use peniko::Color;
use understory_dirty::{CycleHandling, DirtyTracker};

use super::composite::Composite;
use super::id::{ContentId, SurfaceId};
use crate::dirty;
use crate::elevation::{Elevation, Polarity};
use crate::geometry::SurfaceGeometry;
use crate::plan::RenderPlan;
use crate::shadow::{ShadowPrimitive, ShadowRole};
use crate::style::{MaskTarget, SurfaceStyle};

/// Struct-of-arrays storage for all surfaces.
///
/// Surfaces are addressed by [`SurfaceId`] handles. Internally, each surface
/// occupies a slot in parallel arrays. Destroyed surfaces are recycled via a
/// free list, and generation counters prevent stale handle access.
///
/// Setters only record the new value and mark a dirty channel. Nothing is
/// recomputed until [`recompute`](Self::recompute).
#[derive(Debug)]
pub struct SurfaceStore {
    // -- Geometry (set by the host layout) --
    pub(crate) frame: Vec<Rect>,
    pub(crate) corner_radius: Vec<f64>,

    // -- Appearance (set by callers) --
    pub(crate) elevation: Vec<Elevation>,
    pub(crate) style: Vec<SurfaceStyle>,
    pub(crate) content: Vec<Option<ContentId>>,
    pub(crate) clip_bounds: Vec<Option<RoundedRect>>,

    // -- Computed (written by recompute) --
    pub(crate) composite: Vec<Composite>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) pass_index: u64,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
}

impl Default for SurfaceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceStore {
    /// Creates an empty surface store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame: Vec::new(),
            corner_radius: Vec::new(),
            elevation: Vec::new(),
            style: Vec::new(),
            content: Vec::new(),
            clip_bounds: Vec::new(),
            composite: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            pass_index: 0,
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
        }
    }

    // -- Allocation API --

    /// Creates a new surface and returns its handle.
    ///
    /// The surface starts with an empty frame, no corner radius, flat
    /// elevation, the default style and no content. It is computed on the
    /// next [`recompute`](Self::recompute).
    pub fn create_surface(&mut self) -> SurfaceId {
        self.create_surface_with(SurfaceStyle::default(), None)
    }

    /// Creates a new surface with the given style and content.
    pub fn create_surface_with(
        &mut self,
        style: SurfaceStyle,
        content: Option<ContentId>,
    ) -> SurfaceId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            let i = idx as usize;
            self.generation[i] += 1;
            self.frame[i] = Rect::ZERO;
            self.corner_radius[i] = 0.0;
            self.elevation[i] = Elevation::Flat;
            self.style[i] = style;
            self.content[i] = content;
            self.clip_bounds[i] = None;
            self.composite[i] = Composite::new(&style);
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.frame.push(Rect::ZERO);
            self.corner_radius.push(0.0);
            self.elevation.push(Elevation::Flat);
            self.style.push(style);
            self.content.push(content);
            self.clip_bounds.push(None);
            self.composite.push(Composite::new(&style));
            self.generation.push(0);
            idx
        };

        self.pending_added.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);
        self.dirty.mark(idx, dirty::GEOMETRY);
        if content.is_some() {
            self.dirty.mark(idx, dirty::CONTENT);
        }

        SurfaceId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a surface, freeing its slot for reuse.
    ///
    /// Returns the content that was attached so the host can release it.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_surface(&mut self, id: SurfaceId) -> Option<ContentId> {
        self.validate(id);
        let idx = id.idx;

        // Remove dirty tracking state.
        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;

        self.free_list.push(idx);
        self.pending_removed.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);
        self.content[idx as usize].take()
    }

    /// Returns whether the given handle refers to a live surface.
    #[must_use]
    pub fn is_alive(&self, id: SurfaceId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    /// Returns the number of live surfaces.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    // -- Query API --

    /// Returns the frame of a surface in host coordinates.
    #[must_use]
    pub fn frame(&self, id: SurfaceId) -> Rect {
        self.validate(id);
        self.frame[id.idx as usize]
    }

    /// Returns the geometry the next pass will use.
    #[must_use]
    pub fn geometry(&self, id: SurfaceId) -> SurfaceGeometry {
        self.validate(id);
        self.geometry_at(id.idx)
    }

    /// Returns the corner radius of a surface.
    #[must_use]
    pub fn corner_radius(&self, id: SurfaceId) -> f64 {
        self.validate(id);
        self.corner_radius[id.idx as usize]
    }

    /// Returns the elevation of a surface.
    #[must_use]
    pub fn elevation(&self, id: SurfaceId) -> Elevation {
        self.validate(id);
        self.elevation[id.idx as usize]
    }

    /// Returns the polarity selected by the current elevation.
    ///
    /// This reflects the latest [`set_elevation`](Self::set_elevation), not
    /// the last pass.
    #[must_use]
    pub fn polarity(&self, id: SurfaceId) -> Polarity {
        self.elevation(id).polarity()
    }

    /// Returns `true` if the current elevation is strictly positive.
    #[must_use]
    pub fn is_convex(&self, id: SurfaceId) -> bool {
        self.elevation(id).is_convex()
    }

    /// Returns the style of a surface.
    #[must_use]
    pub fn style(&self, id: SurfaceId) -> &SurfaceStyle {
        self.validate(id);
        &self.style[id.idx as usize]
    }

    /// Returns the attached content, if any.
    #[must_use]
    pub fn content(&self, id: SurfaceId) -> Option<ContentId> {
        self.validate(id);
        self.content[id.idx as usize]
    }

    /// Returns the host-space bounds the surface is clipped to, if any.
    #[must_use]
    pub fn clip_bounds(&self, id: SurfaceId) -> Option<RoundedRect> {
        self.validate(id);
        self.clip_bounds[id.idx as usize]
    }

    /// Returns the computed shadow slot for `role`.
    ///
    /// Only valid after [`recompute`](Self::recompute) has been called.
    #[must_use]
    pub fn shadow(&self, id: SurfaceId, role: ShadowRole) -> &ShadowPrimitive {
        self.validate(id);
        self.composite[id.idx as usize].shadow(role)
    }

    /// Returns the computed clip outline; only recessed surfaces have one.
    ///
    /// Only valid after [`recompute`](Self::recompute) has been called.
    #[must_use]
    pub fn clip(&self, id: SurfaceId) -> Option<&BezPath> {
        self.validate(id);
        self.composite[id.idx as usize].clip()
    }

    /// Returns the computed layer state of a surface.
    #[must_use]
    pub fn composite(&self, id: SurfaceId) -> &Composite {
        self.validate(id);
        &self.composite[id.idx as usize]
    }

    /// Returns the draw list of a surface as of the last pass.
    #[must_use]
    pub fn render_plan(&self, id: SurfaceId) -> RenderPlan {
        self.validate(id);
        self.render_plan_at(id.idx)
    }

    /// Returns handles for every live surface, in slot order.
    #[must_use]
    pub fn surfaces(&self) -> Vec<SurfaceId> {
        (0..self.len)
            .filter(|&idx| self.is_live_slot(idx))
            .map(|idx| SurfaceId {
                idx,
                generation: self.generation[idx as usize],
            })
            .collect()
    }

    // -- Mutation API (auto-marks dirty) --

    /// Sets the frame of a surface.
    ///
    /// Moving a surface re-runs its full computation on the next pass.
    pub fn set_frame(&mut self, id: SurfaceId, frame: Rect) {
        self.validate(id);
        self.frame[id.idx as usize] = frame;
        self.dirty.mark(id.idx, dirty::GEOMETRY);
    }

    /// Moves a surface, keeping its size.
    pub fn set_origin(&mut self, id: SurfaceId, origin: Point) {
        self.validate(id);
        let frame = self.frame[id.idx as usize].with_origin(origin);
        self.set_frame(id, frame);
    }

    /// Resizes a surface, keeping its origin.
    pub fn set_size(&mut self, id: SurfaceId, size: Size) {
        self.validate(id);
        let frame = self.frame[id.idx as usize].with_size(size);
        self.set_frame(id, frame);
    }

    /// Sets the corner radius. Negative values clamp to zero.
    pub fn set_corner_radius(&mut self, id: SurfaceId, radius: f64) {
        self.validate(id);
        self.corner_radius[id.idx as usize] = radius.max(0.0);
        self.dirty.mark(id.idx, dirty::GEOMETRY);
    }

    /// Sets the elevation of a surface.
    pub fn set_elevation(&mut self, id: SurfaceId, elevation: impl Into<Elevation>) {
        self.validate(id);
        self.elevation[id.idx as usize] = elevation.into();
        self.dirty.mark(id.idx, dirty::ELEVATION);
    }

    /// Replaces the whole style of a surface.
    pub fn set_style(&mut self, id: SurfaceId, style: SurfaceStyle) {
        self.validate(id);
        self.style[id.idx as usize] = style;
        for channel in [dirty::SHADOW, dirty::FILL, dirty::BEZEL, dirty::MASK] {
            self.dirty.mark(id.idx, channel);
        }
    }

    /// Sets the background color.
    pub fn set_background(&mut self, id: SurfaceId, color: Option<Color>) {
        self.validate(id);
        self.style[id.idx as usize].background = color;
        self.dirty.mark(id.idx, dirty::FILL);
    }

    /// Sets the color of one shadow slot.
    ///
    /// A transparent color disables that light direction.
    pub fn set_shadow_color(&mut self, id: SurfaceId, role: ShadowRole, color: Color) {
        self.validate(id);
        self.style[id.idx as usize].palette.set_color(role, color);
        self.dirty.mark(id.idx, dirty::SHADOW);
    }

    /// Sets the bezel width. Negative values are made positive; zero removes
    /// the bezel.
    pub fn set_bezel_width(&mut self, id: SurfaceId, width: f64) {
        self.validate(id);
        self.style[id.idx as usize].bezel.set_width(width);
        self.dirty.mark(id.idx, dirty::BEZEL);
    }

    /// Sets the two bezel gradient colors.
    pub fn set_bezel_colors(&mut self, id: SurfaceId, upper_left: Color, lower_right: Color) {
        self.validate(id);
        let bezel = &mut self.style[id.idx as usize].bezel;
        bezel.upper_left = upper_left;
        bezel.lower_right = lower_right;
        self.dirty.mark(id.idx, dirty::BEZEL);
    }

    /// Sets where the recessed clip mask is applied.
    pub fn set_mask_target(&mut self, id: SurfaceId, target: MaskTarget) {
        self.validate(id);
        self.style[id.idx as usize].mask_target = target;
        self.dirty.mark(id.idx, dirty::MASK);
    }

    /// Clips the whole surface, shadows included, to `bounds` in host
    /// coordinates. `None` removes the clip.
    pub fn set_clip_bounds(&mut self, id: SurfaceId, bounds: Option<RoundedRect>) {
        self.validate(id);
        self.clip_bounds[id.idx as usize] = bounds;
        self.dirty.mark(id.idx, dirty::MASK);
    }

    /// Attaches, replaces, or detaches content.
    ///
    /// Returns the previously attached content so the host can detach it.
    pub fn set_content(
        &mut self,
        id: SurfaceId,
        content: Option<ContentId>,
    ) -> Option<ContentId> {
        self.validate(id);
        let previous = core::mem::replace(&mut self.content[id.idx as usize], content);
        self.dirty.mark(id.idx, dirty::CONTENT);
        previous
    }

    // -- Raw-index accessors for presenters --
    //
    // These accept raw slot indices (as found in `SurfaceChanges`) rather than
    // `SurfaceId` handles, skipping generation validation. Only use with
    // indices that came from `SurfaceChanges`.

    /// Returns the frame at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn frame_at(&self, idx: u32) -> Rect {
        self.check_slot(idx);
        self.frame[idx as usize]
    }

    /// Returns the content at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn content_at(&self, idx: u32) -> Option<ContentId> {
        self.check_slot(idx);
        self.content[idx as usize]
    }

    /// Returns the draw list at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn render_plan_at(&self, idx: u32) -> RenderPlan {
        self.check_slot(idx);
        let i = idx as usize;
        let mut plan = self.composite[i].plan(self.frame[i], self.content[i]);
        plan.clip_bounds = self.clip_bounds[i];
        plan
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    pub(crate) fn validate(&self, id: SurfaceId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale SurfaceId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    fn check_slot(&self, idx: u32) {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
    }

    pub(crate) fn is_live_slot(&self, idx: u32) -> bool {
        idx < self.len && !self.free_list.contains(&idx)
    }

    pub(crate) fn geometry_at(&self, idx: u32) -> SurfaceGeometry {
        let i = idx as usize;
        SurfaceGeometry::new(self.frame[i].size(), self.corner_radius[i])
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;
    use crate::style::BezelStyle;

    fn square(store: &mut SurfaceStore, elevation: Elevation) -> SurfaceId {
        let id = store.create_surface();
        store.set_frame(id, Rect::new(0.0, 0.0, 100.0, 100.0));
        store.set_corner_radius(id, 20.0);
        store.set_elevation(id, elevation);
        id
    }

    #[test]
    fn create_and_destroy() {
        let mut store = SurfaceStore::new();
        let id = store.create_surface();
        assert!(store.is_alive(id), "fresh handle is alive");
        store.destroy_surface(id);
        assert!(!store.is_alive(id), "destroyed handle is dead");
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut store = SurfaceStore::new();
        let id1 = store.create_surface();
        store.destroy_surface(id1);
        let id2 = store.create_surface();
        // id2 reuses the same slot but has a different generation.
        assert!(!store.is_alive(id1), "old handle is stale");
        assert!(store.is_alive(id2), "new handle is alive");
        assert_eq!(id1.idx, id2.idx);
        assert_ne!(id1.generation, id2.generation);
    }

    #[test]
    fn reused_slot_starts_fresh() {
        let mut store = SurfaceStore::new();
        let id = square(&mut store, Elevation::ConvexHigh);
        store.set_content(id, Some(ContentId(4)));
        store.destroy_surface(id);
        let id = store.create_surface();
        assert_eq!(store.elevation(id), Elevation::Flat);
        assert_eq!(store.frame(id), Rect::ZERO);
        assert_eq!(store.content(id), None);
    }

    #[test]
    #[should_panic(expected = "stale SurfaceId")]
    fn destroyed_handle_panics_on_get_elevation() {
        let mut store = SurfaceStore::new();
        let id = store.create_surface();
        store.destroy_surface(id);
        let _ = store.elevation(id);
    }

    #[test]
    #[should_panic(expected = "stale SurfaceId")]
    fn destroyed_handle_panics_on_set_elevation() {
        let mut store = SurfaceStore::new();
        let id = store.create_surface();
        store.destroy_surface(id);
        store.set_elevation(id, Elevation::ConvexLow);
    }

    #[test]
    #[should_panic(expected = "stale SurfaceId")]
    fn double_destroy_panics() {
        let mut store = SurfaceStore::new();
        let id = store.create_surface();
        store.destroy_surface(id);
        store.destroy_surface(id);
    }

    #[test]
    fn setters_clamp() {
        let mut store = SurfaceStore::new();
        let id = store.create_surface();
        store.set_corner_radius(id, -5.0);
        assert_eq!(store.corner_radius(id), 0.0);
        store.set_bezel_width(id, -3.0);
        assert_eq!(store.style(id).bezel.width(), 3.0);
    }

    #[test]
    fn elevation_reads_back() {
        let mut store = SurfaceStore::new();
        let id = store.create_surface();
        store.set_elevation(id, Elevation::ConvexHigh);
        assert_eq!(store.elevation(id).magnitude(), 50.0);
        store.set_elevation(id, 17.5);
        assert_eq!(store.elevation(id), Elevation::Custom(17.5));
        assert!(store.is_convex(id), "17.5 is convex");
        store.set_elevation(id, 0.0);
        assert!(!store.is_convex(id), "zero is not convex");
    }

    #[test]
    fn setters_do_not_recompute() {
        let mut store = SurfaceStore::new();
        let id = square(&mut store, Elevation::ConvexLow);
        let _ = store.recompute();
        store.set_elevation(id, Elevation::ConvexHigh);
        assert_eq!(
            store.shadow(id, ShadowRole::OuterDark).blur_radius,
            15.0,
            "shadow still reflects the last pass"
        );
        let _ = store.recompute();
        assert_eq!(store.shadow(id, ShadowRole::OuterDark).blur_radius, 50.0);
    }

    #[test]
    fn set_content_returns_previous() {
        let mut store = SurfaceStore::new();
        let id = store.create_surface_with(SurfaceStyle::default(), Some(ContentId(1)));
        assert_eq!(store.set_content(id, Some(ContentId(2))), Some(ContentId(1)));
        assert_eq!(store.set_content(id, None), Some(ContentId(2)));
        assert_eq!(store.set_content(id, None), None);
    }

    #[test]
    fn destroy_returns_content() {
        let mut store = SurfaceStore::new();
        let id = store.create_surface_with(SurfaceStyle::default(), Some(ContentId(7)));
        assert_eq!(store.destroy_surface(id), Some(ContentId(7)));
    }

    #[test]
    fn shadow_colors_are_independent() {
        let mut store = SurfaceStore::new();
        let id = square(&mut store, Elevation::ConvexLow);
        store.set_shadow_color(id, ShadowRole::OuterBright, Color::TRANSPARENT);
        let _ = store.recompute();
        assert_eq!(store.shadow(id, ShadowRole::OuterBright).color, Color::TRANSPARENT);
        assert_ne!(store.shadow(id, ShadowRole::OuterDark).color, Color::TRANSPARENT);
    }

    #[test]
    fn render_plan_is_placed_at_frame() {
        let mut store = SurfaceStore::new();
        let id = square(&mut store, Elevation::ConvexSlight);
        store.set_origin(id, Point::new(30.0, 40.0));
        store.set_content(id, Some(ContentId(5)));
        let _ = store.recompute();
        let plan = store.render_plan(id);
        assert_eq!(plan.frame, Rect::new(30.0, 40.0, 130.0, 140.0));
        let content = plan.content().expect("content placed");
        assert_eq!(content.frame, Rect::new(0.0, 0.0, 100.0, 100.0), "local bounds");
        assert_eq!(
            plan.shadow(ShadowRole::OuterDark).map(|s| s.offset),
            Some(Vec2::new(2.5, 1.25))
        );
    }

    #[test]
    fn clip_bounds_reach_the_plan() {
        let mut store = SurfaceStore::new();
        let id = square(&mut store, Elevation::ConvexSlight);
        let _ = store.recompute();
        let bounds = RoundedRect::new(-10.0, -10.0, 50.0, 50.0, 8.0);
        store.set_clip_bounds(id, Some(bounds));
        let changes = store.recompute();
        assert_eq!(changes.updated, [id.idx], "clip changes schedule a pass");
        assert_eq!(store.render_plan(id).clip_bounds, Some(bounds));
        assert!(store.render_plan(id).clip.is_none(), "raised mask is unaffected");

        store.destroy_surface(id);
        let reused = store.create_surface();
        assert_eq!(store.clip_bounds(reused), None, "reused slots start unclipped");
    }

    #[test]
    fn style_replacement_marks_everything() {
        let mut store = SurfaceStore::new();
        let id = square(&mut store, Elevation::ConcaveLow);
        let _ = store.recompute();
        store.set_style(
            id,
            SurfaceStyle::default()
                .with_bezel(BezelStyle::default().with_width(1.0))
                .with_mask_target(MaskTarget::Content),
        );
        let changes = store.recompute();
        assert_eq!(changes.updated, [id.idx]);
        assert!(store.render_plan(id).bezel().is_some(), "bezel drawn");
    }

    #[test]
    fn surfaces_lists_live_handles() {
        let mut store = SurfaceStore::new();
        let a = store.create_surface();
        let b = store.create_surface();
        let c = store.create_surface();
        store.destroy_surface(b);
        assert_eq!(store.surfaces(), [a, c]);
    }
}
