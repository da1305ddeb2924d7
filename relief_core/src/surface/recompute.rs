// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The compositing pass and change tracking.
//!
//! A pass follows a drain-recompute pattern:
//!
//! 1. **CONTENT**: Drain dirty indices and report them as content changes.
//! 2. **GEOMETRY**, **ELEVATION**, **SHADOW**, **FILL**, **BEZEL**, **MASK**:
//!    Drain dirty indices and merge them with the content changes.
//! 3. Recompute every merged surface exactly once, in slot order, noting
//!    polarity flips.
//! 4. **TOPOLOGY**: Drain and discard; lifecycle changes are reported
//!    through the added/removed lists.
//!
//! [`SurfaceChanges`] uses raw slot indices (`u32`) rather than
//! [`SurfaceId`] handles so that presenters can index directly into the
//! store via the `*_at()` accessors (e.g.
//! [`render_plan_at`](super::SurfaceStore::render_plan_at)) without paying
//! for generation checks on every access.
//!
//! [`SurfaceId`]: super::SurfaceId

use alloc::vec::Vec;

use understory_dirty::Channel;

use super::store::SurfaceStore;
use crate::dirty;
use crate::trace::{PassBeginEvent, PassSummary, PolarityChangeEvent, SurfaceUpdateEvent, Tracer};

/// The set of changes produced by a single [`SurfaceStore::recompute`] call.
///
/// Each field contains the raw slot indices of surfaces that changed in the
/// corresponding category. Presenters use these to apply incremental updates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceChanges {
    /// Surfaces whose layers were recomputed.
    pub updated: Vec<u32>,
    /// Surfaces that switched between raised and recessed.
    pub polarity_flips: Vec<u32>,
    /// Surfaces whose content was attached, replaced, or detached.
    pub content: Vec<u32>,
    /// Surfaces added since the last pass.
    pub added: Vec<u32>,
    /// Surfaces removed since the last pass.
    pub removed: Vec<u32>,
}

impl SurfaceChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.updated.clear();
        self.polarity_flips.clear();
        self.content.clear();
        self.added.clear();
        self.removed.clear();
    }

    /// Returns `true` if the pass changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updated.is_empty() && self.added.is_empty() && self.removed.is_empty()
    }
}

impl SurfaceStore {
    /// Runs one compositing pass, recomputing every dirty surface once and
    /// returning the set of changes.
    pub fn recompute(&mut self) -> SurfaceChanges {
        let mut changes = SurfaceChanges::default();
        self.recompute_into(&mut changes, &mut Tracer::none());
        changes
    }

    /// Like [`recompute`](Self::recompute), but reports each step to
    /// `tracer`.
    pub fn recompute_traced(&mut self, tracer: &mut Tracer<'_>) -> SurfaceChanges {
        let mut changes = SurfaceChanges::default();
        self.recompute_into(&mut changes, tracer);
        changes
    }

    /// Like [`recompute_traced`](Self::recompute_traced), but reuses a
    /// caller-provided buffer to avoid allocation.
    pub fn recompute_into(&mut self, changes: &mut SurfaceChanges, tracer: &mut Tracer<'_>) {
        changes.clear();
        let pass_index = self.pass_index;
        self.pass_index += 1;

        tracer.pass_begin(&PassBeginEvent {
            pass_index,
            live_surfaces: self.live_count(),
        });

        changes.content = self.drain_live(dirty::CONTENT);
        let mut dirty_surfaces = changes.content.clone();
        for channel in dirty::APPEARANCE {
            dirty_surfaces.extend(self.drain_live(channel));
        }
        dirty_surfaces.sort_unstable();
        dirty_surfaces.dedup();

        for &idx in &dirty_surfaces {
            let i = idx as usize;
            let geometry = self.geometry_at(idx);
            let magnitude = self.elevation[i].magnitude();
            let update = self.composite[i].update(geometry, magnitude, &self.style[i]);

            tracer.surface_update(&SurfaceUpdateEvent {
                pass_index,
                surface_index: idx,
                magnitude,
                polarity: update.polarity,
                width: geometry.size.width,
                height: geometry.size.height,
                corner_radius: geometry.corner_radius,
                bezel: self.style[i].bezel.is_visible(),
                has_content: self.content[i].is_some(),
            });
            if let Some(from) = update.previous.filter(|_| update.flipped()) {
                changes.polarity_flips.push(idx);
                tracer.polarity_change(&PolarityChangeEvent {
                    pass_index,
                    surface_index: idx,
                    from,
                    to: update.polarity,
                });
            }
        }
        changes.updated = dirty_surfaces;

        // Drain TOPOLOGY channel (just consume, changes are structural).
        let _: Vec<u32> = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .collect();

        // Move lifecycle lists.
        core::mem::swap(&mut self.pending_added, &mut changes.added);
        core::mem::swap(&mut self.pending_removed, &mut changes.removed);

        tracer.pass_summary(&PassSummary {
            pass_index,
            updated: changes.updated.len(),
            polarity_flips: changes.polarity_flips.len(),
            content_changes: changes.content.len(),
            added: changes.added.len(),
            removed: changes.removed.len(),
        });
    }

    /// Returns the number of passes run so far.
    #[must_use]
    pub fn pass_count(&self) -> u64 {
        self.pass_index
    }

    /// Drains `channel`, dropping slots destroyed since they were marked.
    fn drain_live(&mut self, channel: Channel) -> Vec<u32> {
        let mut drained: Vec<u32> = self.dirty.drain(channel).deterministic().run().collect();
        drained.retain(|&idx| self.is_live_slot(idx));
        drained
    }
}
