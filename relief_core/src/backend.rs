// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for presenting computed surfaces.
//!
//! Relief computes shadow geometry but never draws. A host integration
//! provides a [`Presenter`] that turns [`SurfaceChanges`] into updates of its
//! own drawing tree (a retained layer tree, a vector scene, a DOM).
//!
//! # Crate boundaries
//!
//! `relief_core` owns the data model, the compositing pass and this contract
//! module. Widget crates build on the store; host crates implement
//! [`Presenter`] and drive the frame loop.

use crate::surface::{SurfaceChanges, SurfaceStore};

/// Applies computed surface changes to a host drawing tree.
///
/// Retained-layer hosts and immediate-mode scene builders both implement
/// this trait, enabling generic frame loops and test doubles.
///
/// # Frame loop pseudocode
///
/// A typical frame callback wires the pieces together like this:
///
/// ```rust,ignore
/// fn on_frame(dt: f64) {
///     // Animate: move thumbs, change elevations
///     switch.advance(&mut store, dt);
///
///     // Recompute: drain dirty channels, rebuild shadow layers
///     let changes = store.recompute();
///
///     // Present: apply incremental changes to the host tree
///     presenter.apply(&store, &changes);
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`SurfaceChanges`] to the host tree, reading
    /// current plans from `store` as needed (see
    /// [`SurfaceStore::render_plan_at`]).
    fn apply(&mut self, store: &SurfaceStore, changes: &SurfaceChanges);
}
