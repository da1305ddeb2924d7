// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elevation model, shadow geometry and compositing pass for soft-UI
//! surfaces.
//!
//! `relief_core` turns a single signed *elevation* plus bounds and a corner
//! radius into the layers that make a flat rectangle look raised above, or
//! carved into, its background: two outer drop shadows for raised surfaces,
//! two clipped inner shadows for recessed ones, a background fill and an
//! optional gradient bezel. It is `no_std` compatible (with `alloc`) and uses
//! array-based struct-of-arrays storage with index handles.
//!
//! # Architecture
//!
//! The crate is organized around a deferred compositing pass:
//!
//! ```text
//!   Host layout / widgets
//!       │  set_frame, set_elevation, set_content, ...
//!       ▼
//!   SurfaceStore (dirty channels)
//!       │
//!       ▼
//!   SurfaceStore::recompute() ──► SurfaceChanges ──► Presenter::apply()
//!                                                         │
//!                                                         ▼
//!                                          SurfaceStore::render_plan_at()
//! ```
//!
//! **[`elevation`]**: Named elevation presets, signed magnitudes and the
//! raised/recessed [`Polarity`](elevation::Polarity).
//!
//! **[`geometry`]**: Pure path builders: rounded outline, inner-shadow
//! L-bands and the bezel ring, all made of circular arcs.
//!
//! **[`shadow`]**: The four shadow roles, their offsets and blur radii.
//!
//! **[`style`]**: Shadow palette, bezel, background and clip policy.
//!
//! **[`surface`]**: Struct-of-arrays surface store with generational
//! handles and the recompute pass.
//!
//! **[`dirty`]**: Dirty channels via `understory_dirty`. Every setter marks
//! one; each pass drains them all.
//!
//! **[`plan`]**: Ordered draw lists and the pure [`compose`](plan::compose).
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait hosts
//! implement to draw computed surfaces.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! pass instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Example
//!
//! ```
//! use kurbo::Rect;
//! use relief_core::elevation::Elevation;
//! use relief_core::shadow::ShadowRole;
//! use relief_core::surface::SurfaceStore;
//!
//! let mut store = SurfaceStore::new();
//! let card = store.create_surface();
//! store.set_frame(card, Rect::new(0.0, 0.0, 100.0, 100.0));
//! store.set_corner_radius(card, 20.0);
//! store.set_elevation(card, Elevation::ConcaveLow);
//!
//! let changes = store.recompute();
//! assert_eq!(changes.updated.len(), 1);
//! assert_eq!(store.shadow(card, ShadowRole::InnerDark).blur_radius, 15.0);
//! assert!(store.clip(card).is_some());
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod dirty;
pub mod elevation;
pub mod geometry;
pub mod plan;
pub mod shadow;
pub mod style;
pub mod surface;
pub mod trace;
