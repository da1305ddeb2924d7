// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface data model.
//!
//! A *surface* is one elevated container. Each surface has:
//!
//! - An identity ([`SurfaceId`]): a generational handle that becomes stale
//!   when the surface is destroyed, preventing use-after-free bugs at the API
//!   level.
//! - **Inputs** set by the caller: [`frame`](SurfaceStore::set_frame),
//!   [`corner radius`](SurfaceStore::set_corner_radius),
//!   [`elevation`](SurfaceStore::set_elevation), style (shadow colors,
//!   background, bezel, mask target), and [`content`](SurfaceStore::set_content).
//! - **Computed state** produced by [`recompute`](SurfaceStore::recompute):
//!   a [`Composite`] holding the four shadow slots, the fill, the bezel and
//!   the clip mask.
//!
//! Surfaces are stored in struct-of-arrays layout with index-based handles.
//!
//! # Dirty tracking
//!
//! Every setter marks the matching dirty channel (see
//! [`dirty`](crate::dirty)) and returns. The next pass recomputes each marked
//! surface exactly once, however many setters touched it.

mod composite;
mod id;
mod recompute;
mod store;

pub use composite::{Composite, CompositeUpdate};
pub use id::{ContentId, SurfaceId};
pub use recompute::SurfaceChanges;
pub use store::SurfaceStore;
