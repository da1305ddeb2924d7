// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Relief uses multi-channel dirty tracking (via [`understory_dirty`]) to
//! defer shadow recomputation until the host's next pass. Each channel
//! represents an independent category of change.
//!
//! All channels are local-only: surfaces never inherit appearance from one
//! another, so marking a surface never marks any other.
//!
//! - **Recompute**: [`GEOMETRY`], [`ELEVATION`], [`SHADOW`], [`FILL`],
//!   [`BEZEL`], [`CONTENT`] and [`MASK`]. A surface marked on any of them is
//!   recomputed exactly once by the next
//!   [`SurfaceStore::recompute`](crate::surface::SurfaceStore::recompute).
//! - **Structural**: [`TOPOLOGY`] is marked on create and destroy. It is
//!   drained and discarded; lifecycle changes are reported through the
//!   added/removed lists instead.
//!
//! # Consumption
//!
//! Callers never need to query dirty state directly. Each
//! [`SurfaceStore::recompute`](crate::surface::SurfaceStore::recompute) call
//! drains all channels and surfaces the results as
//! [`SurfaceChanges`](crate::surface::SurfaceChanges), which hosts
//! [consume](crate::backend::Presenter::apply) to apply incremental updates.

use understory_dirty::Channel;

/// Bounds or corner radius changed.
pub const GEOMETRY: Channel = Channel::new(0);

/// Elevation changed, possibly flipping polarity.
pub const ELEVATION: Channel = Channel::new(1);

/// One of the four shadow colors changed.
pub const SHADOW: Channel = Channel::new(2);

/// Background color changed.
pub const FILL: Channel = Channel::new(3);

/// Bezel width or colors changed.
pub const BEZEL: Channel = Channel::new(4);

/// Content was attached, replaced, or detached.
pub const CONTENT: Channel = Channel::new(5);

/// Clip mask target or clip bounds changed.
pub const MASK: Channel = Channel::new(6);

/// Surface created or destroyed.
pub const TOPOLOGY: Channel = Channel::new(7);

/// Channels that only schedule a recompute. [`CONTENT`] also schedules one,
/// but is reported on its own.
pub const APPEARANCE: [Channel; 6] = [GEOMETRY, ELEVATION, SHADOW, FILL, BEZEL, MASK];
