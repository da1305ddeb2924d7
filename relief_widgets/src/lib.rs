// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Soft-UI controls built from `relief_core` surfaces.
//!
//! Every widget here owns a handful of surfaces in a
//! [`SurfaceStore`](relief_core::surface::SurfaceStore): typically a
//! recessed track and a raised thumb. Widgets only move and restyle their
//! surfaces; shadows are rebuilt by the store's next
//! [`recompute`](relief_core::surface::SurfaceStore::recompute).
//!
//! | widget | surfaces |
//! |---|---|
//! | [`Switch`] | track, thumb, plus an [`IndicatorLight`] |
//! | [`IndicatorLight`] | one 8×8 lamp |
//! | [`LabeledSwitch`] | raised panel, recessed well holding the face artwork |
//! | [`SlideSwitch`] | track, tint overlay, thumb, four grip dots |
//! | [`ProgressBar`] | recessed track, raised indicator |
//!
//! A few strokes and gradients are painted by the host instead of the store,
//! such as the [`ThumbRimDecoration`] under each switch thumb. Parts that
//! must stay inside their track carry
//! [clip bounds](relief_core::surface::SurfaceStore::set_clip_bounds).
//!
//! State changes can be animated. An animated setter starts a linear
//! [`ThumbMotion`] that the host steps with each widget's `advance(dt)`
//! method once per frame, before recomputing the store.
//!
//! # Example
//!
//! ```
//! use kurbo::Rect;
//! use relief_core::surface::SurfaceStore;
//! use relief_widgets::{Switch, Widget};
//!
//! let mut store = SurfaceStore::new();
//! let mut switch = Switch::new(&mut store);
//! switch.layout(&mut store, Rect::from_origin_size((0.0, 0.0), switch.intrinsic_size()));
//!
//! let toggled = switch.set_on(&mut store, true, false);
//! assert_eq!(toggled.map(|t| t.on), Some(true));
//! store.recompute();
//! ```

#![no_std]

extern crate alloc;

pub mod indicator;
pub mod labeled_switch;
pub mod motion;
pub mod progress_bar;
pub mod slide_switch;
pub mod switch;
pub mod widget;

pub use indicator::IndicatorLight;
pub use labeled_switch::LabeledSwitch;
pub use motion::ThumbMotion;
pub use progress_bar::ProgressBar;
pub use slide_switch::SlideSwitch;
pub use switch::Switch;
pub use widget::{SwitchFeedback, SwitchToggled, ThumbRimDecoration, Widget};
