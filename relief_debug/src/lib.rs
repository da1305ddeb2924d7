// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON export for relief diagnostics.
//!
//! This crate provides development tooling on top of `relief_core`:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable, one line per event, output
//!   for compositing passes.
//! - [`plan_json`]: JSON export of render plans with paths as SVG path data,
//!   plus a [`Presenter`](relief_core::backend::Presenter) that records every
//!   pass as JSON.

pub mod plan_json;
pub mod pretty;
