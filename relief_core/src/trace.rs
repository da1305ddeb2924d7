// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for compositing passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`SurfaceStore::recompute_traced`](crate::surface::SurfaceStore::recompute_traced)
//! calls while it runs. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::elevation::Polarity;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once at the start of a pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassBeginEvent {
    /// Monotonic pass counter.
    pub pass_index: u64,
    /// Number of live surfaces in the store.
    pub live_surfaces: usize,
}

/// Emitted for every surface the pass recomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceUpdateEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// Slot index of the surface.
    pub surface_index: u32,
    /// Signed elevation magnitude.
    pub magnitude: f64,
    /// Resulting polarity.
    pub polarity: Polarity,
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Corner radius.
    pub corner_radius: f64,
    /// Whether a bezel is drawn.
    pub bezel: bool,
    /// Whether content is attached.
    pub has_content: bool,
}

/// Emitted when a surface switches between raised and recessed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolarityChangeEvent {
    /// Pass counter.
    pub pass_index: u64,
    /// Slot index of the surface.
    pub surface_index: u32,
    /// Polarity before the pass.
    pub from: Polarity,
    /// Polarity after the pass.
    pub to: Polarity,
}

/// Per-pass totals, emitted last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Pass counter.
    pub pass_index: u64,
    /// Surfaces recomputed.
    pub updated: usize,
    /// Polarity switches.
    pub polarity_flips: usize,
    /// Surfaces whose content changed.
    pub content_changes: usize,
    /// Surfaces created since the previous pass.
    pub added: usize,
    /// Surfaces destroyed since the previous pass.
    pub removed: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from compositing passes.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a pass starts.
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        _ = e;
    }

    /// Called after a surface is recomputed.
    fn on_surface_update(&mut self, e: &SurfaceUpdateEvent) {
        _ = e;
    }

    /// Called when a surface flips polarity.
    fn on_polarity_change(&mut self, e: &PolarityChangeEvent) {
        _ = e;
    }

    /// Called with the totals of a finished pass.
    fn on_pass_summary(&mut self, s: &PassSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PassBeginEvent`].
    #[inline]
    pub fn pass_begin(&mut self, e: &PassBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pass_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SurfaceUpdateEvent`].
    #[inline]
    pub fn surface_update(&mut self, e: &SurfaceUpdateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface_update(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PolarityChangeEvent`].
    #[inline]
    pub fn polarity_change(&mut self, e: &PolarityChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_polarity_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PassSummary`].
    #[inline]
    pub fn pass_summary(&mut self, s: &PassSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_pass_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
