// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.

use std::fmt;
use std::io::Write;

use relief_core::elevation::Polarity;
use relief_core::trace::{
    PassBeginEvent, PassSummary, PolarityChangeEvent, SurfaceUpdateEvent, TraceSink,
};

/// A [`TraceSink`] that prints human-readable event descriptions.
///
/// Each event is written as a single line prefixed with its category in
/// square brackets (e.g. `[surface]`, `[polarity]`).
///
/// By default writes to stderr. Use [`with_writer`](Self::with_writer) to
/// redirect output (e.g. to a `Vec<u8>` for testing).
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to the given boxed writer.
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given writer.
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn polarity_name(p: Polarity) -> &'static str {
    match p {
        Polarity::Raised => "raised",
        Polarity::Recessed => "recessed",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pass_begin(&mut self, e: &PassBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[pass:begin] pass={} live={}",
            e.pass_index, e.live_surfaces,
        );
    }

    fn on_surface_update(&mut self, e: &SurfaceUpdateEvent) {
        let _ = writeln!(
            self.writer,
            "[surface] pass={} idx={} m={} {} size={}x{} r={} bezel={} content={}",
            e.pass_index,
            e.surface_index,
            e.magnitude,
            polarity_name(e.polarity),
            e.width,
            e.height,
            e.corner_radius,
            e.bezel,
            e.has_content,
        );
    }

    fn on_polarity_change(&mut self, e: &PolarityChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[polarity] pass={} idx={} {} -> {}",
            e.pass_index,
            e.surface_index,
            polarity_name(e.from),
            polarity_name(e.to),
        );
    }

    fn on_pass_summary(&mut self, s: &PassSummary) {
        let _ = writeln!(
            self.writer,
            "[summary] pass={} updated={} flips={} content={} added={} removed={}",
            s.pass_index, s.updated, s.polarity_flips, s.content_changes, s.added, s.removed,
        );
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use relief_core::elevation::Elevation;
    use relief_core::surface::SurfaceStore;
    use relief_core::trace::Tracer;

    use super::*;

    fn lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn formats_each_event_on_one_line() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_pass_begin(&PassBeginEvent {
            pass_index: 3,
            live_surfaces: 2,
        });
        sink.on_surface_update(&SurfaceUpdateEvent {
            pass_index: 3,
            surface_index: 1,
            magnitude: -15.0,
            polarity: Polarity::Recessed,
            width: 100.0,
            height: 50.0,
            corner_radius: 20.0,
            bezel: false,
            has_content: true,
        });
        sink.on_polarity_change(&PolarityChangeEvent {
            pass_index: 3,
            surface_index: 1,
            from: Polarity::Raised,
            to: Polarity::Recessed,
        });
        sink.on_pass_summary(&PassSummary {
            pass_index: 3,
            updated: 1,
            polarity_flips: 1,
            ..PassSummary::default()
        });

        let out = lines(sink.into_inner());
        assert_eq!(
            out,
            [
                "[pass:begin] pass=3 live=2",
                "[surface] pass=3 idx=1 m=-15 recessed size=100x50 r=20 bezel=false content=true",
                "[polarity] pass=3 idx=1 raised -> recessed",
                "[summary] pass=3 updated=1 flips=1 content=0 added=0 removed=0",
            ]
        );
    }

    #[test]
    fn traces_a_real_pass() {
        let mut store = SurfaceStore::new();
        let id = store.create_surface();
        store.set_frame(id, Rect::new(0.0, 0.0, 60.0, 30.0));
        store.set_elevation(id, Elevation::ConvexHigh);

        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        store.recompute_traced(&mut Tracer::new(&mut sink));
        store.set_elevation(id, Elevation::ConcaveHigh);
        store.recompute_traced(&mut Tracer::new(&mut sink));

        let out = lines(sink.into_inner());
        assert!(out[0].starts_with("[pass:begin] pass=0"), "got {out:?}");
        assert!(
            out.iter().any(|l| l == "[polarity] pass=1 idx=0 raised -> recessed"),
            "flip is reported on the second pass: {out:?}"
        );
        assert_eq!(
            out.iter().filter(|l| l.starts_with("[summary]")).count(),
            2,
            "one summary per pass"
        );
    }

    #[test]
    fn debug_hides_writer() {
        let sink = PrettyPrintSink::with_writer(Vec::new());
        assert_eq!(format!("{sink:?}"), "PrettyPrintSink { .. }");
    }
}
