// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated frame loop that drives every widget through the compositing
//! pass.
//!
//! Lays out a gallery of widgets and plain surfaces, then runs 40 synthetic
//! frames of taps, drags and progress updates. Each pass is traced to stdout
//! through a [`PrettyPrintSink`](relief_debug::pretty::PrettyPrintSink) and
//! recorded by a [`JsonPresenter`](relief_debug::plan_json::JsonPresenter),
//! which is written to `plans.json` at the end.

use std::fs::File;
use std::io::{self, BufWriter};

use kurbo::{Rect, Shape};
use relief_core::backend::Presenter;
use relief_core::elevation::Elevation;
use relief_core::style::{BezelStyle, MaskTarget, SurfaceStyle};
use relief_core::surface::{ContentId, SurfaceStore};
use relief_core::trace::Tracer;
use relief_debug::plan_json::JsonPresenter;
use relief_debug::pretty::PrettyPrintSink;
use relief_widgets::{LabeledSwitch, ProgressBar, SlideSwitch, Switch, Widget};

const FRAME_COUNT: u32 = 40;
/// Frame interval of a 60 Hz display, in seconds.
const FRAME_DT: f64 = 1.0 / 60.0;

const ON_FACE: ContentId = ContentId(1);
const OFF_FACE: ContentId = ContentId(2);
const CARD_TEXT: ContentId = ContentId(3);

fn main() -> io::Result<()> {
    let mut store = SurfaceStore::new();
    let mut pretty = PrettyPrintSink::new(Box::new(io::stdout()));
    let mut presenter = JsonPresenter::new();

    // -- plain surfaces ----------------------------------------------------
    let card = store.create_surface();
    store.set_frame(card, Rect::new(20.0, 20.0, 220.0, 140.0));
    store.set_corner_radius(card, 20.0);
    store.set_elevation(card, Elevation::ConvexLow);

    let well_style = SurfaceStyle::default()
        .with_bezel(BezelStyle::default().with_width(2.0))
        .with_mask_target(MaskTarget::Content);
    let well = store.create_surface_with(well_style, Some(CARD_TEXT));
    store.set_frame(well, Rect::new(260.0, 20.0, 460.0, 140.0));
    store.set_corner_radius(well, 20.0);
    store.set_elevation(well, Elevation::ConcaveLow);

    // -- widgets -----------------------------------------------------------
    let mut switch = Switch::new(&mut store);
    let size = switch.intrinsic_size();
    switch.layout(&mut store, Rect::from_origin_size((20.0, 180.0), size));

    let mut slide = SlideSwitch::new(&mut store);
    let size = slide.intrinsic_size();
    slide.layout(&mut store, Rect::from_origin_size((120.0, 175.0), size));

    let mut labeled = LabeledSwitch::new(&mut store, ON_FACE, OFF_FACE);
    let size = labeled.intrinsic_size();
    labeled.layout(&mut store, Rect::from_origin_size((240.0, 160.0), size));

    let mut progress = ProgressBar::new(&mut store);
    progress.layout(&mut store, Rect::new(20.0, 260.0, 460.0, 280.0));

    // -- simulated loop ----------------------------------------------------
    for frame in 0..FRAME_COUNT {
        // 1. Input
        match frame {
            0 => {
                if let Some(toggled) = switch.toggle(&mut store) {
                    println!("switch toggled: on={}", toggled.on);
                }
            }
            2 => {
                let transition = progress.set_progress(&mut store, 0.6, true);
                println!(
                    "progress width {} -> {} over {}s",
                    transition.from(),
                    transition.to(),
                    transition.duration()
                );
            }
            5..=12 => {
                let translation = f64::from(frame - 5) * 6.0 - 20.0;
                let feedback = slide.pan_changed(&mut store, translation);
                if feedback.haptic {
                    println!("slide switch: haptic tick");
                }
            }
            13 => {
                let feedback = slide.pan_ended(&mut store);
                if let Some(toggled) = feedback.toggled {
                    println!("slide switch toggled: on={}", toggled.on);
                }
            }
            20 => {
                if labeled.toggle(&mut store).toggled.is_some() {
                    println!("labeled switch face: {:?}", store.content(labeled.well()));
                }
            }
            25 => store.set_elevation(well, Elevation::ConvexSlight),
            30 => {
                let detached = store.destroy_surface(card);
                println!("card removed, content {detached:?}");
            }
            _ => {}
        }

        // 2. Animate
        switch.advance(&mut store, FRAME_DT);
        slide.advance(&mut store, FRAME_DT);
        labeled.advance(FRAME_DT);
        progress.advance(&mut store, FRAME_DT);

        // 3. Recompute
        let changes = store.recompute_traced(&mut Tracer::new(&mut pretty));

        // 4. Present
        presenter.apply(&store, &changes);
    }

    println!(
        "caption={} progress={} lamp_on={}",
        labeled.caption(),
        progress.progress(),
        switch.indicator().is_on()
    );
    println!(
        "thumb rims: switch {:?}, slide {:?}",
        switch.thumb_rim(&store).path.bounding_box(),
        slide.thumb_rim(&store).path.bounding_box()
    );

    // -- export plans ------------------------------------------------------
    let path = "plans.json";
    let mut writer = BufWriter::new(File::create(path)?);
    presenter.write_to(&mut writer)?;
    println!("Wrote {path} ({FRAME_COUNT} passes)");
    Ok(())
}
