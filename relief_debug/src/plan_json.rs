// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of render plans.
//!
//! Paths are written as SVG path data and colors as `#rrggbbaa` strings, so
//! the output can be pasted into an SVG viewer or diffed between runs.
//!
//! # Format
//!
//! ```json
//! {
//!   "frame": [0, 0, 100, 100],
//!   "polarity": "recessed",
//!   "cancel_inner_animations": false,
//!   "clip": { "target": "container", "path": "M0 20 ..." },
//!   "clip_bounds": null,
//!   "items": [
//!     { "kind": "fill", "clipped": false, "rect": [0, 0, 100, 100], "radius": 20,
//!       "color": null },
//!     { "kind": "shadow", "clipped": true, "role": "inner_dark", ... }
//!   ]
//! }
//! ```

use std::io::{self, Write};

use kurbo::Rect;
use peniko::Color;
use peniko::color::{DynamicColor, Srgb};
use relief_core::backend::Presenter;
use relief_core::elevation::Polarity;
use relief_core::plan::{PlanItem, RenderItem, RenderPlan};
use relief_core::shadow::{ShadowPrimitive, ShadowRole};
use relief_core::style::MaskTarget;
use relief_core::surface::{SurfaceChanges, SurfaceStore};
use serde_json::{Value, json};

/// Converts a render plan to a JSON value.
#[must_use]
pub fn plan_to_json(plan: &RenderPlan) -> Value {
    json!({
        "frame": rect_json(plan.frame),
        "polarity": polarity_name(plan.polarity),
        "cancel_inner_animations": plan.cancel_inner_animations,
        "clip": plan.clip.as_ref().map(|clip| json!({
            "target": mask_target_name(clip.target),
            "path": clip.path.to_svg(),
        })),
        "clip_bounds": plan.clip_bounds.map(|bounds| json!({
            "rect": rect_json(bounds.rect()),
            "radius": bounds.radii().top_left,
        })),
        "items": plan.items.iter().map(item_json).collect::<Vec<_>>(),
    })
}

/// Writes a render plan as pretty-printed JSON.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn export(plan: &RenderPlan, w: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, &plan_to_json(plan))?;
    writeln!(w)
}

fn item_json(entry: &PlanItem) -> Value {
    let mut value = match &entry.item {
        RenderItem::Shadow(shadow) => shadow_json(shadow),
        RenderItem::Fill(fill) => json!({
            "kind": "fill",
            "rect": rect_json(fill.shape.rect()),
            "radius": fill.shape.radii().top_left,
            "color": fill.color.map(color_hex),
        }),
        RenderItem::Bezel(bezel) => json!({
            "kind": "bezel",
            "path": bezel.path.to_svg(),
            "fill_rule": format!("{:?}", bezel.fill_rule),
            "stops": bezel
                .brush
                .stops
                .iter()
                .map(|stop| json!({
                    "offset": stop.offset,
                    "color": dynamic_hex(stop.color),
                }))
                .collect::<Vec<_>>(),
        }),
        RenderItem::Content(content) => json!({
            "kind": "content",
            "content": content.content.0,
            "rect": rect_json(content.frame),
            "radius": content.corner_radius,
        }),
    };
    value["clipped"] = Value::Bool(entry.clipped);
    value
}

fn shadow_json(shadow: &ShadowPrimitive) -> Value {
    json!({
        "kind": "shadow",
        "role": role_name(shadow.role),
        "color": color_hex(shadow.color),
        "opacity": shadow.opacity,
        "offset": [shadow.offset.x, shadow.offset.y],
        "blur": shadow.blur_radius,
        "path": shadow.path.to_svg(),
        "fill_rule": format!("{:?}", shadow.fill_rule),
        "fill": shadow.fill.map(color_hex),
    })
}

fn rect_json(rect: Rect) -> Value {
    json!([rect.x0, rect.y0, rect.width(), rect.height()])
}

fn color_hex(color: Color) -> String {
    let c = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}

fn dynamic_hex(color: DynamicColor) -> String {
    color_hex(color.to_alpha_color::<Srgb>())
}

fn role_name(role: ShadowRole) -> &'static str {
    match role {
        ShadowRole::OuterBright => "outer_bright",
        ShadowRole::OuterDark => "outer_dark",
        ShadowRole::InnerBright => "inner_bright",
        ShadowRole::InnerDark => "inner_dark",
    }
}

fn polarity_name(p: Polarity) -> &'static str {
    match p {
        Polarity::Raised => "raised",
        Polarity::Recessed => "recessed",
    }
}

fn mask_target_name(target: MaskTarget) -> &'static str {
    match target {
        MaskTarget::Container => "container",
        MaskTarget::Content => "content",
    }
}

// ----------------------------------------------------------------------------
// Presenter
// ----------------------------------------------------------------------------

/// A [`Presenter`] that records every applied pass as a JSON value.
///
/// Each pass becomes one object:
///
/// ```json
/// { "pass": 0, "added": [0], "removed": [], "flips": [],
///   "surfaces": [ { "index": 0, "plan": { ... } } ] }
/// ```
#[derive(Debug, Default)]
pub struct JsonPresenter {
    passes: Vec<Value>,
}

impl JsonPresenter {
    /// Creates an empty presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded passes, oldest first.
    #[must_use]
    pub fn passes(&self) -> &[Value] {
        &self.passes
    }

    /// Writes all recorded passes as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn write_to(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *w, &self.passes)?;
        writeln!(w)
    }
}

impl Presenter for JsonPresenter {
    fn apply(&mut self, store: &SurfaceStore, changes: &SurfaceChanges) {
        let surfaces: Vec<Value> = changes
            .updated
            .iter()
            .map(|&idx| {
                json!({
                    "index": idx,
                    "plan": plan_to_json(&store.render_plan_at(idx)),
                })
            })
            .collect();
        self.passes.push(json!({
            "pass": self.passes.len(),
            "added": changes.added,
            "removed": changes.removed,
            "flips": changes.polarity_flips,
            "surfaces": surfaces,
        }));
    }
}
