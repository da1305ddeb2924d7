// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small recessed lamp that imitates an LED.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use peniko::Color;
use relief_core::elevation::Elevation;
use relief_core::shadow::ShadowRole;
use relief_core::style::{BezelStyle, ShadowPalette, SurfaceStyle};
use relief_core::surface::{SurfaceId, SurfaceStore};

use crate::widget::{Widget, leading_origin};

/// Size of the lamp.
pub const SIZE: Size = Size::new(8.0, 8.0);

/// Elevation of the lamp.
pub const ELEVATION: Elevation = Elevation::Custom(-1.0);

/// Default lamp color when on.
pub const DEFAULT_ON_TINT: Color = Color::from_rgb8(0, 255, 0);

/// Default lamp color when off.
pub const DEFAULT_OFF_TINT: Color = Color::from_rgb8(175, 192, 210);

/// An 8×8 lamp filled with its on or off tint.
///
/// The lamp reflects light the opposite way of other surfaces: its bezel and
/// inner shadow colors are swapped, and the upper-left inner shadow is
/// disabled.
#[derive(Debug)]
pub struct IndicatorLight {
    surface: SurfaceId,
    on: bool,
    on_tint: Color,
    off_tint: Color,
}

impl IndicatorLight {
    /// Creates an unlit lamp.
    pub fn new(store: &mut SurfaceStore) -> Self {
        let palette = ShadowPalette::default()
            .with_inner_swapped()
            .with_color(ShadowRole::InnerDark, Color::TRANSPARENT);
        let style = SurfaceStyle::default()
            .with_palette(palette)
            .with_bezel(BezelStyle::default().swapped().with_width(1.0))
            .with_background(DEFAULT_OFF_TINT);
        let surface = store.create_surface_with(style, None);
        store.set_size(surface, SIZE);
        store.set_corner_radius(surface, SIZE.width / 2.0);
        store.set_elevation(surface, ELEVATION);
        Self {
            surface,
            on: false,
            on_tint: DEFAULT_ON_TINT,
            off_tint: DEFAULT_OFF_TINT,
        }
    }

    /// The lamp surface.
    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Whether the lamp is lit.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Current fill color.
    #[must_use]
    pub fn tint(&self) -> Color {
        if self.on { self.on_tint } else { self.off_tint }
    }

    /// Lights or dims the lamp.
    pub fn set_on(&mut self, store: &mut SurfaceStore, on: bool) {
        if self.on != on {
            self.on = on;
            self.update_tint(store);
        }
    }

    /// Sets the color used when lit.
    pub fn set_on_tint(&mut self, store: &mut SurfaceStore, color: Color) {
        self.on_tint = color;
        self.update_tint(store);
    }

    /// Sets the color used when dimmed.
    pub fn set_off_tint(&mut self, store: &mut SurfaceStore, color: Color) {
        self.off_tint = color;
        self.update_tint(store);
    }

    fn update_tint(&self, store: &mut SurfaceStore) {
        store.set_background(self.surface, Some(self.tint()));
    }
}

impl Widget for IndicatorLight {
    fn intrinsic_size(&self) -> Size {
        SIZE
    }

    fn layout(&mut self, store: &mut SurfaceStore, frame: Rect) {
        store.set_frame(
            self.surface,
            Rect::from_origin_size(leading_origin(frame, SIZE), SIZE),
        );
    }

    fn surfaces(&self) -> Vec<SurfaceId> {
        vec![self.surface]
    }
}
