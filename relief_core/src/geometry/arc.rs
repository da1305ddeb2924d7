// Copyright 2026 the Relief Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular arc segments and path assembly.

use core::f64::consts::TAU;

use kurbo::{Arc, BezPath, Point, Vec2};

/// Tolerance used when flattening arcs into cubic Béziers.
pub const ARC_TOLERANCE: f64 = 0.1;

/// Direction in which an arc sweeps from its start angle to its end angle.
///
/// Directions are as seen on screen with y pointing down, so
/// [`Clockwise`](Self::Clockwise) means the angle increases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Increasing angle.
    Clockwise,
    /// Decreasing angle.
    CounterClockwise,
}

/// Builds a circular arc from `start` to `end` sweeping in `winding`.
///
/// If the angles are not ordered for the requested direction, the sweep wraps
/// around the circle. A sweep is always shorter than a full turn.
#[must_use]
pub fn circular_arc(center: Point, radius: f64, start: f64, end: f64, winding: Winding) -> Arc {
    Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: start,
        sweep_angle: sweep(start, end, winding),
        x_rotation: 0.0,
    }
}

fn sweep(start: f64, end: f64, winding: Winding) -> f64 {
    let delta = (end - start) % TAU;
    match winding {
        Winding::Clockwise if delta < 0.0 => delta + TAU,
        Winding::CounterClockwise if delta > 0.0 => delta - TAU,
        _ => delta,
    }
}

/// Returns the start point of a circular arc.
#[must_use]
pub fn arc_start(arc: &Arc) -> Point {
    arc.center + Vec2::from_angle(arc.start_angle) * arc.radii.x
}

/// Returns the end point of a circular arc.
#[must_use]
pub fn arc_end(arc: &Arc) -> Point {
    arc.center + Vec2::from_angle(arc.start_angle + arc.sweep_angle) * arc.radii.x
}

/// Appends an arc to `path`.
///
/// An empty path starts at the arc's start point. Otherwise a straight edge
/// connects the current point to the arc.
pub fn append_arc(path: &mut BezPath, arc: &Arc) {
    let start = arc_start(arc);
    if path.elements().is_empty() {
        path.move_to(start);
    } else {
        path.line_to(start);
    }
    path.extend(arc.append_iter(ARC_TOLERANCE));
}

/// Connects `arcs` in order into one contour.
#[must_use]
pub fn path_from_arcs(arcs: &[Arc], close: bool) -> BezPath {
    let mut path = BezPath::new();
    for arc in arcs {
        append_arc(&mut path, arc);
    }
    if close && !path.elements().is_empty() {
        path.close_path();
    }
    path
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use kurbo::PathEl;

    use super::*;

    fn near(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn clockwise_sweep_is_positive() {
        let arc = circular_arc(Point::ZERO, 1.0, PI, 1.5 * PI, Winding::Clockwise);
        assert!((arc.sweep_angle - FRAC_PI_2).abs() < 1e-12, "{}", arc.sweep_angle);
    }

    #[test]
    fn counter_clockwise_sweep_is_negative() {
        let arc = circular_arc(Point::ZERO, 1.0, 1.75 * PI, 1.5 * PI, Winding::CounterClockwise);
        assert!((arc.sweep_angle + 0.25 * PI).abs() < 1e-12, "{}", arc.sweep_angle);
    }

    #[test]
    fn misordered_angles_wrap() {
        let arc = circular_arc(Point::ZERO, 1.0, PI, FRAC_PI_2, Winding::Clockwise);
        assert!((arc.sweep_angle - 1.5 * PI).abs() < 1e-12, "{}", arc.sweep_angle);
    }

    #[test]
    fn endpoints_on_y_down_screen() {
        // From the left of the center to the top of it, on screen.
        let arc = circular_arc(Point::new(10.0, 10.0), 5.0, PI, 1.5 * PI, Winding::Clockwise);
        assert!(near(arc_start(&arc), Point::new(5.0, 10.0)), "start");
        assert!(near(arc_end(&arc), Point::new(10.0, 5.0)), "end");
    }

    #[test]
    fn consecutive_arcs_are_joined_by_lines() {
        let a = circular_arc(Point::new(0.0, 0.0), 1.0, 0.0, FRAC_PI_2, Winding::Clockwise);
        let b = circular_arc(Point::new(5.0, 0.0), 1.0, FRAC_PI_2, PI, Winding::Clockwise);
        let path = path_from_arcs(&[a, b], true);
        let elements = path.elements();
        assert!(matches!(elements[0], PathEl::MoveTo(_)), "starts with move");
        let moves = elements.iter().filter(|el| matches!(el, PathEl::MoveTo(_))).count();
        let lines = elements.iter().filter(|el| matches!(el, PathEl::LineTo(_))).count();
        assert_eq!(moves, 1, "single subpath");
        assert_eq!(lines, 1, "one connecting edge");
        assert!(matches!(elements.last(), Some(PathEl::ClosePath)), "closed");
    }

    #[test]
    fn empty_arc_list_is_empty_path() {
        assert!(path_from_arcs(&[], true).elements().is_empty(), "no elements");
    }
}
