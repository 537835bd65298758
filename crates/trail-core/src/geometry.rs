//! Planar geometry helpers for network-space polylines.
//!
//! Everything here works in network units (f64). Viewport projection lives in
//! the editor crate.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Location {
    type Output = Location;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Location {
    type Output = Location;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Location {
    type Output = Location;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Location {
    type Output = Location;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Width and height of an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when either side is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}

/// Axis-aligned bounds of a set of locations. `None` for an empty set.
pub fn bounding_box(locations: impl IntoIterator<Item = Location>) -> Option<(Location, Location)> {
    locations.into_iter().fold(None, |acc, loc| match acc {
        None => Some((loc, loc)),
        Some((min, max)) => Some((
            Location::new(min.x.min(loc.x), min.y.min(loc.y)),
            Location::new(max.x.max(loc.x), max.y.max(loc.y)),
        )),
    })
}

/// Total length of a polyline.
pub fn polyline_length(points: &[Location]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Closest point on segment `a..b` to `p`, as `(point, t)` with `t ∈ [0, 1]`.
pub fn project_onto_segment(p: Location, a: Location, b: Location) -> (Location, f64) {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return (a, 0.0);
    }
    let ap = p - a;
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    (a.lerp(b, t), t)
}

/// Location at arc length `distance` along a polyline, clamped to its ends.
pub fn point_along(points: &[Location], distance: f64) -> Location {
    let Some(&first) = points.first() else {
        return Location::ORIGIN;
    };
    if distance <= 0.0 {
        return first;
    }
    let mut remaining = distance;
    for w in points.windows(2) {
        let seg = w[0].distance(w[1]);
        if remaining <= seg {
            if seg == 0.0 {
                return w[1];
            }
            return w[0].lerp(w[1], remaining / seg);
        }
        remaining -= seg;
    }
    points.last().copied().unwrap_or(first)
}

/// The part of a polyline between arc lengths `from` and `to`.
///
/// When `from > to` the result runs backwards. Both offsets are clamped to
/// the polyline. The result always has at least one point.
pub fn sub_polyline(points: &[Location], from: f64, to: f64) -> Vec<Location> {
    if from > to {
        let mut out = sub_polyline(points, to, from);
        out.reverse();
        return out;
    }
    let mut out = vec![point_along(points, from)];
    let mut walked = 0.0;
    for w in points.windows(2) {
        walked += w[0].distance(w[1]);
        if walked > from && walked < to {
            out.push(w[1]);
        }
    }
    let end = point_along(points, to);
    if out.last() != Some(&end) {
        out.push(end);
    }
    out
}

/// Drop the first `distance` units of a polyline.
pub fn trim_polyline_start(points: &[Location], distance: f64) -> Vec<Location> {
    let total = polyline_length(points);
    sub_polyline(points, distance.clamp(0.0, total), total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(x: f64, y: f64) -> Location {
        Location::new(x, y)
    }

    #[test]
    fn projection_clamps_to_segment() {
        let (p, t) = project_onto_segment(l(-5.0, 3.0), l(0.0, 0.0), l(10.0, 0.0));
        assert_eq!(p, l(0.0, 0.0));
        assert_eq!(t, 0.0);

        let (p, t) = project_onto_segment(l(4.0, 3.0), l(0.0, 0.0), l(10.0, 0.0));
        assert_eq!(p, l(4.0, 0.0));
        assert!((t - 0.4).abs() < 1e-12);
    }

    #[test]
    fn point_along_walks_corners() {
        let line = [l(0.0, 0.0), l(10.0, 0.0), l(10.0, 10.0)];
        assert_eq!(point_along(&line, 15.0), l(10.0, 5.0));
        assert_eq!(point_along(&line, 99.0), l(10.0, 10.0));
        assert_eq!(point_along(&line, -1.0), l(0.0, 0.0));
    }

    #[test]
    fn sub_polyline_keeps_interior_vertices() {
        let line = [l(0.0, 0.0), l(10.0, 0.0), l(10.0, 10.0)];
        let part = sub_polyline(&line, 5.0, 15.0);
        assert_eq!(part, vec![l(5.0, 0.0), l(10.0, 0.0), l(10.0, 5.0)]);
        assert!((polyline_length(&part) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn sub_polyline_backwards_is_reversed() {
        let line = [l(0.0, 0.0), l(10.0, 0.0), l(10.0, 10.0)];
        let part = sub_polyline(&line, 15.0, 5.0);
        assert_eq!(part, vec![l(10.0, 5.0), l(10.0, 0.0), l(5.0, 0.0)]);
    }

    #[test]
    fn trimming_past_the_end_leaves_a_point() {
        let line = [l(0.0, 0.0), l(3.0, 4.0)];
        let trimmed = trim_polyline_start(&line, 100.0);
        assert_eq!(polyline_length(&trimmed), 0.0);
        assert_eq!(trimmed.last(), Some(&l(3.0, 4.0)));
    }

    #[test]
    fn degenerate_extents() {
        assert!(Extent::new(0.0, 10.0).is_degenerate());
        assert!(Extent::new(10.0, f64::NAN).is_degenerate());
        assert!(!Extent::new(1.0, 1.0).is_degenerate());
    }
}
