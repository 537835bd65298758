//! Display list → Vello drawing commands.

use crate::display::{DisplayList, Shape};
use crate::theme::{CircleStyle, LineStyle, Rgba};
use kurbo::{Affine, BezPath, Cap, Circle, Join, Stroke as KurboStroke};
use peniko::{Color, Fill};
use trail_core::Location;
use vello::Scene;

/// Paint every visible item of `list` into `scene`.
///
/// Call once per frame with a freshly-cleared `Scene`; the caller presents
/// it. Hidden items are skipped. Returns the number of items painted.
pub fn paint_display_list(scene: &mut Scene, list: &DisplayList) -> usize {
    let mut painted = 0;
    for item in list.visible() {
        let drawn = match &item.shape {
            Shape::Polyline { points, style } => paint_polyline(scene, points, style),
            Shape::Circle { center, style } => {
                paint_circle(scene, *center, style);
                true
            }
        };
        if drawn {
            painted += 1;
        }
    }
    log::trace!("painted {painted}/{} items", list.items.len());
    painted
}

// ─── Shape painters ──────────────────────────────────────────────────────────

fn paint_polyline(scene: &mut Scene, points: &[Location], style: &LineStyle) -> bool {
    let Some(bez) = to_bez_path(points) else {
        return false;
    };
    let stroke = KurboStroke {
        width: style.width,
        join: Join::Round,
        start_cap: Cap::Round,
        end_cap: Cap::Round,
        ..Default::default()
    };
    scene.stroke(&stroke, Affine::IDENTITY, to_color(style.color), None, &bez);
    true
}

fn paint_circle(scene: &mut Scene, center: Location, style: &CircleStyle) {
    let shape = Circle::new((center.x, center.y), style.radius);
    scene.fill(Fill::NonZero, Affine::IDENTITY, to_color(style.color), None, &shape);
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// A single point still draws: round caps turn a zero-length segment into a
/// dot.
fn to_bez_path(points: &[Location]) -> Option<BezPath> {
    let (first, rest) = points.split_first()?;
    let mut bez = BezPath::new();
    bez.move_to((first.x, first.y));
    if rest.is_empty() {
        bez.line_to((first.x, first.y));
    }
    for p in rest {
        bez.line_to((p.x, p.y));
    }
    Some(bez)
}

fn to_color(c: Rgba) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a)
}
