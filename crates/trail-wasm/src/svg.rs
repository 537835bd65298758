//! Standalone SVG export of a display list.
//!
//! Every item is written as one keyed element. Retracted exiting paths keep
//! their element with `visibility="hidden"`, the same way a live DOM
//! renderer holds them until the next release.

use crate::render2d::CanvasTheme;
use std::fmt::Write;
use trail_render::{DisplayItem, DisplayList, ItemKey, Shape};

pub fn render_svg(list: &DisplayList, theme: &CanvasTheme) -> String {
    let (w, h) = (list.viewport.width, list.viewport.height);
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="{}" />"#, theme.bg);
    for item in &list.items {
        write_item(&mut out, item);
    }
    out.push_str("</svg>\n");
    out
}

fn write_item(out: &mut String, item: &DisplayItem) {
    let id = escape_attr(&element_id(item.key));
    let visibility = if item.visible { "" } else { r#" visibility="hidden""# };
    match &item.shape {
        Shape::Polyline { points, style } => {
            let mut coords = String::new();
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    coords.push(' ');
                }
                let _ = write!(coords, "{},{}", p.x, p.y);
            }
            let _ = writeln!(
                out,
                r#"  <polyline id="{id}"{visibility} points="{coords}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" />"#,
                style.color.to_css(),
                style.width
            );
        }
        Shape::Circle { center, style } => {
            let _ = writeln!(
                out,
                r#"  <circle id="{id}"{visibility} cx="{}" cy="{}" r="{}" fill="{}" />"#,
                center.x,
                center.y,
                style.radius,
                style.color.to_css()
            );
        }
    }
}

fn element_id(key: ItemKey) -> String {
    match key {
        ItemKey::Trail(id) => format!("trail-{id}"),
        ItemKey::Exiting(id) => format!("exiting-{id}"),
        ItemKey::Preview => "preview".to_string(),
        ItemKey::Hover => "hover".to_string(),
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use trail_core::{EdgeId, Extent, Location};
    use trail_render::Theme;

    #[test]
    fn hidden_items_keep_their_element() {
        let theme = CanvasTheme::light();
        let list = DisplayList {
            viewport: Extent::new(40.0, 20.0),
            items: vec![
                DisplayItem {
                    key: ItemKey::Trail(EdgeId::intern("a&b")),
                    shape: Shape::Polyline {
                        points: vec![Location::new(0.0, 10.0), Location::new(40.0, 10.0)],
                        style: Theme::default().trail,
                    },
                    visible: true,
                },
                DisplayItem {
                    key: ItemKey::Exiting(7),
                    shape: Shape::Polyline {
                        points: vec![Location::new(40.0, 10.0)],
                        style: Theme::default().exiting,
                    },
                    visible: false,
                },
            ],
        };
        let svg = render_svg(&list, &theme);
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[2],
            r##"  <polyline id="trail-a&amp;b" points="0,10 40,10" fill="none" stroke="#5c7080" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" />"##
        );
        assert!(lines[3].starts_with(r#"  <polyline id="exiting-7" visibility="hidden" points="40,10""#));
        assert_eq!(lines[4], "</svg>");
    }
}
