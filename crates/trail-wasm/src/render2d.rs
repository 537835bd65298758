//! Canvas2D software renderer.
//!
//! Draws a `DisplayList` to an HTML `<canvas>` via
//! `CanvasRenderingContext2d`. Used where WebGPU is unavailable.

use trail_core::Location;
use trail_render::{CircleStyle, DisplayList, LineStyle, Rgba, Shape, Theme};
use web_sys::CanvasRenderingContext2d;

/// Theme-dependent colors for the canvas renderer.
pub struct CanvasTheme {
    pub bg: &'static str,
    pub items: Theme,
}

impl CanvasTheme {
    pub fn light() -> Self {
        Self {
            bg: "#FFFFFF",
            items: Theme::default(),
        }
    }

    pub fn dark() -> Self {
        let route = LineStyle {
            color: Rgba::rgb(0x48, 0xaf, 0xf0),
            width: 5.0,
        };
        Self {
            bg: "#1C2127",
            items: Theme {
                trail: LineStyle {
                    color: Rgba::rgb(0xa7, 0xb6, 0xc2),
                    width: 3.0,
                },
                preview: route,
                exiting: route,
                hover: CircleStyle {
                    color: Rgba::rgb(0xff, 0xff, 0xff).with_opacity(0.75),
                    radius: 10.0,
                },
            },
        }
    }
}

/// Clear the canvas and draw every visible item in list order.
pub fn render_display_list(ctx: &CanvasRenderingContext2d, list: &DisplayList, theme: &CanvasTheme) {
    ctx.set_fill_style_str(theme.bg);
    ctx.fill_rect(0.0, 0.0, list.viewport.width, list.viewport.height);

    for item in list.visible() {
        match &item.shape {
            Shape::Polyline { points, style } => draw_polyline(ctx, points, style),
            Shape::Circle { center, style } => draw_circle(ctx, *center, style),
        }
    }
}

fn draw_polyline(ctx: &CanvasRenderingContext2d, points: &[Location], style: &LineStyle) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.save();
    ctx.set_stroke_style_str(&style.color.to_css());
    ctx.set_line_width(style.width);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        ctx.line_to(first.x, first.y);
    }
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
    ctx.restore();
}

fn draw_circle(ctx: &CanvasRenderingContext2d, center: Location, style: &CircleStyle) {
    ctx.set_fill_style_str(&style.color.to_css());
    ctx.begin_path();
    let _ = ctx.arc(center.x, center.y, style.radius, 0.0, std::f64::consts::TAU);
    ctx.fill();
}
