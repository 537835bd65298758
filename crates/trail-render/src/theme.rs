//! Colors and stroke widths for every display item kind.

/// 8-bit straight-alpha color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale alpha by `opacity`, clamped to `[0, 1]`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let alpha = opacity.clamp(0.0, 1.0);
        Self {
            a: (self.a as f32 * alpha).round() as u8,
            ..self
        }
    }

    /// `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Round-capped, round-joined polyline stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgba,
    /// Viewport units.
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStyle {
    pub color: Rgba,
    /// Viewport units.
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Every trail of the network. **Default**: slate, 3 wide.
    pub trail: LineStyle,
    /// Live route while dragging. **Default**: blue, 5 wide.
    pub preview: LineStyle,
    /// Released routes while they retract. **Default**: same as `preview`.
    pub exiting: LineStyle,
    /// Nearest network point under the pointer. **Default**: sky blue at
    /// 75 % opacity, radius 10.
    pub hover: CircleStyle,
}

impl Default for Theme {
    fn default() -> Self {
        let route = LineStyle {
            color: Rgba::rgb(0, 0, 255),
            width: 5.0,
        };
        Self {
            trail: LineStyle {
                color: Rgba::rgb(0x5c, 0x70, 0x80),
                width: 3.0,
            },
            preview: route,
            exiting: route,
            hover: CircleStyle {
                color: Rgba::rgb(0x48, 0xaf, 0xf0).with_opacity(0.75),
                radius: 10.0,
            },
        }
    }
}
