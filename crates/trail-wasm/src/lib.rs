//! WASM bridge for the trail viewer: exposes the interaction engine to
//! JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards pointer,
//! resize and `requestAnimationFrame` callbacks here and repaints whenever a
//! handler returns `true`.

mod render2d;
mod svg;

use trail_core::{Extent, Location, TrailNetwork, parse_network};
use trail_editor::{ViewerConfig, ViewerError, ViewportController};
use trail_render::DisplayList;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

pub use render2d::CanvasTheme;
pub use svg::render_svg;

/// The WASM-facing viewer. All interaction from the page goes through this
/// struct.
#[wasm_bindgen]
pub struct TrailCanvas {
    controller: ViewportController<TrailNetwork>,
    /// Dark mode flag — `false` = light (default), `true` = dark.
    dark_mode: bool,
}

#[wasm_bindgen]
impl TrailCanvas {
    /// Load a network from its JSON form and fit it into a `width` x
    /// `height` canvas. `config_json` may be omitted for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        network_json: &str,
        width: f64,
        height: f64,
        config_json: Option<String>,
    ) -> Result<TrailCanvas, JsValue> {
        console_error_panic_hook_setup();
        Self::load(network_json, width, height, config_json.as_deref()).map_err(to_js)
    }

    /// Returns true if a re-render is needed.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> Result<bool, JsValue> {
        self.controller
            .on_pointer_press(Location::new(x, y))
            .map_err(to_js)
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> Result<bool, JsValue> {
        self.controller
            .on_pointer_move(Location::new(x, y))
            .map_err(to_js)
    }

    /// Release commits the dragged route and removes fully retracted ones.
    pub fn handle_pointer_up(&mut self) -> Result<bool, JsValue> {
        self.controller.on_pointer_release().map_err(to_js)
    }

    pub fn handle_pointer_leave(&mut self) -> bool {
        self.controller.on_pointer_leave()
    }

    /// Resize the canvas. A zero-sized canvas is rejected and the previous
    /// fit is kept.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<bool, JsValue> {
        self.controller
            .on_resize(Extent::new(width, height))
            .map_err(to_js)
    }

    /// Call from every `requestAnimationFrame` callback, then re-arm.
    pub fn on_animation_frame(&mut self, timestamp_ms: f64) -> bool {
        self.controller.on_animation_frame(timestamp_ms)
    }

    /// Set the canvas theme.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Render the current frame to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let theme = self.canvas_theme();
        let list = self.display_list(&theme).map_err(to_js)?;
        render2d::render_display_list(ctx, &list, &theme);
        Ok(())
    }

    /// Export the current frame as a standalone SVG document.
    pub fn to_svg(&self) -> Result<String, JsValue> {
        let theme = self.canvas_theme();
        let list = self.display_list(&theme).map_err(to_js)?;
        Ok(render_svg(&list, &theme))
    }

    /// The current re-render payload as JSON, for hosts that draw
    /// themselves.
    pub fn frame_json(&self) -> Result<String, JsValue> {
        let frame = self.controller.frame().map_err(to_js)?;
        serde_json::to_string(&frame).map_err(to_js)
    }

    /// Same payload as `frame_json`, parsed into a JS object.
    pub fn frame(&self) -> Result<JsValue, JsValue> {
        js_sys::JSON::parse(&self.frame_json()?)
    }

    /// Number of exiting paths still held, retracted ones included.
    pub fn exiting_count(&self) -> usize {
        self.controller.exiting().len()
    }
}

impl TrailCanvas {
    fn load(
        network_json: &str,
        width: f64,
        height: f64,
        config_json: Option<&str>,
    ) -> Result<Self, ViewerError> {
        let config = match config_json {
            Some(json) => ViewerConfig::from_json(json)?,
            None => ViewerConfig::default(),
        };
        let network = config.prepare_network(parse_network(network_json)?)?;
        let controller =
            ViewportController::new(network, Extent::new(width, height), &config)?;
        log::info!(
            "trail canvas ready: {} junctions, {} trails",
            controller.network().graph.node_count(),
            controller.network().graph.edge_count()
        );
        Ok(Self {
            controller,
            dark_mode: false,
        })
    }

    fn canvas_theme(&self) -> CanvasTheme {
        if self.dark_mode {
            CanvasTheme::dark()
        } else {
            CanvasTheme::light()
        }
    }

    fn display_list(&self, theme: &CanvasTheme) -> Result<DisplayList, ViewerError> {
        let frame = self.controller.frame()?;
        Ok(DisplayList::build(
            self.controller.network(),
            &frame,
            &theme.items,
        ))
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("trail WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

/// Check a network JSON document without building a viewer.
/// Returns `{"ok":true}` or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate_network(json: &str) -> String {
    match parse_network(json) {
        Ok(_) => serde_json::json!({ "ok": true }).to_string(),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }).to_string(),
    }
}
