//! WebAssembly bindings for the hobby network engine.
//!
//! ## Example
//!
//! ```js
//! import { NetworkEngine, CanvasRenderer } from 'hobbynet';
//!
//! const canvas = document.querySelector('canvas');
//! const renderer = new CanvasRenderer(canvas);
//! const engine = new NetworkEngine(42n);
//!
//! engine.setCategory('foods');
//! canvas.addEventListener('mousemove', (e) => engine.pointerMove(e.offsetX, e.offsetY));
//! canvas.addEventListener('click', (e) => engine.click(e.offsetX, e.offsetY));
//!
//! const loop = () => {
//!   engine.tick();
//!   engine.draw(renderer);
//!   requestAnimationFrame(loop);
//! };
//! requestAnimationFrame(loop);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use hobbynet_core::{Category, HobbynetError};

mod canvas;
mod engine;
mod types;

pub use canvas::*;
pub use engine::Engine;
pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The network engine interface for JavaScript.
#[wasm_bindgen]
pub struct NetworkEngine {
    engine: Engine,
}

#[wasm_bindgen]
impl NetworkEngine {
    /// Create an engine over the demo roster generated from `seed`.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Self {
        Self {
            engine: Engine::with_roster(seed),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Replace the dataset with a JSON array of people. Returns the count.
    #[wasm_bindgen(js_name = loadJson)]
    pub fn load_json(&mut self, json: &str) -> Result<usize, JsError> {
        self.engine.load_json(json).map_err(js_error)
    }

    /// Select the category that drives similarity.
    #[wasm_bindgen(js_name = setCategory)]
    pub fn set_category(&mut self, key: &str) -> Result<(), JsError> {
        self.engine.set_category(key).map_err(js_error)
    }

    /// The current category key.
    #[wasm_bindgen(getter)]
    pub fn category(&self) -> String {
        self.engine.category().key().to_string()
    }

    /// All categories as `{ key, label }`, in selector order.
    pub fn categories() -> Result<JsValue, JsError> {
        let categories: Vec<CategoryJs> = Category::ALL.into_iter().map(Into::into).collect();
        to_js(&categories)
    }

    /// Advance the rotation by one animation step and return the angle.
    pub fn tick(&mut self) -> f64 {
        self.engine.tick()
    }

    /// Jump to an angle in radians.
    #[wasm_bindgen(js_name = setRotation)]
    pub fn set_rotation(&mut self, angle: f64) {
        self.engine.set_rotation(angle);
    }

    /// The current rotation angle.
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.engine.rotation()
    }

    /// Override engine options; omitted fields keep their value.
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: JsValue) -> Result<(), JsError> {
        let opts: EngineOptionsJs = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
        self.engine.apply_options(&opts);
        Ok(())
    }

    /// Tell the engine the CSS size the canvas is displayed at, so pointer
    /// coordinates can be mapped to canvas pixels.
    #[wasm_bindgen(js_name = setDisplaySize)]
    pub fn set_display_size(&mut self, css_width: f64, css_height: f64) {
        self.engine.set_display_size(css_width, css_height);
    }

    /// Compute the frame for a canvas of `width` x `height` pixels.
    pub fn frame(&mut self, width: f64, height: f64) -> Result<JsValue, JsError> {
        self.engine.resize(width, height).map_err(js_error)?;
        let frame = self.engine.snapshot().map_err(js_error)?;
        to_js(&frame)
    }

    /// Node under a canvas-pixel point, or `null`.
    #[wasm_bindgen(js_name = hitNode)]
    pub fn hit_node(&mut self, x: f64, y: f64) -> Result<JsValue, JsError> {
        match self.engine.hit_node(x, y).map_err(js_error)? {
            Some(hit) => to_js(&hit),
            None => Ok(JsValue::NULL),
        }
    }

    /// Link under a canvas-pixel point, or `null`.
    #[wasm_bindgen(js_name = hitLink)]
    pub fn hit_link(&mut self, x: f64, y: f64) -> Result<JsValue, JsError> {
        match self.engine.hit_link(x, y).map_err(js_error)? {
            Some(hit) => to_js(&hit),
            None => Ok(JsValue::NULL),
        }
    }

    /// Pointer moved to element-local CSS pixels. Returns whether a redraw
    /// is needed.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<bool, JsError> {
        self.engine.pointer_move(x, y).map_err(js_error)
    }

    /// Pointer left the canvas.
    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) -> bool {
        self.engine.pointer_leave()
    }

    /// Click at element-local CSS pixels. Returns the selected id or `undefined`.
    pub fn click(&mut self, x: f64, y: f64) -> Result<Option<u64>, JsError> {
        let selected = self.engine.click(x, y).map_err(js_error)?;
        Ok(selected.map(|id| id.0))
    }

    /// Draw the current frame onto `renderer`, sized to its canvas.
    pub fn draw(&mut self, renderer: &CanvasRenderer) -> Result<(), JsError> {
        self.engine
            .resize(renderer.width(), renderer.height())
            .map_err(js_error)?;
        self.engine.set_display_size(renderer.css_width(), renderer.css_height());
        let scene = self.engine.scene().map_err(js_error)?;
        renderer
            .render_scene(&scene)
            .map_err(|e| JsError::new(&format!("Canvas error: {:?}", e)))
    }
}

fn js_error(err: HobbynetError) -> JsError {
    JsError::new(&err.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get the engine version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
