#![cfg(target_arch = "wasm32")]
use canvas::CanvasSurface;
use frame::FrameContext;
use fx_core::{Color, FxConfig, FxScene, GestureEvent, SessionClock, SparkShape};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod dom;
mod frame;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");
    Ok(())
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Handle the page keeps for the lifetime of the camera session. The page's
/// landmark provider feeds it frames; the effects render on their own
/// requestAnimationFrame loop.
#[wasm_bindgen]
pub struct HandFx {
    scene: Rc<RefCell<FxScene>>,
    clock: SessionClock,
    running: Rc<Cell<bool>>,
    document: web::Document,
}

#[wasm_bindgen]
impl HandFx {
    /// `effects_canvas_id` is repainted every frame; `ink_canvas_id` holds
    /// persistent strokes and should be stacked underneath it.
    #[wasm_bindgen(constructor)]
    pub fn new(effects_canvas_id: &str, ink_canvas_id: &str) -> Result<HandFx, JsValue> {
        init(effects_canvas_id, ink_canvas_id).map_err(|e| {
            log::error!("init error: {:?}", e);
            js_err(format!("{e:#}"))
        })
    }

    /// One detector hand frame: `labels[i]` is "Left" or "Right" and `coords`
    /// packs 21 `x, y, z` triples per label, in label order.
    pub fn on_hands(&self, labels: js_sys::Array, coords: &[f32]) -> Result<(), JsValue> {
        if !self.running.get() {
            return Ok(());
        }
        let labels: Vec<String> = labels
            .iter()
            .map(|v| v.as_string().unwrap_or_default())
            .collect();
        let now = self.clock.now_ms();
        let events = self
            .scene
            .borrow_mut()
            .on_hands_flat(labels.as_slice(), coords, now)
            .map_err(js_err)?;
        for ev in &events {
            if let GestureEvent::ModeChanged { to, .. } = ev {
                overlay::show_mode(&self.document, *to);
            }
        }
        Ok(())
    }

    /// One face frame: 468 packed `x, y, z` triples, or nothing when no face
    /// was found.
    pub fn on_face(&self, coords: Option<Vec<f32>>) -> Result<(), JsValue> {
        if !self.running.get() {
            return Ok(());
        }
        let now = self.clock.now_ms();
        self.scene
            .borrow_mut()
            .on_face_flat(coords.as_deref(), now)
            .map_err(js_err)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&self) {
        self.scene.borrow_mut().clear_all();
    }

    /// "DRAW" or "SNAP".
    pub fn mode(&self) -> String {
        self.scene.borrow().mode().as_str().to_string()
    }

    pub fn set_spark_color(&self, css: &str) -> Result<(), JsValue> {
        let color: Color = css.parse().map_err(js_err)?;
        self.scene.borrow_mut().update_config(|c| c.spark_color = color);
        Ok(())
    }

    pub fn set_spark_size(&self, size: f32) {
        self.scene
            .borrow_mut()
            .update_config(|c| c.spark_size = size.max(0.0));
    }

    pub fn set_spark_shape(&self, shape: &str) -> Result<(), JsValue> {
        let shape: SparkShape = shape.parse().map_err(js_err)?;
        self.scene.borrow_mut().update_config(|c| c.spark_shape = shape);
        Ok(())
    }

    pub fn set_line_color(&self, css: &str) -> Result<(), JsValue> {
        let color: Color = css.parse().map_err(js_err)?;
        self.scene.borrow_mut().update_config(|c| c.line_color = color);
        Ok(())
    }

    pub fn set_line_width(&self, width: f32) {
        self.scene
            .borrow_mut()
            .update_config(|c| c.line_width = width.max(0.0));
    }

    pub fn set_line_glow(&self, glow: f32) {
        self.scene
            .borrow_mut()
            .update_config(|c| c.line_glow = glow.clamp(0.0, 50.0));
    }

    pub fn set_glow_enabled(&self, on: bool) {
        self.scene.borrow_mut().update_config(|c| c.glow_enabled = on);
    }

    pub fn set_persistent_line(&self, on: bool) {
        self.scene.borrow_mut().set_persistent_line(on);
    }

    /// Halt the render loop. Later frames from the provider are ignored.
    pub fn stop(&self) {
        if self.running.replace(false) {
            log::info!("[frame] stop requested");
        }
    }
}

fn init(effects_id: &str, ink_id: &str) -> anyhow::Result<HandFx> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let effects_canvas = dom::canvas_by_id(&document, effects_id)?;
    let ink_canvas = dom::canvas_by_id(&document, ink_id)?;
    dom::wire_canvas_resize(vec![effects_canvas.clone(), ink_canvas.clone()]);

    let effects = CanvasSurface::new(effects_canvas)?;
    let ink = CanvasSurface::new(ink_canvas)?;

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let scene = Rc::new(RefCell::new(FxScene::new(FxConfig::default(), seed)));
    scene.borrow_mut().set_viewport(effects.viewport());
    log::info!(
        "[init] canvases {}x{}",
        effects.canvas().width(),
        effects.canvas().height()
    );

    {
        let scene = scene.clone();
        if dom::add_click_listener(&document, "clear-btn", move || {
            scene.borrow_mut().clear_all()
        }) {
            log::info!("[init] #clear-btn wired");
        }
    }
    overlay::show_mode(&document, scene.borrow().mode());

    let running = Rc::new(Cell::new(true));
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        scene: scene.clone(),
        effects,
        ink,
    }));
    frame::start_loop(frame_ctx, running.clone());

    Ok(HandFx {
        scene,
        clock: SessionClock::start(),
        running,
        document,
    })
}
