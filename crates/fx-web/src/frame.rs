use crate::canvas::CanvasSurface;
use fx_core::FxScene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub scene: Rc<RefCell<FxScene>>,
    pub effects: CanvasSurface,
    pub ink: CanvasSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut scene = self.scene.borrow_mut();
        // Mirroring reads the live canvas size.
        let viewport = self.effects.viewport();
        if viewport != scene.viewport() {
            log::debug!(
                "[frame] viewport {}x{}",
                viewport.width,
                viewport.height
            );
            scene.set_viewport(viewport);
        }
        scene.tick(&mut self.effects, &mut self.ink);
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `running` goes false.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: TickHandle = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &TickHandle) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
