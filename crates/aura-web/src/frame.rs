//! Frame loop plumbing and the per-engine frame contexts.

use aura_core::{Palette, ParticleField, PointerState, RayField};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;
use crate::surface::Surface;

/// One requestAnimationFrame loop with owned cancellation.
///
/// At most one frame request is pending at any time. `stop` cancels the
/// pending request and drops the tick closure, after which the loop can never
/// fire again; calling it repeatedly is fine.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(mut frame_fn: impl FnMut() + 'static) -> Self {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_for_tick = raf_id.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // The request that invoked us is spent.
            raf_for_tick.set(None);
            frame_fn();
            let next = tick_clone.borrow();
            if let (Some(w), Some(cb)) = (web::window(), next.as_ref()) {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_for_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            if let Some(cb) = tick.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_id.set(Some(id));
                }
            }
        }
        Self { raf_id, tick }
    }

    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // Dropping the closure also breaks the tick's self-reference cycle.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Everything one particle-field mount touches per tick.
pub struct FieldFrame {
    pub surface: Rc<RefCell<Option<Surface>>>,
    pub field: Rc<RefCell<ParticleField>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub palette: Rc<Cell<Palette>>,
}

impl FieldFrame {
    pub fn frame(&self) {
        let surface = self.surface.borrow();
        let Some(surface) = surface.as_ref() else {
            return;
        };
        let mut field = self.field.borrow_mut();
        let pointer = self
            .pointer
            .borrow()
            .surface_position(field.width(), field.height());
        field.step(pointer);
        render::draw_field(surface, &field, &self.palette.get());
    }
}

/// Everything one ray-field mount touches per tick.
pub struct RayFrame {
    pub surface: Rc<RefCell<Option<Surface>>>,
    pub rays: Rc<RefCell<RayField>>,
    pub palette: Rc<Cell<Palette>>,
}

impl RayFrame {
    pub fn frame(&self) {
        let surface = self.surface.borrow();
        let Some(surface) = surface.as_ref() else {
            return;
        };
        let mut rays = self.rays.borrow_mut();
        rays.step();
        render::draw_rays(surface, &rays, &self.palette.get());
    }
}
