#![cfg(target_arch = "wasm32")]

mod constants;
mod dom;
mod events;
mod frame;
mod listeners;
mod render;
mod surface;

use aura_core::{
    FieldConfig, MagnetParams, Palette, ParticleField, PointerState, RayConfig, RayField,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

use crate::frame::{FieldFrame, FrameLoop, RayFrame};
use crate::listeners::ListenerHandle;
use crate::surface::Surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aura-web ready");
    Ok(())
}

fn js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

// Two 32-bit draws from Math.random make a full 64-bit seed, so layouts
// differ between page loads without any persistence.
fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (hi << 32) | lo
}

/// Whether this environment should default to reduced motion: either the
/// user asked for it or the viewport is phone-sized.
#[wasm_bindgen]
pub fn reduced_motion_default() -> bool {
    let Some(window) = web::window() else {
        return true;
    };
    let prefers = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    let narrow = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|w| w < constants::MOBILE_BREAKPOINT_PX)
        .unwrap_or(false);
    prefers || narrow
}

fn acquired_size(
    surface: &Rc<RefCell<Option<Surface>>>,
    canvas: &web::HtmlCanvasElement,
) -> (f32, f32) {
    match surface.borrow().as_ref() {
        Some(s) => (s.width(), s.height()),
        None => {
            let size = dom::sync_canvas_backing_size(canvas);
            (size.width, size.height)
        }
    }
}

/// Mount the drifting particle field onto the canvas with the given id.
/// Starts its frame loop immediately; drop the handle (or call `stop`) to
/// tear everything down again.
#[wasm_bindgen]
pub fn mount_particle_field(canvas_id: &str, reduced: bool) -> Result<ParticleFieldHandle, JsValue> {
    mount_particle_field_inner(canvas_id, reduced).map_err(js_err)
}

fn mount_particle_field_inner(
    canvas_id: &str,
    reduced: bool,
) -> anyhow::Result<ParticleFieldHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    let surface = Rc::new(RefCell::new(Surface::acquire(&canvas)));
    let (width, height) = acquired_size(&surface, &canvas);
    let field = Rc::new(RefCell::new(ParticleField::seed(
        &FieldConfig {
            width,
            height,
            reduced,
        },
        random_seed(),
    )?));
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let palette = Rc::new(Cell::new(Palette::default()));

    let mut listeners = Vec::new();
    events::wire_field_pointer(&canvas, pointer.clone(), &mut listeners);
    {
        let surface_rs = surface.clone();
        let field_rs = field.clone();
        let canvas_rs = canvas.clone();
        events::wire_resize(
            move || {
                let mut slot = surface_rs.borrow_mut();
                match slot.as_mut() {
                    Some(s) => s.resize(),
                    None => *slot = Surface::acquire(&canvas_rs),
                }
                let Some(s) = slot.as_ref() else {
                    return;
                };
                // New size, new layout: particles do not survive a resize.
                let reduced_now = !field_rs.borrow().interactive();
                let config = FieldConfig {
                    width: s.width(),
                    height: s.height(),
                    reduced: reduced_now,
                };
                match ParticleField::seed(&config, random_seed()) {
                    Ok(next) => *field_rs.borrow_mut() = next,
                    Err(e) => log::warn!("[field] reseed failed: {e}"),
                }
            },
            &mut listeners,
        );
    }

    let frame_ctx = FieldFrame {
        surface,
        field: field.clone(),
        pointer,
        palette: palette.clone(),
    };
    let runner = FrameLoop::start(move || frame_ctx.frame());
    log::info!("[field] mounted on #{canvas_id} ({width}x{height}, reduced: {reduced})");
    Ok(ParticleFieldHandle {
        field,
        palette,
        runner: Some(runner),
        listeners,
    })
}

#[wasm_bindgen]
pub struct ParticleFieldHandle {
    field: Rc<RefCell<ParticleField>>,
    palette: Rc<Cell<Palette>>,
    runner: Option<FrameLoop>,
    listeners: Vec<ListenerHandle>,
}

#[wasm_bindgen]
impl ParticleFieldHandle {
    /// Gate pointer response without tearing the field down. The population
    /// only changes on the next resize-driven reseed.
    pub fn set_reduced_motion(&self, reduced: bool) {
        self.field.borrow_mut().set_interactive(!reduced);
    }

    pub fn set_dark(&self, dark: bool) {
        self.palette.set(Palette::for_dark(dark));
    }

    /// Cancel the frame loop and remove every listener. Idempotent.
    pub fn stop(&mut self) {
        if let Some(runner) = self.runner.take() {
            runner.stop();
        }
        self.listeners.clear();
    }
}

impl Drop for ParticleFieldHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Mount the labeled ray burst onto the canvas with the given id.
#[wasm_bindgen]
pub fn mount_ray_field(canvas_id: &str, reduced: bool) -> Result<RayFieldHandle, JsValue> {
    mount_ray_field_inner(canvas_id, reduced).map_err(js_err)
}

fn mount_ray_field_inner(canvas_id: &str, reduced: bool) -> anyhow::Result<RayFieldHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    let surface = Rc::new(RefCell::new(Surface::acquire(&canvas)));
    let mut initial = RayField::new(&RayConfig::default(), random_seed())?;
    initial.set_interactive(!reduced);
    let rays = Rc::new(RefCell::new(initial));
    let palette = Rc::new(Cell::new(Palette::default()));

    let mut listeners = Vec::new();
    events::wire_ray_pointer(&canvas, rays.clone(), &mut listeners);
    {
        let surface_rs = surface.clone();
        let rays_rs = rays.clone();
        let canvas_rs = canvas.clone();
        events::wire_resize(
            move || {
                let mut slot = surface_rs.borrow_mut();
                match slot.as_mut() {
                    Some(s) => s.resize(),
                    None => *slot = Surface::acquire(&canvas_rs),
                }
                if slot.is_none() {
                    return;
                }
                let interactive = rays_rs.borrow().interactive();
                match RayField::new(&RayConfig::default(), random_seed()) {
                    Ok(mut next) => {
                        next.set_interactive(interactive);
                        *rays_rs.borrow_mut() = next;
                    }
                    Err(e) => log::warn!("[rays] reseed failed: {e}"),
                }
            },
            &mut listeners,
        );
    }

    let frame_ctx = RayFrame {
        surface,
        rays: rays.clone(),
        palette: palette.clone(),
    };
    let runner = FrameLoop::start(move || frame_ctx.frame());
    log::info!("[rays] mounted on #{canvas_id} (reduced: {reduced})");
    Ok(RayFieldHandle {
        rays,
        palette,
        runner: Some(runner),
        listeners,
    })
}

#[wasm_bindgen]
pub struct RayFieldHandle {
    rays: Rc<RefCell<RayField>>,
    palette: Rc<Cell<Palette>>,
    runner: Option<FrameLoop>,
    listeners: Vec<ListenerHandle>,
}

#[wasm_bindgen]
impl RayFieldHandle {
    /// Disable the pointer-to-target mapping; the loop keeps running so any
    /// current deflection relaxes back to rest.
    pub fn set_reduced_motion(&self, reduced: bool) {
        self.rays.borrow_mut().set_interactive(!reduced);
    }

    pub fn set_dark(&self, dark: bool) {
        self.palette.set(Palette::for_dark(dark));
    }

    /// Cancel the frame loop and remove every listener. Idempotent.
    pub fn stop(&mut self) {
        if let Some(runner) = self.runner.take() {
            runner.stop();
        }
        self.listeners.clear();
    }
}

impl Drop for RayFieldHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Make the element with the given id lean toward the pointer. Omitted
/// strength and radius fall back to the shared defaults.
#[wasm_bindgen]
pub fn attach_magnetic(
    element_id: &str,
    strength: Option<f32>,
    radius: Option<f32>,
) -> Result<MagneticHandle, JsValue> {
    attach_magnetic_inner(element_id, strength, radius).map_err(js_err)
}

fn attach_magnetic_inner(
    element_id: &str,
    strength: Option<f32>,
    radius: Option<f32>,
) -> anyhow::Result<MagneticHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let element = dom::element_by_id(&document, element_id)?;
    let defaults = MagnetParams::default();
    let params = MagnetParams {
        strength: strength.unwrap_or(defaults.strength),
        radius: radius.unwrap_or(defaults.radius),
    };

    let mut listeners = Vec::new();
    events::wire_magnetic(&document, element.clone(), params, &mut listeners);
    log::info!("[magnet] attached to #{element_id}");
    Ok(MagneticHandle { element, listeners })
}

#[wasm_bindgen]
pub struct MagneticHandle {
    element: web::HtmlElement,
    listeners: Vec<ListenerHandle>,
}

#[wasm_bindgen]
impl MagneticHandle {
    /// Remove the listeners and clear any translation left on the element.
    /// Idempotent.
    pub fn stop(&mut self) {
        self.listeners.clear();
        events::apply_translation(&self.element, glam::Vec2::ZERO);
    }
}

impl Drop for MagneticHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
