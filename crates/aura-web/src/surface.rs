//! Canvas surface lifecycle: context acquisition, DPR scaling, clearing.

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl Surface {
    /// Acquire a 2D context and size the backing store. Returns `None` when
    /// the context is unavailable (another context type already owns the
    /// canvas, headless environments); callers retry on the next resize.
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok()?,
            _ => {
                log::warn!("[surface] 2d context unavailable; deferring");
                return None;
            }
        };
        let mut surface = Self {
            canvas: canvas.clone(),
            ctx,
            width: 1.0,
            height: 1.0,
        };
        surface.resize();
        Some(surface)
    }

    /// Re-sync the backing store after a layout change. Also reapplies the
    /// DPR transform: resizing a canvas resets all context state.
    pub fn resize(&mut self) {
        let size = dom::sync_canvas_backing_size(&self.canvas);
        self.width = size.width;
        self.height = size.height;
        let _ = self
            .ctx
            .set_transform(size.dpr, 0.0, 0.0, size.dpr, 0.0, 0.0);
    }

    #[inline]
    pub fn ctx(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Clear the full logical area; the DPR transform maps it to the whole
    /// backing store.
    pub fn clear(&self) {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
    }
}
