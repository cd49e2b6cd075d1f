use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{id} is not a canvas: {:?}", e)))
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{id} is not an html element: {:?}", e)))
}

/// Logical (CSS pixel) size of a canvas after its backing store was synced.
#[derive(Clone, Copy, Debug)]
pub struct LogicalSize {
    pub width: f32,
    pub height: f32,
    pub dpr: f64,
}

/// Match the canvas backing store to its CSS size times devicePixelRatio so
/// strokes stay crisp on high-density displays. Returns the logical size the
/// simulations should run in, clamped to at least 1x1 so a hidden canvas
/// still yields a usable (if trivial) surface until the next resize.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> LogicalSize {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    LogicalSize {
        width: rect.width().max(1.0) as f32,
        height: rect.height().max(1.0) as f32,
        dpr,
    }
}
