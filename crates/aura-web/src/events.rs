//! Event wiring for the mounted engines.
//!
//! Every listener goes through [`ListenerHandle`] so the mount owns its
//! registrations and teardown removes them all.

use aura_core::{magnet, normalize_in_rect, MagnetParams, PointerState, RayField};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::listeners::ListenerHandle;

#[inline]
fn client_position(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Track the pointer over a canvas into shared [`PointerState`].
pub fn wire_field_pointer(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
    out: &mut Vec<ListenerHandle>,
) {
    let target: web::EventTarget = canvas.clone().into();

    let canvas_move = canvas.clone();
    let pointer_move = pointer.clone();
    out.push(ListenerHandle::pointer(
        &target,
        "pointermove",
        move |ev: web::PointerEvent| {
            let rect = canvas_move.get_bounding_client_rect();
            let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            pointer_move
                .borrow_mut()
                .set_from_client(client_position(&ev), origin, size);
        },
    ));

    out.push(ListenerHandle::pointer(
        &target,
        "pointerleave",
        move |_ev: web::PointerEvent| {
            pointer.borrow_mut().clear();
        },
    ));
}

/// Feed pointer motion over a canvas straight into ray steering targets.
pub fn wire_ray_pointer(
    canvas: &web::HtmlCanvasElement,
    rays: Rc<RefCell<RayField>>,
    out: &mut Vec<ListenerHandle>,
) {
    let target: web::EventTarget = canvas.clone().into();

    let canvas_move = canvas.clone();
    let rays_move = rays.clone();
    out.push(ListenerHandle::pointer(
        &target,
        "pointermove",
        move |ev: web::PointerEvent| {
            let rect = canvas_move.get_bounding_client_rect();
            let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            let normalized = normalize_in_rect(client_position(&ev), origin, size);
            rays_move.borrow_mut().set_pointer(normalized);
        },
    ));

    out.push(ListenerHandle::pointer(
        &target,
        "pointerleave",
        move |_ev: web::PointerEvent| {
            rays.borrow_mut().clear_pointer();
        },
    ));
}

/// Run a callback on window resize.
pub fn wire_resize(handler: impl FnMut() + 'static, out: &mut Vec<ListenerHandle>) {
    if let Some(window) = web::window() {
        let target: web::EventTarget = window.into();
        out.push(ListenerHandle::simple(&target, "resize", handler));
    }
}

/// Magnetic hover: document-wide pointer moves displace the element, leaving
/// the element snaps it back. No frame loop; the response is direct.
pub fn wire_magnetic(
    document: &web::Document,
    element: web::HtmlElement,
    params: MagnetParams,
    out: &mut Vec<ListenerHandle>,
) {
    let doc_target: web::EventTarget = document.clone().into();
    let el_move = element.clone();
    out.push(ListenerHandle::pointer(
        &doc_target,
        "pointermove",
        move |ev: web::PointerEvent| {
            // The rect includes the current translate; with strength below 1
            // the feedback stays contractive, so the element settles.
            let rect = el_move.get_bounding_client_rect();
            let center = Vec2::new(
                (rect.left() + rect.width() * 0.5) as f32,
                (rect.top() + rect.height() * 0.5) as f32,
            );
            let d = magnet::displacement(center, client_position(&ev), params);
            apply_translation(&el_move, d);
        },
    ));

    let el_target: web::EventTarget = element.clone().into();
    out.push(ListenerHandle::pointer(
        &el_target,
        "pointerleave",
        move |_ev: web::PointerEvent| {
            apply_translation(&element, Vec2::ZERO);
        },
    ));
}

pub fn apply_translation(el: &web::HtmlElement, d: Vec2) {
    let style = el.style();
    if d == Vec2::ZERO {
        let _ = style.remove_property("transform");
    } else {
        let _ = style.set_property(
            "transform",
            &format!("translate({:.2}px, {:.2}px)", d.x, d.y),
        );
    }
}
