//! Owned event listener registrations.
//!
//! Everything wired through [`ListenerHandle`] is removed again when the
//! handle drops, so unmounting an engine leaves no callbacks behind on the
//! window or document.

use std::any::Any;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    function: js_sys::Function,
    // Keeps the closure memory alive for as long as the listener is attached.
    _closure: Box<dyn Any>,
}

impl ListenerHandle {
    /// Attach a pointer-event callback to a target.
    pub fn pointer(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        Self::attach(target, event, closure)
    }

    /// Attach a callback that ignores its event object ("resize" and friends).
    pub fn simple(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        Self::attach(target, event, closure)
    }

    fn attach<T: ?Sized + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<T>,
    ) -> Self {
        let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        if let Err(e) = target.add_event_listener_with_callback(event, &function) {
            log::warn!("[listeners] failed to attach {event}: {:?}", e);
        }
        Self {
            target: target.clone(),
            event,
            function,
            _closure: Box::new(closure),
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.function);
    }
}
