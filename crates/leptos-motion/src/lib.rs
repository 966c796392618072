//! Leptos Motion Utilities
//!
//! Pointer tracking, scroll tracking and reveal-on-scroll for Leptos.
//! Global listeners are bound once with `Closure` + `forget`; page-local
//! listeners go through `window_event_listener` and are removed on cleanup.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub mod style;

pub use style::*;

/// Elements that make the custom cursor grow
const INTERACTIVE_SELECTOR: &str = "button, a, [role='button'], input, textarea, select";

/// Reveal triggers a little after the element crosses the viewport edge
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

/// Pointer position in client (viewport) pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Pointer state signals
#[derive(Clone, Copy)]
pub struct PointerSignals {
    pub position_read: ReadSignal<PointerPosition>,
    pub position_write: WriteSignal<PointerPosition>,
    /// Primary button held down
    pub pressed_read: ReadSignal<bool>,
    pub pressed_write: WriteSignal<bool>,
    /// Pointer is over a button, link or form control
    pub hovering_read: ReadSignal<bool>,
    pub hovering_write: WriteSignal<bool>,
}

impl PointerSignals {
    pub fn cursor_state(&self) -> CursorState {
        CursorState {
            pressed: self.pressed_read.get(),
            hovering: self.hovering_read.get(),
        }
    }
}

pub fn create_pointer_signals() -> PointerSignals {
    let (position_read, position_write) = signal(PointerPosition::default());
    let (pressed_read, pressed_write) = signal(false);
    let (hovering_read, hovering_write) = signal(false);
    PointerSignals {
        position_read,
        position_write,
        pressed_read,
        pressed_write,
        hovering_read,
        hovering_write,
    }
}

/// Bind document-level mousemove/mousedown/mouseup/mouseover handlers.
///
/// Meant to be called once for the lifetime of the app.
pub fn bind_global_pointer(pointer: PointerSignals) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        log::warn!("[MOTION] No document, pointer tracking disabled");
        return;
    };

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        pointer.position_write.set(PointerPosition {
            x: f64::from(ev.client_x()),
            y: f64::from(ev.client_y()),
        });
    });
    let on_mousedown = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        pointer.pressed_write.set(true);
    });
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        pointer.pressed_write.set(false);
    });
    // Delegated hover detection so elements mounted later are covered too
    let on_mouseover = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let over_interactive = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
            .is_some();
        if pointer.hovering_read.get_untracked() != over_interactive {
            pointer.hovering_write.set(over_interactive);
        }
    });

    let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("mouseover", on_mouseover.as_ref().unchecked_ref());
    on_mousemove.forget();
    on_mousedown.forget();
    on_mouseup.forget();
    on_mouseover.forget();
}

/// Viewport size in CSS pixels, (0, 0) when unavailable
pub fn viewport_size() -> (f64, f64) {
    let win = window();
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Pointer normalized to [-1, 1] on both axes relative to the viewport
pub fn use_normalized_pointer(pointer: PointerSignals) -> Memo<(f64, f64)> {
    Memo::new(move |_| {
        let pos = pointer.position_read.get();
        let (width, height) = viewport_size();
        normalize_pointer(pos.x, pos.y, width, height)
    })
}

fn current_scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Window scroll offset, tracked until the owner is cleaned up
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(current_scroll_y());
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        set_scroll_y.set(current_scroll_y());
    });
    on_cleanup(move || handle.remove());
    scroll_y
}

/// Call `on_enter` once, the first time `element` intersects the viewport
pub fn observe_in_view(element: &web_sys::Element, root_margin: &str, on_enter: impl Fn() + 'static) {
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let entered = entries
                .iter()
                .map(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>())
                .any(|entry| entry.is_intersecting());
            if entered {
                observer.disconnect();
                on_enter();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer.observe(element),
        Err(err) => log::warn!("[MOTION] IntersectionObserver unavailable: {:?}", err),
    }
    callback.forget();
}

/// Becomes `true` once the referenced element has scrolled into view
pub fn use_in_view(node_ref: NodeRef<leptos::html::Div>) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);
    Effect::new(move |_| {
        if in_view.get_untracked() {
            return;
        }
        if let Some(el) = node_ref.get() {
            let el: web_sys::Element = el.unchecked_into();
            observe_in_view(&el, REVEAL_ROOT_MARGIN, move || set_in_view.set(true));
        }
    });
    in_view
}

/// Relative pointer position inside the referenced element
pub fn local_pointer(ev: &web_sys::MouseEvent, element: &web_sys::Element) -> PointerPosition {
    let rect = element.get_bounding_client_rect();
    PointerPosition {
        x: f64::from(ev.client_x()) - rect.left(),
        y: f64::from(ev.client_y()) - rect.top(),
    }
}
