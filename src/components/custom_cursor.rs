//! Custom Cursor Component
//!
//! Ring plus a small trailing dot following the global pointer signals.

use leptos::prelude::*;
use leptos_motion::centered_at;

use crate::context::use_app_context;

const RING_HALF: f64 = 12.0;
const TRAIL_HALF: f64 = 6.0;

#[component]
pub fn CustomCursor() -> impl IntoView {
    let pointer = use_app_context().pointer;

    let ring_style = move || {
        let pos = pointer.position_read.get();
        let (left, top) = centered_at(pos.x, pos.y, RING_HALF);
        format!(
            "left: {}; top: {}; transform: scale({});",
            left,
            top,
            pointer.cursor_state().scale()
        )
    };
    let trail_style = move || {
        let pos = pointer.position_read.get();
        let (left, top) = centered_at(pos.x, pos.y, TRAIL_HALF);
        format!("left: {}; top: {};", left, top)
    };

    view! {
        <div class="cursor-ring" style=ring_style></div>
        <div class="cursor-trail" style=trail_style></div>
    }
}
