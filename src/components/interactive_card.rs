//! Interactive Card Component
//!
//! Card with a glow that follows the pointer while hovered.

use leptos::prelude::*;
use leptos_motion::{glow_background, glow_shadow, local_pointer, PointerPosition};

pub const DEFAULT_GLOW: &str = "#f59e0b";

#[component]
pub fn InteractiveCard(
    #[prop(into, optional)] class: String,
    #[prop(into, default = DEFAULT_GLOW.to_string())] glow_color: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let (pointer, set_pointer) = signal(PointerPosition::default());
    let (hovered, set_hovered) = signal(false);

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        if let Some(el) = node_ref.get_untracked() {
            set_pointer.set(local_pointer(&ev, &el));
        }
    };

    let glow_color = StoredValue::new(glow_color);
    let glow_style = move || {
        let pos = pointer.get();
        format!(
            "opacity: {}; background: {};",
            if hovered.get() { 0.1 } else { 0.0 },
            glow_color.with_value(|color| glow_background(pos.x, pos.y, color))
        )
    };
    let border_style = move || {
        format!("box-shadow: {};", glow_color.with_value(|color| glow_shadow(color, hovered.get())))
    };

    view! {
        <div
            node_ref=node_ref
            class=format!("interactive-card {}", class)
            on:mousemove=on_mousemove
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="card-surface">
                {children()}
                <div class="card-glow" style=glow_style></div>
                <div class="card-border-glow" style=border_style></div>
            </div>
        </div>
    }
}
