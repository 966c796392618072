//! Motion Wrappers
//!
//! Entrance, stagger, floating and parallax wrappers. Pure decoration:
//! they only read pointer/scroll/visibility signals of their own.

use leptos::prelude::*;
use leptos_motion::{
    floating_style, parallax_offset, reveal_style, scroll_progress, stagger_delay, use_in_view,
    use_scroll_y, viewport_size, word_delays, Reveal,
};

/// Reveals its children once they scroll into view
#[component]
pub fn RevealOnScroll(
    reveal: Reveal,
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let in_view = use_in_view(node_ref);

    view! {
        <div
            node_ref=node_ref
            class=class
            style=move || reveal_style(reveal, in_view.get(), delay)
        >
            {children()}
        </div>
    }
}

#[component]
pub fn FadeInUp(
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <RevealOnScroll reveal=Reveal::FadeUp delay=delay class=class>{children()}</RevealOnScroll> }
}

#[component]
pub fn SlideInLeft(
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <RevealOnScroll reveal=Reveal::SlideLeft delay=delay class=class>{children()}</RevealOnScroll> }
}

#[component]
pub fn SlideInRight(
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <RevealOnScroll reveal=Reveal::SlideRight delay=delay class=class>{children()}</RevealOnScroll> }
}

#[component]
pub fn ScaleIn(
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <RevealOnScroll reveal=Reveal::Scale delay=delay class=class>{children()}</RevealOnScroll> }
}

/// Hands out increasing indexes to the stagger items mounted inside it
#[derive(Clone, Copy)]
struct StaggerGroup {
    step: f64,
    next: StoredValue<usize>,
}

impl StaggerGroup {
    fn next_delay(&self) -> f64 {
        let index = self.next.get_value();
        self.next.set_value(index + 1);
        stagger_delay(index, self.step)
    }
}

/// Children rise in one after another, `stagger_step` seconds apart
#[component]
pub fn StaggerContainer(
    #[prop(default = 0.1)] stagger_step: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    provide_context(StaggerGroup {
        step: stagger_step,
        next: StoredValue::new(0),
    });
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn StaggerItem(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let delay = use_context::<StaggerGroup>()
        .map(|group| group.next_delay())
        .unwrap_or_default();
    let (visible, set_visible) = signal(false);
    // Start hidden for one frame so the transition runs
    request_animation_frame(move || set_visible.set(true));

    view! {
        <div class=class style=move || reveal_style(Reveal::Rise, visible.get(), delay)>
            {children()}
        </div>
    }
}

/// Endless gentle bob: `intensity` px amplitude, `speed` seconds per loop
#[component]
pub fn FloatingElement(
    #[prop(default = 20.0)] intensity: f64,
    #[prop(default = 2.0)] speed: f64,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="floating" style=floating_style(intensity, speed)>
            {children()}
        </div>
    }
}

/// Shifts down by up to `speed * 100` px while scrolling past
#[component]
pub fn ParallaxText(#[prop(default = 0.5)] speed: f64, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let scroll_y = use_scroll_y();

    let offset = move || {
        let _ = scroll_y.get();
        let Some(el) = node_ref.get() else {
            return 0.0;
        };
        let rect = el.get_bounding_client_rect();
        let (_, viewport_height) = viewport_size();
        parallax_offset(scroll_progress(rect.top(), rect.height(), viewport_height), speed)
    };

    view! {
        <div node_ref=node_ref style=move || format!("transform: translateY({:.1}px);", offset())>
            {children()}
        </div>
    }
}

#[component]
pub fn MagneticButton(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("magnetic {}", class)>{children()}</div> }
}

/// Word-by-word entrance
#[component]
pub fn RevealText(#[prop(into)] text: String, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <div class=class>
            {word_delays(&text, 0.1)
                .into_iter()
                .map(|(word, delay)| view! {
                    <span class="reveal-word" style=format!("animation-delay: {}s;", delay)>
                        {word}
                    </span>
                })
                .collect_view()}
        </div>
    }
}
