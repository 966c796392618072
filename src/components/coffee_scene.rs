//! Coffee Scene Component
//!
//! CSS-transform rendition of the hero scene: a swaying cup, bobbing beans
//! and rising steam, stepped by a ~60fps interval.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::scene::{cup_sway, project, steam_opacity, Bean, SteamField, BEANS, STEAM_PARTICLES};

const FRAME_MS: u32 = 16;
const PX_PER_UNIT: f64 = 60.0;

#[component]
pub fn CoffeeScene() -> impl IntoView {
    let (time, set_time) = signal(0.0_f64);
    let steam = RwSignal::new(SteamField::new(STEAM_PARTICLES, js_sys::Math::random));

    let interval = Interval::new(FRAME_MS, move || {
        set_time.update(|t| *t += f64::from(FRAME_MS) / 1000.0);
        steam.update(|field| field.step());
    });
    // Dropping the interval cancels it
    let interval = StoredValue::new_local(Some(interval));
    on_cleanup(move || interval.set_value(None));

    let cup_style = move || {
        let (rotation, lift) = cup_sway(time.get());
        format!(
            "transform: translateY({:.1}px) rotateY({:.3}rad);",
            -lift * PX_PER_UNIT,
            rotation
        )
    };

    let bean_view = move |bean: Bean| {
        let style = move || {
            let t = time.get();
            let (x, y, depth) = project(bean.x, bean.bob_y(t), bean.z, PX_PER_UNIT);
            format!(
                "transform: translate({:.1}px, {:.1}px) scale({:.3}) rotateX({:.3}rad) rotateY({:.3}rad); z-index: {};",
                x,
                y,
                bean.scale * depth,
                Bean::tilt(t),
                Bean::spin(t),
                (depth * 10.0) as i32
            )
        };
        view! { <div class="scene-bean" style=style></div> }
    };

    let particle_view = move |index: usize| {
        let style = move || {
            steam.with(|field| {
                let p = field.particles()[index];
                let (x, y, depth) = project(p.x, p.y, p.z, PX_PER_UNIT);
                format!(
                    "transform: translate({:.1}px, {:.1}px) scale({:.3}); opacity: {:.3};",
                    x,
                    y - PX_PER_UNIT,
                    depth,
                    steam_opacity(p.y)
                )
            })
        };
        view! { <span class="steam-particle" style=style></span> }
    };

    view! {
        <div class="coffee-scene" aria-hidden="true">
            <div class="scene-origin">
                <div class="scene-cup" style=cup_style>
                    <div class="cup-body"></div>
                    <div class="cup-coffee"></div>
                    <div class="cup-handle"></div>
                    <div class="cup-saucer"></div>
                </div>
                <div class="scene-steam">
                    {(0..STEAM_PARTICLES).map(particle_view).collect_view()}
                </div>
                {BEANS.into_iter().map(bean_view).collect_view()}
            </div>
        </div>
    }
}
