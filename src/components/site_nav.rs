//! Site Navigation Component
//!
//! Fixed home page navbar: section links with the active one highlighted,
//! icon buttons, and a collapsible mobile menu.

use leptos::prelude::*;

use crate::context::{use_app_context, use_site_config};
use crate::forms::AuthMode;
use crate::nav::SECTIONS;
use crate::route::Page;

#[component]
pub fn SiteNav(#[prop(into)] active_section: Signal<String>) -> impl IntoView {
    let ctx = use_app_context();
    let config = use_site_config();
    let (mobile_open, set_mobile_open) = signal(false);

    let section_links = move |mobile: bool| {
        SECTIONS
            .iter()
            .map(|(id, label)| {
                let id = *id;
                view! {
                    <a
                        href=format!("#{}", id)
                        class=if mobile { "mobile-link" } else { "nav-link" }
                        class:active=move || { active_section.get() == id }
                        on:click=move |_| set_mobile_open.set(false)
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="site-nav">
            <a href=Page::Home.href() class="nav-brand">
                <span class="brand-mark">"☕"</span>
                <span class="brand-name">{config.brand.clone()}</span>
            </a>

            <div class="nav-links">{section_links(false)}</div>

            <div class="nav-actions">
                <a href=Page::Menu.href() class="icon-btn" title="Menu">"🔍"</a>
                <button class="icon-btn" title="Account" on:click=move |_| ctx.open_login(AuthMode::SignIn)>
                    "👤"
                </button>
                <a href=Page::Menu.href() class="icon-btn" title="Cart">"🛒"</a>
                <button
                    class="icon-btn mobile-toggle"
                    title="Toggle menu"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="mobile-menu">{section_links(true)}</div>
            </Show>
        </nav>
    }
}
