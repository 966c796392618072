//! Hipsters Café Frontend App
//!
//! Root component: shared context, global pointer tracking, the login
//! modal and hash-routed page switching.

use leptos::prelude::*;
use leptos_motion::{bind_global_pointer, create_pointer_signals};

use crate::components::{CustomCursor, LoginModal};
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::forms::AuthMode;
use crate::pages::{AboutPage, ContactPage, HomePage, MenuPage};
use crate::route::{use_current_page, Page};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let pointer = create_pointer_signals();
    bind_global_pointer(pointer);

    let login_open = signal(false);
    let login_mode = signal(AuthMode::default());

    // Provide context to all children
    provide_context(AppContext::new(pointer, login_open, login_mode));
    provide_context(config.clone());

    let page = use_current_page();
    let custom_cursor = config.custom_cursor;

    // Title and scroll position follow the page
    let brand = config.brand.clone();
    Effect::new(move |_| {
        let current = page.get();
        log::info!("[APP] Page -> {:?}", current);
        document().set_title(&current.title(&brand));
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    view! {
        <div class="app-root" class:custom-cursor=custom_cursor>
            {move || match page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Menu => view! { <MenuPage /> }.into_any(),
                Page::About => view! { <AboutPage /> }.into_any(),
                Page::Contact => view! { <ContactPage /> }.into_any(),
            }}
            <LoginModal />
            <Show when=move || custom_cursor>
                <CustomCursor />
            </Show>
        </div>
    }
}
