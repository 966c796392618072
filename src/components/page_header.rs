use leptos::prelude::*;

use super::RevealText;
use crate::context::use_site_config;
use crate::route::Page;

/// Header for the inner pages: back link, brand, title block and an
/// optional right-hand slot
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let config = use_site_config();

    view! {
        <header class="page-header">
            <div class="page-header-bar">
                <a href=Page::Home.href() class="back-link">"← Back to Home"</a>
                <span class="brand-name">{config.brand}</span>
                <div class="page-header-slot">{children.map(|c| c())}</div>
            </div>
            <div class="page-header-title">
                <RevealText text=title class="page-title" />
                <p class="page-subtitle">{subtitle}</p>
            </div>
        </header>
    }
}
