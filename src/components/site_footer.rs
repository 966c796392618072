use leptos::prelude::*;

use crate::content::SOCIAL_LINKS;
use crate::context::use_site_config;
use crate::route::Page;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let config = use_site_config();
    let pages = [
        ("Home", Page::Home),
        ("Menu", Page::Menu),
        ("About", Page::About),
        ("Contact", Page::Contact),
    ];

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{config.brand.clone()}</h3>
                    <p>{config.tagline.clone()}</p>
                </div>
                <div class="footer-links">
                    <h4>"Quick Links"</h4>
                    {pages
                        .into_iter()
                        .map(|(label, page)| view! { <a href=page.href()>{label}</a> })
                        .collect_view()}
                </div>
                <div class="footer-contact">
                    <h4>"Contact"</h4>
                    {config.address.iter().map(|line| view! { <p>{line.clone()}</p> }).collect_view()}
                    <p>{config.phone.clone()}</p>
                    <p>{config.email.clone()}</p>
                </div>
                <div class="footer-hours">
                    <h4>"Hours"</h4>
                    {config.opening_hours.iter().map(|line| view! { <p>{line.clone()}</p> }).collect_view()}
                </div>
            </div>
            <div class="footer-bottom">
                <div class="social-links">
                    {SOCIAL_LINKS.iter().map(|name| view! { <a href="#" class="social-link">{*name}</a> }).collect_view()}
                </div>
                <p>{format!("© 2024 {}. All rights reserved.", config.brand)}</p>
            </div>
        </footer>
    }
}
