//! Menu Page
//!
//! Catalog browser with category/search filtering and a page-local cart.
//! The store is created on mount, so leaving the page discards both.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{
    ButtonSize, ButtonVariant, CartButton, CategoryBar, FadeInUp, FloatingElement, MenuCard,
    MenuSearch, MorphingButton, PageHeader, SiteFooter, StaggerContainer, StaggerItem,
};
use crate::menu_state::{derive_visible_items, MenuStateStoreFields};
use crate::store::{provide_menu_store, store_clear_filter};

#[component]
pub fn MenuPage() -> impl IntoView {
    let catalog = catalog::builtin();
    if catalog.is_empty() {
        log::warn!("[MENU] Catalog is empty, nothing to show");
    }
    let store = provide_menu_store();

    // Recomputes only when the filter changes; cart updates do not touch it
    let visible = Memo::new(move |_| derive_visible_items(catalog.items(), &store.filter().read()));
    let filtered = Memo::new(move |_| !store.filter().read().is_default());

    view! {
        <div class="menu-page">
            <PageHeader title="Our Menu" subtitle="Crafted with passion, served with love">
                <CartButton catalog=catalog />
            </PageHeader>

            <section class="menu-controls">
                <FadeInUp>
                    <MenuSearch />
                </FadeInUp>
                <FadeInUp delay=0.2>
                    <CategoryBar catalog=catalog />
                </FadeInUp>
            </section>

            <section class="menu-grid-section">
                <Show
                    when=move || { !visible.with(Vec::is_empty) }
                    fallback=move || view! {
                        <div class="menu-empty">
                            <FloatingElement intensity=10.0 speed=3.0>
                                <span class="menu-empty-icon">"☕"</span>
                            </FloatingElement>
                            <h3>"No items found"</h3>
                            <p>"Try adjusting your search or filter criteria"</p>
                            <Show when=move || filtered.get()>
                                <div class="menu-empty-actions">
                                    <MorphingButton
                                        variant=ButtonVariant::Ghost
                                        size=ButtonSize::Small
                                        on_click=Callback::new(move |_| store_clear_filter(&store))
                                    >
                                        "Clear filters"
                                    </MorphingButton>
                                </div>
                            </Show>
                        </div>
                    }
                >
                    // A new result set re-renders and staggers in again
                    {move || {
                        let items = visible.get();
                        view! {
                            <StaggerContainer class="menu-grid" stagger_step=0.05>
                                {items
                                    .into_iter()
                                    .map(|item| view! {
                                        <StaggerItem>
                                            <MenuCard item=item />
                                        </StaggerItem>
                                    })
                                    .collect_view()}
                            </StaggerContainer>
                        }
                    }}
                </Show>
            </section>

            <SiteFooter />
        </div>
    }
}
