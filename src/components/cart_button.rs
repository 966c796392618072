use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::menu_state::MenuStateStoreFields;
use crate::store::use_menu_store;

/// "Cart (n)" with a count badge and the running subtotal
#[component]
pub fn CartButton(catalog: &'static Catalog) -> impl IntoView {
    let store = use_menu_store();
    let badge = Memo::new(move |_| store.cart().read().badge());
    let label = Memo::new(move |_| store.cart().read().label());
    let subtotal = Memo::new(move |_| store.cart().read().subtotal(catalog));

    view! {
        <div class="cart-button" class:has-items=move || { badge.get().is_some() }>
            <span class="cart-icon">"🛒"</span>
            <span class="cart-label">{move || label.get()}</span>
            {move || badge.get().map(|count| view! {
                <span class="cart-badge">{count}</span>
                <span class="cart-subtotal">{subtotal.get().to_string()}</span>
            })}
        </div>
    }
}
