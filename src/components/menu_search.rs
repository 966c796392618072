use leptos::prelude::*;

use crate::menu_state::MenuStateStoreFields;
use crate::store::{store_set_search_term, use_menu_store};

/// Free-text filter over item names and descriptions
#[component]
pub fn MenuSearch() -> impl IntoView {
    let store = use_menu_store();

    view! {
        <div class="menu-search">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                placeholder="Search our menu..."
                prop:value=move || store.filter().read().search_term.clone()
                on:input=move |ev| store_set_search_term(&store, event_target_value(&ev))
            />
        </div>
    }
}
