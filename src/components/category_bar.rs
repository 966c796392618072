//! Category Bar Component
//!
//! One pill per filter option; the selected one is highlighted.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::menu_state::MenuStateStoreFields;
use crate::store::{store_set_category, use_menu_store};

#[component]
pub fn CategoryBar(catalog: &'static Catalog) -> impl IntoView {
    let store = use_menu_store();
    let selected = Memo::new(move |_| store.filter().read().selected_category.clone());

    view! {
        <div class="category-bar">
            <For
                each=move || catalog.filter_options()
                key=|category| category.clone()
                children=move |category| {
                    let value = category.clone();
                    let is_selected = {
                        let category = category.clone();
                        move || selected.get() == category
                    };
                    view! {
                        <button
                            class="category-pill"
                            class:selected=is_selected
                            on:click=move |_| store_set_category(&store, value.clone())
                        >
                            {category}
                        </button>
                    }
                }
            />
        </div>
    }
}
