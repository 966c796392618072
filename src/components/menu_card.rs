//! Menu Card Component
//!
//! A single catalog item with its price, rating and cart controls.

use leptos::prelude::*;

use super::{InteractiveCard, StarRating};
use crate::models::MenuItem;
use crate::store::{store_add_to_cart, store_quantity, store_remove_from_cart, use_menu_store};

#[component]
pub fn MenuCard(item: MenuItem) -> impl IntoView {
    let store = use_menu_store();
    let id = item.id;
    let quantity = Memo::new(move |_| store_quantity(&store, id));

    view! {
        <InteractiveCard class="menu-card">
            <div class="menu-card-image">
                <img src=item.image.clone() alt=item.name.clone() loading="lazy" />
                {item.popular.then(|| view! { <span class="badge-popular">"Popular"</span> })}
                <span class="badge-price">{item.price.to_string()}</span>
            </div>
            <div class="menu-card-body">
                <span class="menu-card-category">{item.category.clone()}</span>
                <h3 class="menu-card-title">{item.name.clone()}</h3>
                <p class="menu-card-description">{item.description.clone()}</p>
                <StarRating filled=item.full_stars() label=item.rating_label() />
                <div class="menu-card-actions">
                    <Show
                        when=move || { quantity.get() > 0 }
                        fallback=move || view! {
                            <button class="add-btn" on:click=move |_| store_add_to_cart(&store, id)>
                                "Add to Cart"
                            </button>
                        }
                    >
                        <div class="quantity-control">
                            <button class="qty-btn" title="Remove one" on:click=move |_| store_remove_from_cart(&store, id)>
                                "-"
                            </button>
                            <span class="qty-value">{move || quantity.get()}</span>
                            <button class="qty-btn" title="Add one" on:click=move |_| store_add_to_cart(&store, id)>
                                "+"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </InteractiveCard>
    }
}
