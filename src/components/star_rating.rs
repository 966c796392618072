use leptos::prelude::*;

/// Five stars, the first `filled` of them lit
#[component]
pub fn StarRating(filled: usize, #[prop(into, optional)] label: Option<String>) -> impl IntoView {
    view! {
        <span class="star-rating">
            {(0..5)
                .map(|i| {
                    let class = if i < filled { "star filled" } else { "star" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
            {label.map(|text| view! { <span class="star-label">{text}</span> })}
        </span>
    }
}
