//! Round user avatar with an initial-letter fallback.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use leptos::either::Either;
use leptos::prelude::*;

/// Uppercased first character of a display name, or `?` for blank names.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Avatar image sized `size`×`size` CSS pixels. Empty `src` renders the
/// name's initial instead.
#[component]
pub fn Avatar(src: String, name: String, #[prop(default = 40)] size: u32) -> impl IntoView {
    let style = format!("width:{size}px;height:{size}px");
    if src.is_empty() {
        Either::Left(view! {
            <span class="avatar avatar--initial" style=style title=name.clone()>
                {avatar_initial(&name)}
            </span>
        })
    } else {
        Either::Right(view! { <img class="avatar" style=style src=src alt=name/> })
    }
}
