//! Sidebar: one entry per page.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{page_label, PAGES};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {PAGES.iter().map(|(key, icon_name)| {
                    let key = *key;
                    view! {
                        <li
                            class="sidebar__item"
                            class:sidebar__item--active=move || ctx.active.get() == key
                            title=page_label(key)
                            on:click=move |_| ctx.open_page(key)
                        >
                            {icon(icon_name)}
                            <span class="sidebar__label">{page_label(key)}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
