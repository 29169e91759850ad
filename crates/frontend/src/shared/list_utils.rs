/// Utilities for list views: text search and estado filters
use leptos::prelude::*;

/// Value of the estado `<select>` meaning "no filter"
pub const FILTRO_TODOS: &str = "TODOS";

/// Types whose rows can be matched against the search box
pub trait Searchable {
    /// Whether the row matches an already lower-cased, trimmed query
    fn matches_filter(&self, query: &str) -> bool;
}

/// Case-insensitive substring test; `query` must already be lower-cased
pub fn contains_ci(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(query)
}

/// Normalizes the raw search box text
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Filters a list by the search query; an empty query keeps every row
pub fn filter_list<'a, T: Searchable>(items: &'a [T], raw_query: &str) -> Vec<&'a T> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches_filter(&query)).collect()
}

/// Whether an estado label passes the estado filter select
pub fn estado_matches(filter: &str, estado: &str) -> bool {
    filter.is_empty() || filter == FILTRO_TODOS || filter == estado
}

/// Search input bound to a signal
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    view! {
        <input
            class="search-input"
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// Estado filter select: "Todos" plus one option per estado
#[component]
pub fn EstadoFilter(value: RwSignal<String>, estados: Vec<&'static str>) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || value.get()
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            <option value=FILTRO_TODOS>"Todos"</option>
            {estados
                .into_iter()
                .map(|e| view! { <option value=e>{e}</option> })
                .collect_view()}
        </select>
    }
}
