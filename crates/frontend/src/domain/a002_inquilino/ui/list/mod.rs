use crate::domain::a002_inquilino::api;
use crate::domain::a002_inquilino::ui::details::InquilinoDetails;
use crate::shared::api_utils::{confirm, notify_error};
use crate::shared::components::EstadoBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, estado_matches, filter_list, EstadoFilter, SearchInput, Searchable, FILTRO_TODOS,
};
use crate::shared::load_state::LoadState;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a002_inquilino::aggregate::{EstadoInquilino, Inquilino};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::rc::Rc;

impl Searchable for Inquilino {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.nombre_apellido, query)
            || self
                .dni_cuit
                .as_deref()
                .map(|dni| dni.contains(query))
                .unwrap_or(false)
    }
}

pub fn filter_inquilinos(items: &[Inquilino], query: &str, estado: &str) -> Vec<Inquilino> {
    filter_list(items, query)
        .into_iter()
        .filter(|i| estado_matches(estado, i.estado.as_str()))
        .cloned()
        .collect()
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn InquilinoList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Inquilino>>(Vec::new());
    let (state, set_state) = signal(LoadState::Loading);
    let search = RwSignal::new(String::new());
    let estado_filter = RwSignal::new(FILTRO_TODOS.to_string());
    let editing = RwSignal::new(None::<Option<Inquilino>>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => {
                    set_items.set(v);
                    set_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("inquilinos: {}", e);
                    set_state.set(LoadState::Error(e.user_message()));
                }
            }
        });
    };

    let handle_delete = move |id: EntityId| {
        if !confirm("¿Eliminar este inquilino?") {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => fetch(),
                Err(e) => notify_error("Error al eliminar", &e),
            }
        });
    };

    let filtered = move || {
        let query = search.get();
        let estado = estado_filter.get();
        items.with(|list| filter_inquilinos(list, &query, &estado))
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Inquilinos"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        {"Nuevo Inquilino"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Buscar por nombre o DNI..."/>
                <EstadoFilter
                    value=estado_filter
                    estados=EstadoInquilino::ALL.iter().map(|e| e.as_str()).collect()
                />
            </div>

            {move || state.get().error().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show
                when=move || !state.get().is_loading()
                fallback=|| view! { <div class="empty-state">{"Cargando inquilinos..."}</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Nombre y apellido"}</th>
                                <th class="table__header-cell">{"DNI / CUIT"}</th>
                                <th class="table__header-cell">{"Teléfono"}</th>
                                <th class="table__header-cell">{"Email"}</th>
                                <th class="table__header-cell">{"Canal"}</th>
                                <th class="table__header-cell">{"Estado"}</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || filtered().into_iter().map(|i| {
                                let id = i.id;
                                let for_edit = i.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{i.nombre_apellido}</td>
                                        <td class="table__cell">{or_dash(i.dni_cuit)}</td>
                                        <td class="table__cell">{or_dash(i.telefono)}</td>
                                        <td class="table__cell">{or_dash(i.email)}</td>
                                        <td class="table__cell">{or_dash(i.canal_comunicacion)}</td>
                                        <td class="table__cell"><EstadoBadge estado=i.estado.as_str()/></td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Editar"
                                                on:click=move |_| editing.set(Some(Some(for_edit.clone())))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="Eliminar"
                                                on:click=move |_| handle_delete(id)>
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>

            <Show when=move || editing.with(|e| e.is_some())>
                <ModalFrame on_close=Callback::new(move |_| editing.set(None))>
                    <InquilinoDetails
                        initial=editing.get_untracked().flatten()
                        on_saved=Rc::new(move |_| {
                            editing.set(None);
                            fetch();
                        })
                        on_cancel=Rc::new(move |_| editing.set(None))
                    />
                </ModalFrame>
            </Show>
        </div>
    }
}
