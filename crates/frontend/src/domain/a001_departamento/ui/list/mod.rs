use crate::domain::a001_departamento::api;
use crate::domain::a001_departamento::ui::details::DepartamentoDetails;
use crate::shared::api_utils::{confirm, notify_error};
use crate::shared::components::EstadoBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, estado_matches, filter_list, EstadoFilter, SearchInput, Searchable, FILTRO_TODOS,
};
use crate::shared::load_state::LoadState;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_departamento::aggregate::{Departamento, EstadoDepartamento};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::rc::Rc;

impl Searchable for Departamento {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.alias, query) || contains_ci(&self.direccion, query)
    }
}

/// Rows visible for the current search text and estado filter
pub fn filter_departamentos(items: &[Departamento], query: &str, estado: &str) -> Vec<Departamento> {
    filter_list(items, query)
        .into_iter()
        .filter(|d| estado_matches(estado, d.estado.as_str()))
        .cloned()
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn DepartamentoList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Departamento>>(Vec::new());
    let (state, set_state) = signal(LoadState::Loading);
    let search = RwSignal::new(String::new());
    let estado_filter = RwSignal::new(FILTRO_TODOS.to_string());
    // None: modal closed; Some(None): new; Some(Some(d)): editing d
    let editing = RwSignal::new(None::<Option<Departamento>>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all().await {
                Ok(v) => {
                    set_items.set(v);
                    set_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("departamentos: {}", e);
                    set_state.set(LoadState::Error(e.user_message()));
                }
            }
        });
    };

    let handle_delete = move |id: EntityId| {
        if !confirm("¿Estás seguro de eliminar este departamento?") {
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
        items.with(|list| filter_departamentos(list, &query, &estado))
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Departamentos"}</h1>
                    <p class="header__subtitle">{"Gestión de unidades y propiedades"}</p>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        {"Nuevo Departamento"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Buscar por nombre o dirección..."/>
                <EstadoFilter
                    value=estado_filter
                    estados=EstadoDepartamento::ALL.iter().map(|e| e.as_str()).collect()
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
                fallback=|| view! { <div class="empty-state">{"Cargando departamentos..."}</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Alias"}</th>
                                <th class="table__header-cell">{"Dirección"}</th>
                                <th class="table__header-cell">{"Tipo"}</th>
                                <th class="table__header-cell">{"Estado"}</th>
                                <th class="table__header-cell">{"Notas"}</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = filtered();
                                if rows.is_empty() {
                                    return view! {
                                        <tr><td class="table__cell" colspan="6">{"No se encontraron departamentos."}</td></tr>
                                    }.into_any();
                                }
                                rows.into_iter().map(|d| {
                                    let id = d.id;
                                    let for_edit = d.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{d.alias}</td>
                                            <td class="table__cell">{d.direccion}</td>
                                            <td class="table__cell">{d.tipo}</td>
                                            <td class="table__cell"><EstadoBadge estado=d.estado.as_str()/></td>
                                            <td class="table__cell">{d.notas.unwrap_or_default()}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--icon"
                                                    title="Editar"
                                                    on:click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--icon"
                                                    title="Eliminar"
                                                    on:click=move |_| handle_delete(id)
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            <Show when=move || editing.with(|e| e.is_some())>
                <ModalFrame on_close=Callback::new(move |_| editing.set(None))>
                    <DepartamentoDetails
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

#[cfg(test)]
mod tests {
    use super::*;

    fn depto(id: EntityId, alias: &str, direccion: &str, estado: EstadoDepartamento) -> Departamento {
        Departamento {
            id,
            alias: alias.into(),
            direccion: direccion.into(),
            tipo: "DEPARTAMENTO".into(),
            estado,
            fecha_estado_desde: None,
            notas: None,
        }
    }

    #[test]
    fn test_filter_by_text_and_estado() {
        let items = vec![
            depto(1, "Depto 1A", "San Martín 120", EstadoDepartamento::Alquilado),
            depto(2, "Casa Central", "Belgrano 55", EstadoDepartamento::Vacio),
            depto(3, "Depto 2B", "Belgrano 57", EstadoDepartamento::Refaccion),
        ];

        let by_text = filter_departamentos(&items, "belgrano", FILTRO_TODOS);
        assert_eq!(by_text.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2, 3]);

        let by_both = filter_departamentos(&items, "depto", "REFACCION");
        assert_eq!(by_both.len(), 1);
        assert_eq!(by_both[0].id, 3);

        assert_eq!(filter_departamentos(&items, "", FILTRO_TODOS).len(), 3);
    }
}
