use crate::domain::a003_contrato::api::{self, ContratosData};
use crate::domain::a003_contrato::ui::details::ContratoDetails;
use crate::shared::components::EstadoBadge;
use crate::shared::date_utils::{format_fecha, format_fecha_opt};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, SearchInput, Searchable};
use crate::shared::load_state::LoadState;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::{format_money, format_percent};
use crate::usecases::u501_ajuste_alquiler::CalculadoraAjustes;
use contracts::domain::a003_contrato::aggregate::Contrato;
use leptos::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;

/// Shown when a referenced record is missing from the fetched collections
pub const DESCONOCIDO: &str = "Desconocido";

/// A contract with its references resolved for display
#[derive(Debug, Clone)]
pub struct ContratoRow {
    pub contrato: Contrato,
    pub departamento: String,
    pub inquilino: String,
}

impl Searchable for ContratoRow {
    fn matches_filter(&self, query: &str) -> bool {
        contains_ci(&self.departamento, query) || contains_ci(&self.inquilino, query)
    }
}

pub fn build_rows(data: &ContratosData) -> Vec<ContratoRow> {
    let deptos: HashMap<_, _> = data
        .departamentos
        .iter()
        .map(|d| (d.id, d.alias.as_str()))
        .collect();
    let inquilinos: HashMap<_, _> = data
        .inquilinos
        .iter()
        .map(|i| (i.id, i.nombre_apellido.as_str()))
        .collect();

    data.contratos
        .iter()
        .map(|c| ContratoRow {
            contrato: c.clone(),
            departamento: deptos
                .get(&c.departamento_id)
                .copied()
                .unwrap_or(DESCONOCIDO)
                .to_string(),
            inquilino: inquilinos
                .get(&c.inquilino_id)
                .copied()
                .unwrap_or(DESCONOCIDO)
                .to_string(),
        })
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn ContratoList() -> impl IntoView {
    let data = RwSignal::new(ContratosData::default());
    let (state, set_state) = signal(LoadState::Loading);
    let search = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<Option<Contrato>>);
    let (show_calculadora, set_show_calculadora) = signal(false);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_with_references().await {
                Ok(v) => {
                    data.set(v);
                    set_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("contratos: {}", e);
                    set_state.set(LoadState::Error(e.user_message()));
                }
            }
        });
    };

    let filtered = move || {
        let query = search.get();
        data.with(|d| {
            let rows = build_rows(d);
            filter_list(&rows, &query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Contratos"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        {"Nuevo Contrato"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| set_show_calculadora.set(true)>
                        {icon("calculator")}
                        {"Calculadora de ajustes"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <SearchInput value=search placeholder="Buscar por departamento o inquilino..."/>
            </div>

            {move || state.get().error().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show
                when=move || !state.get().is_loading()
                fallback=|| view! { <div class="empty-state">{"Cargando contratos..."}</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Departamento"}</th>
                                <th class="table__header-cell">{"Inquilino"}</th>
                                <th class="table__header-cell">{"Vigencia"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Monto"}</th>
                                <th class="table__header-cell">{"Próx. actualización"}</th>
                                <th class="table__header-cell">{"Estado"}</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || filtered().into_iter().map(|row| {
                                let c = row.contrato;
                                let for_edit = c.clone();
                                let vigencia = format!("{} - {}", format_fecha(c.fecha_inicio), format_fecha(c.fecha_fin));
                                let actualizacion = match (c.proxima_actualizacion, c.porcentaje_actualizacion) {
                                    (Some(fecha), Some(pct)) => format!("{} ({})", format_fecha(fecha), format_percent(pct)),
                                    (fecha, _) => format_fecha_opt(fecha),
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.departamento}</td>
                                        <td class="table__cell">{row.inquilino}</td>
                                        <td class="table__cell">{vigencia}</td>
                                        <td class="table__cell table__cell--right">{format_money(c.monto_inicial)}</td>
                                        <td class="table__cell">{actualizacion}</td>
                                        <td class="table__cell"><EstadoBadge estado=c.estado.as_str()/></td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Editar"
                                                on:click=move |_| editing.set(Some(Some(for_edit.clone())))>
                                                {icon("edit")}
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
                    <ContratoDetails
                        initial=editing.get_untracked().flatten()
                        departamentos=data.with_untracked(|d| d.departamentos.clone())
                        inquilinos=data.with_untracked(|d| d.inquilinos.clone())
                        on_saved=Rc::new(move |_| {
                            editing.set(None);
                            fetch();
                        })
                        on_cancel=Rc::new(move |_| editing.set(None))
                    />
                </ModalFrame>
            </Show>

            <Show when=move || show_calculadora.get()>
                <ModalFrame
                    on_close=Callback::new(move |_| set_show_calculadora.set(false))
                    modal_class="calculadora-modal".to_string()
                >
                    <CalculadoraAjustes
                        contratos=data.with_untracked(|d| d.contratos.clone())
                        departamentos=data.with_untracked(|d| d.departamentos.clone())
                        on_updated=Rc::new(move |_| fetch())
                        on_close=Rc::new(move |_| set_show_calculadora.set(false))
                    />
                </ModalFrame>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_departamento::aggregate::{Departamento, EstadoDepartamento};
    use contracts::domain::a002_inquilino::aggregate::{EstadoInquilino, Inquilino};
    use contracts::domain::a003_contrato::aggregate::EstadoContrato;
    use rust_decimal::Decimal;

    fn contrato(id: i64, departamento_id: i64, inquilino_id: i64) -> Contrato {
        Contrato {
            id,
            departamento_id,
            inquilino_id,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            fecha_fin: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            monto_inicial: Decimal::from(250_000),
            deposito_garantia: None,
            contrato_firmado_url: None,
            proxima_actualizacion: None,
            porcentaje_actualizacion: None,
            estado: EstadoContrato::Activo,
        }
    }

    fn data() -> ContratosData {
        ContratosData {
            contratos: vec![contrato(1, 10, 100), contrato(2, 99, 100)],
            departamentos: vec![Departamento {
                id: 10,
                alias: "Depto 4C".into(),
                direccion: "Mitre 800".into(),
                tipo: "DEPARTAMENTO".into(),
                estado: EstadoDepartamento::Alquilado,
                fecha_estado_desde: None,
                notas: None,
            }],
            inquilinos: vec![Inquilino {
                id: 100,
                nombre_apellido: "Lucía Fernández".into(),
                dni_cuit: None,
                telefono: None,
                email: None,
                canal_comunicacion: None,
                estado: EstadoInquilino::Activo,
            }],
        }
    }

    #[test]
    fn test_rows_resolve_references() {
        let rows = build_rows(&data());
        assert_eq!(rows[0].departamento, "Depto 4C");
        assert_eq!(rows[0].inquilino, "Lucía Fernández");
        assert_eq!(rows[1].departamento, DESCONOCIDO);
    }

    #[test]
    fn test_search_over_resolved_names() {
        let rows = build_rows(&data());
        assert_eq!(filter_list(&rows, "4c").len(), 1);
        assert_eq!(filter_list(&rows, "lucía").len(), 2);
        assert_eq!(filter_list(&rows, "desconocido").len(), 1);
    }
}
