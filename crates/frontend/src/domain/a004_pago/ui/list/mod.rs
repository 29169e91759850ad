use crate::domain::a004_pago::api::{self, PagosData};
use crate::domain::a004_pago::ui::details::PagoDetails;
use crate::shared::components::stat_card::StatTone;
use crate::shared::components::{EstadoBadge, StatCard};
use crate::shared::date_utils::{format_fecha_opt, today};
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::format_money;
use contracts::domain::a004_pago::aggregate::PagoResumen;
use contracts::domain::a004_pago::late_fee::late_fee;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;

/// Contract label per contract id: the department alias, else `Contrato #id`
pub fn contrato_labels(data: &PagosData) -> HashMap<EntityId, String> {
    let aliases: HashMap<_, _> = data
        .departamentos
        .iter()
        .map(|d| (d.id, d.alias.as_str()))
        .collect();
    data.contratos
        .iter()
        .map(|c| {
            let label = aliases
                .get(&c.departamento_id)
                .map(|a| a.to_string())
                .unwrap_or_else(|| format!("Contrato #{}", c.id));
            (c.id, label)
        })
        .collect()
}

/// Options for the register form: active contracts first
fn contrato_options(data: &PagosData) -> Vec<(EntityId, String)> {
    let labels = contrato_labels(data);
    let mut contratos: Vec<_> = data.contratos.iter().collect();
    contratos.sort_by_key(|c| (!c.is_activo(), c.id));
    contratos
        .into_iter()
        .map(|c| {
            let label = labels.get(&c.id).cloned().unwrap_or_default();
            (c.id, format!("{} ({})", label, c.estado.as_str()))
        })
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn PagoList() -> impl IntoView {
    let data = RwSignal::new(PagosData::default());
    let (state, set_state) = signal(LoadState::Loading);
    let (show_form, set_show_form) = signal(false);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_with_references().await {
                Ok(v) => {
                    data.set(v);
                    set_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("pagos: {}", e);
                    set_state.set(LoadState::Error(e.user_message()));
                }
            }
        });
    };

    let resumen = Memo::new(move |_| data.with(|d| PagoResumen::compute(&d.pagos)));

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Pagos"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_form.set(true)>
                        {icon("plus")}
                        {"Registrar Pago"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total cobrado"
                    icon_name="cash"
                    value=Signal::derive(move || format_money(resumen.get().total_cobrado))
                    tone=StatTone::Good
                />
                <StatCard
                    label="Pagos pendientes"
                    icon_name="clock"
                    value=Signal::derive(move || resumen.get().pendientes.to_string())
                    tone=Signal::derive(move || {
                        if resumen.get().pendientes > 0 { StatTone::Warning } else { StatTone::Neutral }
                    })
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
                fallback=|| view! { <div class="empty-state">{"Cargando pagos..."}</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Período"}</th>
                                <th class="table__header-cell">{"Contrato"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Alquiler"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Expensas"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Servicios"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Total"}</th>
                                <th class="table__header-cell">{"Fecha de pago"}</th>
                                <th class="table__header-cell">{"Estado"}</th>
                                <th class="table__header-cell table__header-cell--right">{"Mora estimada"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let hoy = today();
                                data.with(|d| {
                                    let labels = contrato_labels(d);
                                    d.pagos.iter().map(|p| {
                                        let contrato = labels
                                            .get(&p.contrato_id)
                                            .cloned()
                                            .unwrap_or_else(|| format!("Contrato #{}", p.contrato_id));
                                        let mora = late_fee(p, hoy)
                                            .map(format_money)
                                            .unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{p.periodo.clone()}</td>
                                                <td class="table__cell">{contrato}</td>
                                                <td class="table__cell table__cell--right">{format_money(p.monto_alquiler)}</td>
                                                <td class="table__cell table__cell--right">{format_money(p.monto_expensas)}</td>
                                                <td class="table__cell table__cell--right">{format_money(p.monto_servicios)}</td>
                                                <td class="table__cell table__cell--right">{format_money(p.total())}</td>
                                                <td class="table__cell">{format_fecha_opt(p.fecha_pago)}</td>
                                                <td class="table__cell"><EstadoBadge estado=p.estado.as_str()/></td>
                                                <td class="table__cell table__cell--right table__cell--warning">{mora}</td>
                                            </tr>
                                        }
                                    }).collect_view()
                                })
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            <Show when=move || show_form.get()>
                <ModalFrame on_close=Callback::new(move |_| set_show_form.set(false))>
                    <PagoDetails
                        contratos=data.with_untracked(contrato_options)
                        on_saved=Rc::new(move |_| {
                            set_show_form.set(false);
                            fetch();
                        })
                        on_cancel=Rc::new(move |_| set_show_form.set(false))
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
    use contracts::domain::a003_contrato::aggregate::{Contrato, EstadoContrato};
    use rust_decimal::Decimal;

    fn contrato(id: EntityId, departamento_id: EntityId, estado: EstadoContrato) -> Contrato {
        Contrato {
            id,
            departamento_id,
            inquilino_id: 1,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            fecha_fin: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            monto_inicial: Decimal::from(200_000),
            deposito_garantia: None,
            contrato_firmado_url: None,
            proxima_actualizacion: None,
            porcentaje_actualizacion: None,
            estado,
        }
    }

    fn data() -> PagosData {
        PagosData {
            pagos: vec![],
            contratos: vec![
                contrato(1, 10, EstadoContrato::Vencido),
                contrato(2, 77, EstadoContrato::Activo),
            ],
            departamentos: vec![Departamento {
                id: 10,
                alias: "PH Alberdi".into(),
                direccion: "Alberdi 300".into(),
                tipo: "CASA".into(),
                estado: EstadoDepartamento::Vacio,
                fecha_estado_desde: None,
                notas: None,
            }],
        }
    }

    #[test]
    fn test_contrato_labels() {
        let labels = contrato_labels(&data());
        assert_eq!(labels[&1], "PH Alberdi");
        assert_eq!(labels[&2], "Contrato #2");
    }

    #[test]
    fn test_contrato_options_active_first() {
        let options = contrato_options(&data());
        assert_eq!(options[0], (2, "Contrato #2 (ACTIVO)".to_string()));
        assert_eq!(options[1], (1, "PH Alberdi (VENCIDO)".to_string()));
    }
}
