use super::view_model::{opciones_contrato, CalculadoraViewModel};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_money_delta, format_percent};
use contracts::domain::a001_departamento::aggregate::Departamento;
use contracts::domain::a003_contrato::aggregate::Contrato;
use contracts::domain::common::{parse_amount, EntityId};
use contracts::usecases::u501_ajuste_alquiler::TipoAjuste;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn CalculadoraAjustes(
    contratos: Vec<Contrato>,
    departamentos: Vec<Departamento>,
    /// Runs after a successful write, so the caller can refetch
    on_updated: Rc<dyn Fn(())>,
    on_close: Rc<dyn Fn(())>,
) -> impl IntoView {
    let opciones = opciones_contrato(&contratos, &departamentos);
    let vm = CalculadoraViewModel::new(contratos);

    let tipo_button = move |tipo: TipoAjuste| {
        view! {
            <button
                class=move || {
                    if vm.tipo.get() == tipo { "toggle__option toggle__option--active" } else { "toggle__option" }
                }
                on:click=move |_| vm.tipo.set(tipo)
            >
                {tipo.label()}
            </button>
        }
    };

    let resultado_view = move || {
        vm.resultado().map(|ajuste| {
            let porcentaje = parse_amount(&vm.monto_base.get())
                .and_then(|base| ajuste.porcentaje_efectivo(base))
                .map(|p| format!("({})", format_percent(p)))
                .unwrap_or_default();
            view! {
                <div class="calculadora__resultado">
                    <div class="calculadora__fila">
                        <span>{"Nuevo monto"}</span>
                        <strong class="calculadora__nuevo-monto">{format_money(ajuste.nuevo_monto)}</strong>
                    </div>
                    <div class="calculadora__fila">
                        <span>{"Diferencia"}</span>
                        <span>{format!("{} {}", format_money_delta(ajuste.diferencia), porcentaje)}</span>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="details-container calculadora">
            <div class="details-header">
                <h3>{icon("calculator")}{"Calculadora de Ajustes"}</h3>
                <p class="details-header__subtitle">{"Simular aumentos por IPC o monto fijo"}</p>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="calc_contrato">{"Cargar desde contrato (opcional)"}</label>
                    <select
                        id="calc_contrato"
                        on:change=move |ev| {
                            vm.select_contrato(event_target_value(&ev).parse::<EntityId>().ok());
                        }
                    >
                        <option value="">{"-- Usar calculadora libre --"}</option>
                        {opciones
                            .into_iter()
                            .map(|(id, label)| view! { <option value=id.to_string()>{label}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="calc_monto">{"Monto actual ($)"}</label>
                        <input
                            type="text"
                            inputmode="decimal"
                            id="calc_monto"
                            placeholder="0,00"
                            prop:value=move || vm.monto_base.get()
                            on:input=move |ev| vm.monto_base.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="calc_valor">
                            {move || match vm.tipo.get() {
                                TipoAjuste::Porcentaje => "Porcentaje (%)",
                                TipoAjuste::Fijo => "Monto a sumar ($)",
                            }}
                        </label>
                        <input
                            type="text"
                            inputmode="decimal"
                            id="calc_valor"
                            prop:value=move || vm.valor.get()
                            on:input=move |ev| vm.valor.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="toggle">
                    {tipo_button(TipoAjuste::Porcentaje)}
                    {tipo_button(TipoAjuste::Fijo)}
                </div>

                {resultado_view}
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || !vm.can_apply()
                    on:click={
                        let on_updated = on_updated.clone();
                        let on_close = on_close.clone();
                        move |_| vm.aplicar_command(on_updated.clone(), on_close.clone())
                    }
                >
                    {icon("save")}
                    {"Aplicar al contrato"}
                </button>
                <button class="button button--secondary" on:click=move |_| (on_close)(())>
                    {icon("cancel")}
                    {"Cerrar"}
                </button>
            </div>
        </div>
    }
}
