use super::view_model::PagoDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a004_pago::aggregate::{EstadoPago, PagoDto};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::rc::Rc;

fn amount_field(
    vm: PagoDetailsViewModel,
    id: &'static str,
    label: &'static str,
    get: fn(&PagoDto) -> String,
    set: fn(&mut PagoDto, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                inputmode="decimal"
                id=id
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

/// `contratos`: (id, label) pairs for the contract select
#[component]
pub fn PagoDetails(
    contratos: Vec<(EntityId, String)>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = PagoDetailsViewModel::new();

    view! {
        <div class="details-container pago-details">
            <div class="details-header">
                <h3>{"Registrar Pago"}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="contrato_id">{"Contrato"}</label>
                    <select
                        id="contrato_id"
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse::<EntityId>().ok();
                            vm.form.update(|f| f.contrato_id = value);
                        }
                    >
                        <option value="">{"Seleccionar..."}</option>
                        {contratos
                            .into_iter()
                            .map(|(id, label)| view! { <option value=id.to_string()>{label}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="periodo">{"Período"}</label>
                        <input
                            type="month"
                            id="periodo"
                            prop:value=move || vm.form.get().periodo
                            on:input=move |ev| vm.form.update(|f| f.periodo = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="fecha_pago">{"Fecha de pago"}</label>
                        <input
                            type="date"
                            id="fecha_pago"
                            prop:value=move || vm.form.get().fecha_pago
                            on:input=move |ev| vm.form.update(|f| f.fecha_pago = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    {amount_field(vm, "monto_alquiler", "Alquiler", |f| f.monto_alquiler.clone(), |f, v| f.monto_alquiler = v)}
                    {amount_field(vm, "monto_expensas", "Expensas", |f| f.monto_expensas.clone(), |f, v| f.monto_expensas = v)}
                    {amount_field(vm, "monto_servicios", "Servicios", |f| f.monto_servicios.clone(), |f, v| f.monto_servicios = v)}
                </div>

                <div class="form-group">
                    <label for="estado">{"Estado"}</label>
                    <select
                        id="estado"
                        on:change=move |ev| {
                            if let Some(estado) = EstadoPago::from_str_opt(&event_target_value(&ev)) {
                                vm.form.update(|f| f.estado = estado);
                            }
                        }
                    >
                        {EstadoPago::ALL
                            .into_iter()
                            .map(|e| view! {
                                <option value=e.as_str() selected=move || vm.form.with(|f| f.estado == e)>{e.as_str()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {"Registrar"}
                </button>
                <button class="button button--secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}
