use super::view_model::{parse_select_id, ContratoDetailsViewModel};
use crate::shared::icons::icon;
use contracts::domain::a001_departamento::aggregate::Departamento;
use contracts::domain::a002_inquilino::aggregate::Inquilino;
use contracts::domain::a003_contrato::aggregate::{Contrato, ContratoDto, EstadoContrato};
use leptos::prelude::*;
use std::rc::Rc;

/// Text input bound to one string field of the form
fn text_field(
    vm: ContratoDetailsViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&ContratoDto) -> String,
    set: fn(&mut ContratoDto, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
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

#[component]
pub fn ContratoDetails(
    initial: Option<Contrato>,
    departamentos: Vec<Departamento>,
    inquilinos: Vec<Inquilino>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ContratoDetailsViewModel::new(initial.as_ref());

    let depto_options = departamentos
        .into_iter()
        .map(|d| {
            let id = d.id;
            view! {
                <option value=id.to_string() selected=move || vm.form.with(|f| f.departamento_id == Some(id))>
                    {d.alias}
                </option>
            }
        })
        .collect_view();
    let inquilino_options = inquilinos
        .into_iter()
        .map(|i| {
            let id = i.id;
            view! {
                <option value=id.to_string() selected=move || vm.form.with(|f| f.inquilino_id == Some(id))>
                    {i.nombre_apellido}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="details-container contrato-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar Contrato" } else { "Nuevo Contrato" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="departamento_id">{"Departamento"}</label>
                        <select
                            id="departamento_id"
                            prop:value=move || vm.form.with(|f| f.departamento_id.map(|v| v.to_string()).unwrap_or_default())
                            on:change=move |ev| {
                                let value = parse_select_id(&event_target_value(&ev));
                                vm.form.update(|f| f.departamento_id = value);
                            }
                        >
                            <option value="">{"Seleccionar..."}</option>
                            {depto_options}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="inquilino_id">{"Inquilino"}</label>
                        <select
                            id="inquilino_id"
                            prop:value=move || vm.form.with(|f| f.inquilino_id.map(|v| v.to_string()).unwrap_or_default())
                            on:change=move |ev| {
                                let value = parse_select_id(&event_target_value(&ev));
                                vm.form.update(|f| f.inquilino_id = value);
                            }
                        >
                            <option value="">{"Seleccionar..."}</option>
                            {inquilino_options}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    {text_field(vm, "fecha_inicio", "Fecha de inicio", "date",
                        |f| f.fecha_inicio.clone(), |f, v| f.fecha_inicio = v)}
                    {text_field(vm, "fecha_fin", "Fecha de fin", "date",
                        |f| f.fecha_fin.clone(), |f, v| f.fecha_fin = v)}
                </div>

                <div class="form-row">
                    {text_field(vm, "monto_inicial", "Monto del alquiler", "text",
                        |f| f.monto_inicial.clone(), |f, v| f.monto_inicial = v)}
                    {text_field(vm, "deposito_garantia", "Depósito de garantía", "text",
                        |f| f.deposito_garantia.clone(), |f, v| f.deposito_garantia = v)}
                </div>

                <div class="form-row">
                    {text_field(vm, "proxima_actualizacion", "Próxima actualización", "date",
                        |f| f.proxima_actualizacion.clone(), |f, v| f.proxima_actualizacion = v)}
                    {text_field(vm, "porcentaje_actualizacion", "% de actualización", "text",
                        |f| f.porcentaje_actualizacion.clone(), |f, v| f.porcentaje_actualizacion = v)}
                </div>

                {text_field(vm, "contrato_firmado_url", "Enlace al contrato firmado", "url",
                    |f| f.contrato_firmado_url.clone(), |f, v| f.contrato_firmado_url = v)}

                <div class="form-group">
                    <label for="estado">{"Estado"}</label>
                    <select
                        id="estado"
                        prop:value=move || vm.form.with(|f| f.estado.as_str())
                        on:change=move |ev| {
                            if let Some(estado) = EstadoContrato::from_str_opt(&event_target_value(&ev)) {
                                vm.form.update(|f| f.estado = estado);
                            }
                        }
                    >
                        {EstadoContrato::ALL
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
                    {"Guardar"}
                </button>
                <button class="button button--secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}
