use super::view_model::DepartamentoDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_departamento::aggregate::{Departamento, EstadoDepartamento};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn DepartamentoDetails(
    initial: Option<Departamento>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = DepartamentoDetailsViewModel::new(initial.as_ref());

    view! {
        <div class="details-container departamento-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar Departamento" } else { "Nuevo Departamento" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="alias">{"Nombre identificatorio"}</label>
                    <input
                        type="text"
                        id="alias"
                        prop:value=move || vm.form.get().alias
                        on:input=move |ev| vm.form.update(|f| f.alias = event_target_value(&ev))
                        placeholder="Ej: Depto 1A, Casa Central"
                    />
                </div>

                <div class="form-group">
                    <label for="direccion">{"Dirección completa"}</label>
                    <input
                        type="text"
                        id="direccion"
                        prop:value=move || vm.form.get().direccion
                        on:input=move |ev| vm.form.update(|f| f.direccion = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="tipo">{"Tipo"}</label>
                    <input
                        type="text"
                        id="tipo"
                        prop:value=move || vm.form.get().tipo
                        on:input=move |ev| vm.form.update(|f| f.tipo = event_target_value(&ev))
                        placeholder="DEPARTAMENTO, CASA, COCHERA, LOCAL"
                    />
                </div>

                <div class="form-group">
                    <label for="estado">{"Estado"}</label>
                    <select
                        id="estado"
                        prop:value=move || vm.form.get().estado.as_str()
                        on:change=move |ev| {
                            if let Some(estado) = EstadoDepartamento::from_str_opt(&event_target_value(&ev)) {
                                vm.form.update(|f| f.estado = estado);
                            }
                        }
                    >
                        {EstadoDepartamento::ALL
                            .into_iter()
                            .map(|e| view! {
                                <option value=e.as_str() selected=move || vm.form.with(|f| f.estado == e)>{e.as_str()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="fecha_estado_desde">{"En este estado desde"}</label>
                    <input
                        type="date"
                        id="fecha_estado_desde"
                        prop:value=move || vm.form.get().fecha_estado_desde
                        on:input=move |ev| vm.form.update(|f| f.fecha_estado_desde = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="notas">{"Notas"}</label>
                    <textarea
                        id="notas"
                        prop:value=move || vm.form.get().notas
                        on:input=move |ev| vm.form.update(|f| f.notas = event_target_value(&ev))
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled=move || !vm.is_form_valid() || vm.saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Guardar cambios" } else { "Crear" }}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}
