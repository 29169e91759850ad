use super::view_model::InquilinoDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a002_inquilino::aggregate::{
    EstadoInquilino, Inquilino, CANALES_COMUNICACION,
};
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn InquilinoDetails(
    initial: Option<Inquilino>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = InquilinoDetailsViewModel::new(initial.as_ref());

    view! {
        <div class="details-container inquilino-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar Inquilino" } else { "Nuevo Inquilino" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="nombre_apellido">{"Nombre y apellido"}</label>
                    <input
                        type="text"
                        id="nombre_apellido"
                        prop:value=move || vm.form.get().nombre_apellido
                        on:input=move |ev| vm.form.update(|f| f.nombre_apellido = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="dni_cuit">{"DNI / CUIT"}</label>
                        <input
                            type="text"
                            id="dni_cuit"
                            prop:value=move || vm.form.get().dni_cuit
                            on:input=move |ev| vm.form.update(|f| f.dni_cuit = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="telefono">{"Teléfono"}</label>
                        <input
                            type="tel"
                            id="telefono"
                            prop:value=move || vm.form.get().telefono
                            on:input=move |ev| vm.form.update(|f| f.telefono = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || vm.form.get().email
                        on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="canal">{"Canal de comunicación"}</label>
                        <select
                            id="canal"
                            prop:value=move || vm.form.get().canal_comunicacion
                            on:change=move |ev| vm.form.update(|f| f.canal_comunicacion = event_target_value(&ev))
                        >
                            {CANALES_COMUNICACION
                                .into_iter()
                                .map(|c| view! {
                                    <option value=c selected=move || vm.form.with(|f| f.canal_comunicacion == c)>{c}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="estado">{"Estado"}</label>
                        <select
                            id="estado"
                            prop:value=move || vm.form.get().estado.as_str()
                            on:change=move |ev| {
                                if let Some(estado) = EstadoInquilino::from_str_opt(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.estado = estado);
                                }
                            }
                        >
                            {EstadoInquilino::ALL
                                .into_iter()
                                .map(|e| view! {
                                    <option value=e.as_str() selected=move || vm.form.with(|f| f.estado == e)>{e.as_str()}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>
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
