use crate::domain::a001_departamento::api;
use crate::shared::api_utils::notify_error;
use contracts::domain::a001_departamento::aggregate::{Departamento, DepartamentoDto};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the Departamento form
#[derive(Clone, Copy)]
pub struct DepartamentoDetailsViewModel {
    pub form: RwSignal<DepartamentoDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl DepartamentoDetailsViewModel {
    pub fn new(initial: Option<&Departamento>) -> Self {
        let dto = initial
            .map(DepartamentoDto::from_aggregate)
            .unwrap_or_else(DepartamentoDto::new);
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Validate, then create or update; `on_saved` runs only after the API accepted it
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::save(&current).await;
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => {
                    notify_error("Error al guardar", &e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    }
}
