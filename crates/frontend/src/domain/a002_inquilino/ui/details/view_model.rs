use crate::domain::a002_inquilino::api;
use crate::shared::api_utils::notify_error;
use contracts::domain::a002_inquilino::aggregate::{Inquilino, InquilinoDto};
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct InquilinoDetailsViewModel {
    pub form: RwSignal<InquilinoDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl InquilinoDetailsViewModel {
    pub fn new(initial: Option<&Inquilino>) -> Self {
        let dto = initial
            .map(InquilinoDto::from_aggregate)
            .unwrap_or_else(InquilinoDto::new);
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }
        self.error.set(None);

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::save(&current).await;
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => {
                    notify_error("Error al guardar inquilino", &e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    }
}
