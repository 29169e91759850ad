use crate::domain::a004_pago::api;
use crate::shared::api_utils::notify_error;
use crate::shared::date_utils::today;
use contracts::domain::a004_pago::aggregate::PagoDto;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct PagoDetailsViewModel {
    pub form: RwSignal<PagoDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl PagoDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PagoDto::new(today())),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
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
            let result = api::register(&current).await;
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => {
                    notify_error("Error al registrar pago", &e);
                    error.set(Some(e.user_message()));
                }
            }
        });
    }
}

impl Default for PagoDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
