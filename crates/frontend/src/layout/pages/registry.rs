use crate::dashboards::d400_alertas::ui::AlertasDashboard;
use crate::domain::a001_departamento::ui::list::DepartamentoList;
use crate::domain::a002_inquilino::ui::list::InquilinoList;
use crate::domain::a003_contrato::ui::list::ContratoList;
use crate::domain::a004_pago::ui::list::PagoList;
use leptos::prelude::*;

/// Рендерит контент страницы по её ключу.
pub fn render_page_content(key: &str) -> AnyView {
    match key {
        "d400_alertas" => view! { <AlertasDashboard /> }.into_any(),
        "a001_departamento" => view! { <DepartamentoList /> }.into_any(),
        "a002_inquilino" => view! { <InquilinoList /> }.into_any(),
        "a003_contrato" => view! { <ContratoList /> }.into_any(),
        "a004_pago" => view! { <PagoList /> }.into_any(),
        other => view! {
            <div class="placeholder">{format!("Página desconocida: {}", other)}</div>
        }
        .into_any(),
    }
}
