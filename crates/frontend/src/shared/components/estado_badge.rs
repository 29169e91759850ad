use leptos::prelude::*;

/// Badge modifier for an estado label
pub fn badge_class(estado: &str) -> &'static str {
    match estado {
        "ALQUILADO" | "ACTIVO" | "COBRADO" => "badge badge--success",
        "PENDIENTE" | "VENCIDO" | "REFACCION" | "PARCIAL" => "badge badge--warning",
        "RESCINDIDO" | "INACTIVO" => "badge badge--error",
        _ => "badge",
    }
}

#[component]
pub fn EstadoBadge(estado: &'static str) -> impl IntoView {
    view! { <span class=badge_class(estado)>{estado}</span> }
}
