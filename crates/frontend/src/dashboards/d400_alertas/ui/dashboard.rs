use crate::dashboards::d400_alertas::api;
use crate::shared::components::stat_card::StatTone;
use crate::shared::components::{EstadoBadge, StatCard};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::load_state::LoadState;
use contracts::dashboards::d400_alertas::{
    derive_alerts, Alerta, CollectionIndex, Collections, DashboardKpis, TipoAlerta,
};
use contracts::domain::a001_departamento::aggregate::Departamento;
use leptos::prelude::*;

fn alerta_icon(tipo: TipoAlerta) -> &'static str {
    match tipo {
        TipoAlerta::Mora => "cash",
        TipoAlerta::Vence => "clock",
        TipoAlerta::Error => "alert",
        TipoAlerta::Info => "trending-up",
    }
}

fn alerta_class(tipo: TipoAlerta) -> String {
    format!("alert-item alert-item--{}", tipo.as_str().to_lowercase())
}

/// Each departamento with the tenant of its active contract, if any
pub fn departamentos_con_inquilino(data: &Collections) -> Vec<(Departamento, Option<String>)> {
    let index = CollectionIndex::build(data);
    data.departamentos
        .iter()
        .map(|d| {
            let inquilino = data
                .contratos
                .iter()
                .find(|c| c.departamento_id == d.id && c.is_activo())
                .and_then(|c| index.inquilino(c.inquilino_id))
                .map(|i| i.nombre_apellido.clone());
            (d.clone(), inquilino)
        })
        .collect()
}

#[component]
pub fn AlertasDashboard() -> impl IntoView {
    let data = RwSignal::new(Collections::default());
    let (state, set_state) = signal(LoadState::Loading);

    // Full reload; alerts and counts are always rederived from the fresh snapshot.
    let reload = move || {
        set_state.set(LoadState::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            match api::load_collections().await {
                Ok(collections) => {
                    data.set(collections);
                    set_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("dashboard load failed: {}", e);
                    set_state.set(LoadState::Error(e.user_message()));
                }
            }
        });
    };

    let alertas = Memo::new(move |_| data.with(|d| derive_alerts(d, today())));
    let kpis = Memo::new(move |_| data.with(|d| DashboardKpis::compute(d, today())));

    reload();

    view! {
        <div class="page dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Dashboard"}</h1>
                    <p class="header__subtitle">{"Resumen general y alertas"}</p>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| reload()>
                        {icon("refresh")}
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            {move || match state.get() {
                LoadState::Loading => view! {
                    <div class="empty-state">{"Cargando datos..."}</div>
                }.into_any(),
                LoadState::Error(msg) => view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">
                            {format!("No se pudieron cargar los datos: {}", msg)}
                        </span>
                        <button class="button button--secondary" on:click=move |_| reload()>
                            {icon("refresh")}
                            {"Reintentar"}
                        </button>
                    </div>
                }.into_any(),
                LoadState::Ready => view! {
                    <div class="stat-grid">
                        <StatCard
                            label="Departamentos"
                            icon_name="building"
                            value=Signal::derive(move || kpis.get().departamentos.to_string())
                            subtitle=Signal::derive(move || Some(format!("{} alquilados", kpis.get().alquilados)))
                        />
                        <StatCard
                            label="Pagos cobrados"
                            icon_name="cash"
                            value=Signal::derive(move || {
                                let k = kpis.get();
                                format!("{} / {}", k.pagos_cobrados, k.pagos_total)
                            })
                            tone=StatTone::Good
                        />
                        <StatCard
                            label="Contratos activos"
                            icon_name="file-text"
                            value=Signal::derive(move || kpis.get().contratos_activos.to_string())
                        />
                        <StatCard
                            label="Ajustes próximos"
                            icon_name="trending-up"
                            value=Signal::derive(move || kpis.get().ajustes_proximos.to_string())
                            tone=Signal::derive(move || {
                                if kpis.get().ajustes_proximos > 0 { StatTone::Warning } else { StatTone::Neutral }
                            })
                        />
                    </div>

                    <div class="dashboard__grid">
                        <section class="card">
                            <h2 class="card__title">
                                {icon("alert")}
                                {move || format!("Alertas ({})", alertas.with(Vec::len))}
                            </h2>
                            <AlertaList alertas=alertas/>
                        </section>

                        <section class="card">
                            <h2 class="card__title">{icon("building")}{"Estado de departamentos"}</h2>
                            <table class="table__data">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">{"Departamento"}</th>
                                        <th class="table__header-cell">{"Inquilino"}</th>
                                        <th class="table__header-cell">{"Estado"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || data.with(departamentos_con_inquilino).into_iter().map(|(d, inquilino)| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{d.alias}</td>
                                            <td class="table__cell">{inquilino.unwrap_or_else(|| "-".to_string())}</td>
                                            <td class="table__cell"><EstadoBadge estado=d.estado.as_str()/></td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </section>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn AlertaList(alertas: Memo<Vec<Alerta>>) -> impl IntoView {
    view! {
        <Show
            when=move || alertas.with(|a| !a.is_empty())
            fallback=|| view! {
                <div class="empty-state">{icon("info")}{"Sin alertas. Todo en orden."}</div>
            }
        >
            <ul class="alert-list">
                <For
                    each=move || alertas.get()
                    key=|a| a.id.clone()
                    children=|a: Alerta| view! {
                        <li class=alerta_class(a.tipo)>
                            <span class="alert-item__icon">{icon(alerta_icon(a.tipo))}</span>
                            <div class="alert-item__body">
                                <span class="alert-item__tipo">{a.tipo.as_str()}</span>
                                <span class="alert-item__mensaje">{a.mensaje}</span>
                                {a.inquilino.map(|i| view! { <span class="alert-item__inquilino">{i}</span> })}
                            </div>
                            <span class="alert-item__fecha">{a.fecha.to_string()}</span>
                        </li>
                    }
                />
            </ul>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_departamento::aggregate::EstadoDepartamento;
    use contracts::domain::a002_inquilino::aggregate::{EstadoInquilino, Inquilino};
    use contracts::domain::a003_contrato::aggregate::{Contrato, EstadoContrato};
    use rust_decimal::Decimal;

    fn depto(id: i64, alias: &str) -> Departamento {
        Departamento {
            id,
            alias: alias.into(),
            direccion: "-".into(),
            tipo: "DEPARTAMENTO".into(),
            estado: EstadoDepartamento::Alquilado,
            fecha_estado_desde: None,
            notas: None,
        }
    }

    fn contrato(id: i64, departamento_id: i64, estado: EstadoContrato) -> Contrato {
        Contrato {
            id,
            departamento_id,
            inquilino_id: 5,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            fecha_fin: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            monto_inicial: Decimal::from(150_000),
            deposito_garantia: None,
            contrato_firmado_url: None,
            proxima_actualizacion: None,
            porcentaje_actualizacion: None,
            estado,
        }
    }

    #[test]
    fn test_departamentos_con_inquilino_uses_active_contract() {
        let data = Collections {
            departamentos: vec![depto(1, "A"), depto(2, "B")],
            inquilinos: vec![Inquilino {
                id: 5,
                nombre_apellido: "Ana Ruiz".into(),
                dni_cuit: None,
                telefono: None,
                email: None,
                canal_comunicacion: None,
                estado: EstadoInquilino::Activo,
            }],
            contratos: vec![
                contrato(1, 1, EstadoContrato::Activo),
                contrato(2, 2, EstadoContrato::Rescindido),
            ],
            pagos: vec![],
        };
        let rows = departamentos_con_inquilino(&data);
        assert_eq!(rows[0].1.as_deref(), Some("Ana Ruiz"));
        assert_eq!(rows[1].1, None);
    }

    #[test]
    fn test_alerta_class() {
        assert_eq!(alerta_class(TipoAlerta::Vence), "alert-item alert-item--vence");
    }
}
