use super::derive::{in_window, INFO_WINDOW_DAYS};
use super::dto::Collections;
use crate::domain::a001_departamento::aggregate::EstadoDepartamento;
use crate::domain::a004_pago::aggregate::EstadoPago;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline counts for the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub departamentos: usize,
    pub alquilados: usize,
    pub pagos_cobrados: usize,
    pub pagos_total: usize,
    pub contratos_activos: usize,
    /// Active contracts with an increase due inside the INFO window
    pub ajustes_proximos: usize,
}

impl DashboardKpis {
    pub fn compute(data: &Collections, today: NaiveDate) -> Self {
        Self {
            departamentos: data.departamentos.len(),
            alquilados: data
                .departamentos
                .iter()
                .filter(|d| d.estado == EstadoDepartamento::Alquilado)
                .count(),
            pagos_cobrados: data
                .pagos
                .iter()
                .filter(|p| p.estado == EstadoPago::Cobrado)
                .count(),
            pagos_total: data.pagos.len(),
            contratos_activos: data.contratos.iter().filter(|c| c.is_activo()).count(),
            ajustes_proximos: data
                .contratos
                .iter()
                .filter(|c| c.is_activo())
                .filter_map(|c| c.proxima_actualizacion)
                .filter(|f| in_window(*f, today, INFO_WINDOW_DAYS))
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_alertas::{derive_alerts, TipoAlerta};

    #[test]
    fn test_empty() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(
            DashboardKpis::compute(&Collections::default(), today),
            DashboardKpis::default()
        );
    }

    #[test]
    fn test_counts_match_api_payload() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let data: Collections = serde_json::from_value(serde_json::json!({
            "departamentos": [
                {"id": 1, "alias": "Dpto 3B", "direccion": "Av. Corrientes 1234", "estado": "ALQUILADO"},
                {"id": 2, "alias": "Dpto 5A", "direccion": "Av. Santa Fe 5678", "estado": "VACIO"},
                {"id": 3, "alias": "Dpto 1C", "direccion": "Av. Libertador 9012", "estado": "REFACCION"}
            ],
            "inquilinos": [],
            "contratos": [
                {"id": 1, "departamento_id": 1, "inquilino_id": 1,
                 "fecha_inicio": "2024-01-01", "fecha_fin": "2026-01-01",
                 "monto_inicial": "100000.00", "proxima_actualizacion": "2025-07-01",
                 "porcentaje_actualizacion": "12.5", "estado": "ACTIVO"},
                {"id": 2, "departamento_id": 2, "inquilino_id": 2,
                 "fecha_inicio": "2022-01-01", "fecha_fin": "2024-01-01",
                 "monto_inicial": "80000.00", "proxima_actualizacion": "2025-07-01",
                 "estado": "VENCIDO"}
            ],
            "pagos": [
                {"id": 1, "contrato_id": 1, "periodo": "2025-05", "monto_alquiler": "100000",
                 "estado": "COBRADO"},
                {"id": 2, "contrato_id": 1, "periodo": "2025-06", "monto_alquiler": "100000",
                 "estado": "PENDIENTE"}
            ]
        }))
        .unwrap();

        let kpis = DashboardKpis::compute(&data, today);
        assert_eq!(kpis.departamentos, 3);
        assert_eq!(kpis.alquilados, 1);
        assert_eq!(kpis.pagos_cobrados, 1);
        assert_eq!(kpis.pagos_total, 2);
        assert_eq!(kpis.contratos_activos, 1);
        assert_eq!(kpis.ajustes_proximos, 1);

        let info = derive_alerts(&data, today)
            .into_iter()
            .filter(|a| a.tipo == TipoAlerta::Info)
            .count();
        assert_eq!(info, kpis.ajustes_proximos);
    }

    #[test]
    fn test_ajustes_proximos_follow_info_window() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let contrato = |id: i64, offset: i64| {
            serde_json::json!({
                "id": id, "departamento_id": id, "inquilino_id": id,
                "fecha_inicio": "2024-01-01", "fecha_fin": "2027-01-01",
                "monto_inicial": "100000",
                "proxima_actualizacion": (today + chrono::Duration::days(offset)).to_string(),
                "porcentaje_actualizacion": "10", "estado": "ACTIVO"
            })
        };
        let data: Collections = serde_json::from_value(serde_json::json!({
            "departamentos": [], "inquilinos": [], "pagos": [],
            "contratos": [
                contrato(1, 0),
                contrato(2, 1),
                contrato(3, INFO_WINDOW_DAYS),
                contrato(4, INFO_WINDOW_DAYS + 1)
            ]
        }))
        .unwrap();

        let kpis = DashboardKpis::compute(&data, today);
        assert_eq!(kpis.ajustes_proximos, 2);
        let info = derive_alerts(&data, today)
            .into_iter()
            .filter(|a| a.tipo == TipoAlerta::Info)
            .count();
        assert_eq!(info, kpis.ajustes_proximos);
    }
}
