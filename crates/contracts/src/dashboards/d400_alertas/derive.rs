//! Alert deriver.
//!
//! Four independent rules evaluated over the same snapshot; their results are concatenated
//! in the order MORA, VENCE, ERROR, INFO. Nothing is deduplicated, ranked or remembered
//! between calls: the same snapshot and `today` always give the same list.
//!
//! Dates are compared as calendar dates (`NaiveDate`), never as instants, so a lease
//! ending on a given day is judged the same in every timezone.

use super::dto::{Alerta, AlertaFecha, Collections, TipoAlerta};
use super::index::CollectionIndex;
use crate::domain::a001_departamento::aggregate::EstadoDepartamento;
use crate::domain::a004_pago::aggregate::EstadoPago;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

/// Leases ending within this many days raise a VENCE alert
pub const VENCE_WINDOW_DAYS: i64 = 60;

/// Scheduled increases within this many days raise an INFO alert
pub const INFO_WINDOW_DAYS: i64 = 45;

/// `today < date <= today + days`
pub(crate) fn in_window(date: NaiveDate, today: NaiveDate, days: i64) -> bool {
    date > today && date <= today + Duration::days(days)
}

fn format_porcentaje(p: Decimal) -> String {
    format!("{}%", p.normalize())
}

pub fn derive_alerts(data: &Collections, today: NaiveDate) -> Vec<Alerta> {
    let index = CollectionIndex::build(data);
    let mut alertas = Vec::new();

    alertas.extend(alertas_mora(data, &index));
    alertas.extend(alertas_vencimiento(data, &index, today));
    alertas.extend(alertas_inconsistencia(data, &index));
    alertas.extend(alertas_aumento(data, &index, today));

    alertas
}

fn alertas_mora<'a>(
    data: &'a Collections,
    index: &'a CollectionIndex<'a>,
) -> impl Iterator<Item = Alerta> + 'a {
    data.pagos
        .iter()
        .filter(|p| p.estado == EstadoPago::Pendiente)
        .map(move |p| Alerta {
            id: format!("mora-{}", p.id),
            tipo: TipoAlerta::Mora,
            mensaje: format!(
                "Pago pendiente {} - {}",
                p.periodo,
                index.nombre_contrato(p.contrato_id)
            ),
            fecha: p.fecha_pago.map(AlertaFecha::Fecha).unwrap_or(AlertaFecha::Hoy),
            inquilino: index.inquilino_de_contrato(p.contrato_id),
        })
}

fn alertas_vencimiento<'a>(
    data: &'a Collections,
    index: &'a CollectionIndex<'a>,
    today: NaiveDate,
) -> impl Iterator<Item = Alerta> + 'a {
    data.contratos
        .iter()
        .filter(move |c| c.is_activo() && in_window(c.fecha_fin, today, VENCE_WINDOW_DAYS))
        .map(move |c| Alerta {
            id: format!("vence-{}", c.id),
            tipo: TipoAlerta::Vence,
            mensaje: format!("Contrato por vencer - {}", index.nombre_contrato(c.id)),
            fecha: AlertaFecha::Fecha(c.fecha_fin),
            inquilino: index.inquilino_de_contrato(c.id),
        })
}

fn alertas_inconsistencia<'a>(
    data: &'a Collections,
    index: &'a CollectionIndex<'a>,
) -> impl Iterator<Item = Alerta> + 'a {
    data.departamentos
        .iter()
        .filter(move |d| {
            d.estado == EstadoDepartamento::Alquilado && !index.has_contrato_activo(d.id)
        })
        .map(|d| Alerta {
            id: format!("error-{}", d.id),
            tipo: TipoAlerta::Error,
            mensaje: format!(
                "Inconsistencia: {} figura ALQUILADO sin contrato activo",
                d.alias
            ),
            fecha: AlertaFecha::RevisarAhora,
            inquilino: None,
        })
}

fn alertas_aumento<'a>(
    data: &'a Collections,
    index: &'a CollectionIndex<'a>,
    today: NaiveDate,
) -> impl Iterator<Item = Alerta> + 'a {
    data.contratos
        .iter()
        .filter(|c| c.is_activo())
        .filter_map(move |c| {
            let fecha = c.proxima_actualizacion?;
            if !in_window(fecha, today, INFO_WINDOW_DAYS) {
                return None;
            }
            let porcentaje = c
                .porcentaje_actualizacion
                .map(format_porcentaje)
                .unwrap_or_else(|| "% a definir".to_string());
            Some(Alerta {
                id: format!("info-{}", c.id),
                tipo: TipoAlerta::Info,
                mensaje: format!(
                    "Aumento próximo - {} ({})",
                    index.nombre_contrato(c.id),
                    porcentaje
                ),
                fecha: AlertaFecha::Fecha(fecha),
                inquilino: index.inquilino_de_contrato(c.id),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_departamento::aggregate::Departamento;
    use crate::domain::a002_inquilino::aggregate::{EstadoInquilino, Inquilino};
    use crate::domain::a003_contrato::aggregate::{Contrato, EstadoContrato};
    use crate::domain::a004_pago::aggregate::Pago;
    use crate::domain::common::EntityId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn days(n: i64) -> NaiveDate {
        today() + Duration::days(n)
    }

    fn departamento(id: EntityId, alias: &str, estado: EstadoDepartamento) -> Departamento {
        Departamento {
            id,
            alias: alias.into(),
            direccion: format!("Calle {}", id),
            tipo: "dpto".into(),
            estado,
            fecha_estado_desde: None,
            notas: None,
        }
    }

    fn inquilino(id: EntityId, nombre: &str) -> Inquilino {
        Inquilino {
            id,
            nombre_apellido: nombre.into(),
            dni_cuit: None,
            telefono: None,
            email: None,
            canal_comunicacion: None,
            estado: EstadoInquilino::Activo,
        }
    }

    fn contrato(id: EntityId, departamento_id: EntityId, fecha_fin: NaiveDate) -> Contrato {
        Contrato {
            id,
            departamento_id,
            inquilino_id: 1,
            fecha_inicio: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            fecha_fin,
            monto_inicial: Decimal::from(100_000),
            deposito_garantia: None,
            contrato_firmado_url: None,
            proxima_actualizacion: None,
            porcentaje_actualizacion: None,
            estado: EstadoContrato::Activo,
        }
    }

    fn pago(id: EntityId, contrato_id: EntityId, estado: EstadoPago) -> Pago {
        Pago {
            id,
            contrato_id,
            periodo: "2025-06".into(),
            monto_alquiler: Decimal::from(100_000),
            monto_expensas: Decimal::ZERO,
            monto_servicios: Decimal::ZERO,
            fecha_pago: None,
            estado,
        }
    }

    fn of_tipo(alertas: &[Alerta], tipo: TipoAlerta) -> Vec<&Alerta> {
        alertas.iter().filter(|a| a.tipo == tipo).collect()
    }

    #[test]
    fn test_mora_resolves_department_through_contract() {
        let data = Collections {
            departamentos: vec![departamento(1, "Dpto 3B", EstadoDepartamento::Alquilado)],
            inquilinos: vec![inquilino(1, "Juan Pérez")],
            contratos: vec![contrato(10, 1, days(400))],
            pagos: vec![
                pago(100, 10, EstadoPago::Pendiente),
                pago(101, 10, EstadoPago::Cobrado),
                pago(102, 10, EstadoPago::Parcial),
            ],
        };
        let alertas = derive_alerts(&data, today());
        let mora = of_tipo(&alertas, TipoAlerta::Mora);
        assert_eq!(mora.len(), 1);
        assert_eq!(mora[0].id, "mora-100");
        assert_eq!(mora[0].mensaje, "Pago pendiente 2025-06 - Dpto 3B");
        assert_eq!(mora[0].fecha, AlertaFecha::Hoy);
        assert_eq!(mora[0].inquilino.as_deref(), Some("Juan Pérez"));
    }

    #[test]
    fn test_mora_unresolved_contract_and_payment_date() {
        let mut p = pago(5, 77, EstadoPago::Pendiente);
        p.fecha_pago = Some(days(-3));
        let data = Collections {
            pagos: vec![p],
            ..Collections::default()
        };
        let alertas = derive_alerts(&data, today());
        assert_eq!(alertas.len(), 1);
        assert_eq!(alertas[0].mensaje, "Pago pendiente 2025-06 - Contrato #77");
        assert_eq!(alertas[0].fecha, AlertaFecha::Fecha(days(-3)));
        assert_eq!(alertas[0].inquilino, None);
    }

    #[test]
    fn test_one_mora_per_pending_payment() {
        let data = Collections {
            departamentos: vec![departamento(1, "Casa 2", EstadoDepartamento::Alquilado)],
            contratos: vec![contrato(10, 1, days(400))],
            pagos: (1..=4).map(|id| pago(id, 10, EstadoPago::Pendiente)).collect(),
            ..Collections::default()
        };
        let alertas = derive_alerts(&data, today());
        assert_eq!(of_tipo(&alertas, TipoAlerta::Mora).len(), 4);
    }

    #[test]
    fn test_vence_window_boundaries() {
        let data = Collections {
            departamentos: vec![
                departamento(1, "A", EstadoDepartamento::Alquilado),
                departamento(2, "B", EstadoDepartamento::Alquilado),
                departamento(3, "C", EstadoDepartamento::Alquilado),
                departamento(4, "D", EstadoDepartamento::Alquilado),
            ],
            contratos: vec![
                contrato(1, 1, days(60)),
                contrato(2, 2, days(61)),
                contrato(3, 3, today()),
                contrato(4, 4, days(1)),
            ],
            ..Collections::default()
        };
        let alertas = derive_alerts(&data, today());
        let vence: Vec<&str> = of_tipo(&alertas, TipoAlerta::Vence)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(vence, vec!["vence-1", "vence-4"]);
    }

    #[test]
    fn test_vence_only_for_active_contracts() {
        let mut vencido = contrato(1, 1, days(10));
        vencido.estado = EstadoContrato::Vencido;
        let mut rescindido = contrato(2, 1, days(10));
        rescindido.estado = EstadoContrato::Rescindido;
        let data = Collections {
            departamentos: vec![departamento(1, "A", EstadoDepartamento::Vacio)],
            contratos: vec![vencido, rescindido],
            ..Collections::default()
        };
        assert!(derive_alerts(&data, today()).is_empty());
    }

    #[test]
    fn test_error_for_rented_unit_without_active_contract() {
        let mut rescindido = contrato(2, 2, days(200));
        rescindido.estado = EstadoContrato::Rescindido;
        let data = Collections {
            departamentos: vec![
                departamento(1, "Con contrato", EstadoDepartamento::Alquilado),
                departamento(2, "Sin contrato activo", EstadoDepartamento::Alquilado),
                departamento(3, "Vacío", EstadoDepartamento::Vacio),
                departamento(4, "Sin nada", EstadoDepartamento::Alquilado),
            ],
            contratos: vec![contrato(1, 1, days(200)), rescindido],
            ..Collections::default()
        };
        let alertas = derive_alerts(&data, today());
        let error = of_tipo(&alertas, TipoAlerta::Error);
        assert_eq!(error.len(), 2);
        assert_eq!(error[0].id, "error-2");
        assert_eq!(
            error[0].mensaje,
            "Inconsistencia: Sin contrato activo figura ALQUILADO sin contrato activo"
        );
        assert_eq!(error[0].fecha, AlertaFecha::RevisarAhora);
        assert_eq!(error[1].id, "error-4");
    }

    #[test]
    fn test_info_window_boundaries() {
        let con_aumento = |id: EntityId, fecha: Option<NaiveDate>| {
            let mut c = contrato(id, 1, days(500));
            c.proxima_actualizacion = fecha;
            c.porcentaje_actualizacion = Some(Decimal::new(150, 1));
            c
        };
        let data = Collections {
            departamentos: vec![departamento(1, "Dpto 1C", EstadoDepartamento::Alquilado)],
            contratos: vec![
                con_aumento(1, Some(days(45))),
                con_aumento(2, Some(days(46))),
                con_aumento(3, Some(today())),
                con_aumento(4, None),
                con_aumento(5, Some(days(20))),
            ],
            ..Collections::default()
        };
        let alertas = derive_alerts(&data, today());
        let info = of_tipo(&alertas, TipoAlerta::Info);
        let ids: Vec<&str> = info.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["info-1", "info-5"]);
        assert_eq!(info[0].mensaje, "Aumento próximo - Dpto 1C (15%)");
        assert_eq!(info[0].fecha, AlertaFecha::Fecha(days(45)));
    }

    #[test]
    fn test_info_without_percentage() {
        let mut c = contrato(1, 1, days(500));
        c.proxima_actualizacion = Some(days(10));
        let data = Collections {
            departamentos: vec![departamento(1, "Dpto 5A", EstadoDepartamento::Alquilado)],
            contratos: vec![c],
            ..Collections::default()
        };
        let alertas = derive_alerts(&data, today());
        assert_eq!(alertas.len(), 1);
        assert_eq!(alertas[0].mensaje, "Aumento próximo - Dpto 5A (% a definir)");
    }

    #[test]
    fn test_idempotent() {
        let data = scenario();
        assert_eq!(derive_alerts(&data, today()), derive_alerts(&data, today()));
    }

    fn scenario() -> Collections {
        let mut vence = contrato(1, 1, days(30));
        vence.inquilino_id = 1;
        let mut aumento = contrato(2, 2, days(300));
        aumento.inquilino_id = 2;
        aumento.proxima_actualizacion = Some(days(20));
        aumento.porcentaje_actualizacion = Some(Decimal::from(8));
        Collections {
            departamentos: vec![
                departamento(1, "Dpto 3B", EstadoDepartamento::Alquilado),
                departamento(2, "Casa 2", EstadoDepartamento::Alquilado),
                departamento(3, "Dpto 1C", EstadoDepartamento::Alquilado),
            ],
            inquilinos: vec![inquilino(1, "Juan Pérez"), inquilino(2, "María García")],
            contratos: vec![vence, aumento],
            pagos: vec![pago(1, 2, EstadoPago::Pendiente), pago(2, 1, EstadoPago::Cobrado)],
        }
    }

    #[test]
    fn test_end_to_end_one_of_each_in_order() {
        let alertas = derive_alerts(&scenario(), today());
        let tipos: Vec<TipoAlerta> = alertas.iter().map(|a| a.tipo).collect();
        assert_eq!(
            tipos,
            vec![
                TipoAlerta::Mora,
                TipoAlerta::Vence,
                TipoAlerta::Error,
                TipoAlerta::Info
            ]
        );
        assert_eq!(alertas[0].mensaje, "Pago pendiente 2025-06 - Casa 2");
        assert_eq!(alertas[1].mensaje, "Contrato por vencer - Dpto 3B");
        assert_eq!(alertas[1].inquilino.as_deref(), Some("Juan Pérez"));
        assert_eq!(alertas[2].id, "error-3");
        assert_eq!(alertas[3].mensaje, "Aumento próximo - Casa 2 (8%)");
    }

    #[test]
    fn test_alerta_fecha_display() {
        assert_eq!(AlertaFecha::Fecha(today()).to_string(), "15/06/2025");
        assert_eq!(AlertaFecha::Hoy.to_string(), "Hoy");
        assert_eq!(AlertaFecha::RevisarAhora.to_string(), "Revisar ahora");
    }
}
