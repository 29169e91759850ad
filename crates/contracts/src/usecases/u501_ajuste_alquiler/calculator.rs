use crate::domain::a003_contrato::aggregate::{Contrato, ContratoPayload};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoAjuste {
    /// Percentage over the base amount (IPC and similar indexes)
    #[default]
    Porcentaje,
    /// Fixed amount added to the base
    Fijo,
}

impl TipoAjuste {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Porcentaje => "Porcentaje / IPC",
            Self::Fijo => "Monto fijo",
        }
    }
}

/// Result of an adjustment: the new rent and the increase over the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ajuste {
    pub nuevo_monto: Decimal,
    pub diferencia: Decimal,
}

impl Ajuste {
    /// Increase expressed as a percentage of `base`; `None` for a zero base or when the
    /// ratio does not fit in a `Decimal`.
    pub fn porcentaje_efectivo(&self, base: Decimal) -> Option<Decimal> {
        self.diferencia
            .checked_div(base)?
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|p| p.round_dp(1))
    }
}

/// Apply an adjustment to `base`.
///
/// - `Porcentaje`: diferencia = base × value / 100
/// - `Fijo`: diferencia = value
///
/// A missing base or value means "no result", not zero. So does an amount too large to
/// represent: input comes straight from the form on every keystroke.
pub fn compute_adjustment(
    base: Option<Decimal>,
    tipo: TipoAjuste,
    value: Option<Decimal>,
) -> Option<Ajuste> {
    let base = base?;
    let value = value?;
    let diferencia = match tipo {
        TipoAjuste::Porcentaje => base.checked_mul(value)?.checked_div(Decimal::ONE_HUNDRED)?,
        TipoAjuste::Fijo => value,
    };
    Some(Ajuste {
        nuevo_monto: base.checked_add(diferencia)?,
        diferencia,
    })
}

/// Full-replacement update body for `PUT /contratos/{id}` carrying the adjusted rent.
///
/// Read-modify-write over the last fetched snapshot: there is no version check, a
/// concurrent edit of the same contract is overwritten.
pub fn aplicar_ajuste(contrato: &Contrato, ajuste: &Ajuste) -> ContratoPayload {
    ContratoPayload::from(&contrato.with_monto_inicial(ajuste.nuevo_monto))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_contrato::aggregate::EstadoContrato;
    use crate::domain::common::parse_amount;
    use chrono::NaiveDate;

    fn dec(v: i64) -> Option<Decimal> {
        Some(Decimal::from(v))
    }

    #[test]
    fn test_percentage() {
        assert_eq!(
            compute_adjustment(dec(100_000), TipoAjuste::Porcentaje, dec(10)),
            Some(Ajuste {
                nuevo_monto: Decimal::from(110_000),
                diferencia: Decimal::from(10_000),
            })
        );
    }

    #[test]
    fn test_fixed() {
        assert_eq!(
            compute_adjustment(dec(100_000), TipoAjuste::Fijo, dec(5_000)),
            Some(Ajuste {
                nuevo_monto: Decimal::from(105_000),
                diferencia: Decimal::from(5_000),
            })
        );
    }

    #[test]
    fn test_fractional_percentage() {
        let a = compute_adjustment(dec(85_000), TipoAjuste::Porcentaje, Some(Decimal::new(155, 1)))
            .unwrap();
        assert_eq!(a.diferencia, Decimal::new(1_317_500, 2));
        assert_eq!(a.nuevo_monto, Decimal::new(9_817_500, 2));
    }

    #[test]
    fn test_missing_inputs_yield_no_result() {
        assert_eq!(compute_adjustment(dec(100_000), TipoAjuste::Porcentaje, None), None);
        assert_eq!(compute_adjustment(dec(100_000), TipoAjuste::Fijo, None), None);
        assert_eq!(compute_adjustment(None, TipoAjuste::Fijo, dec(5_000)), None);
    }

    #[test]
    fn test_overflowing_inputs_yield_no_result() {
        let huge = parse_amount("79228162514264337593543950335");
        let mil = parse_amount("1000");
        assert_eq!(compute_adjustment(huge, TipoAjuste::Porcentaje, mil), None);
        assert_eq!(compute_adjustment(huge, TipoAjuste::Fijo, mil), None);
        assert_eq!(compute_adjustment(mil, TipoAjuste::Porcentaje, huge), None);

        let ajuste = Ajuste {
            nuevo_monto: Decimal::MAX,
            diferencia: Decimal::MAX,
        };
        assert_eq!(ajuste.porcentaje_efectivo(Decimal::ONE), None);
    }

    #[test]
    fn test_zero_value_is_a_result() {
        let a = compute_adjustment(dec(100_000), TipoAjuste::Porcentaje, dec(0)).unwrap();
        assert_eq!(a.nuevo_monto, Decimal::from(100_000));
        assert!(a.diferencia.is_zero());
    }

    #[test]
    fn test_effective_percentage() {
        let a = compute_adjustment(dec(80_000), TipoAjuste::Fijo, dec(10_000)).unwrap();
        assert_eq!(a.porcentaje_efectivo(Decimal::from(80_000)), Some(Decimal::new(125, 1)));
        assert_eq!(a.porcentaje_efectivo(Decimal::ZERO), None);
    }

    #[test]
    fn test_aplicar_ajuste_replaces_only_monto() {
        let contrato = Contrato {
            id: 3,
            departamento_id: 10,
            inquilino_id: 20,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            fecha_fin: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            monto_inicial: Decimal::from(100_000),
            deposito_garantia: None,
            contrato_firmado_url: Some("https://docs/contrato-3.pdf".into()),
            proxima_actualizacion: NaiveDate::from_ymd_opt(2025, 7, 1),
            porcentaje_actualizacion: Some(Decimal::from(10)),
            estado: EstadoContrato::Activo,
        };
        let ajuste = compute_adjustment(dec(100_000), TipoAjuste::Porcentaje, dec(10)).unwrap();
        let payload = aplicar_ajuste(&contrato, &ajuste);
        assert_eq!(payload.monto_inicial, Decimal::from(110_000));
        assert_eq!(payload.departamento_id, 10);
        assert_eq!(payload.contrato_firmado_url.as_deref(), Some("https://docs/contrato-3.pdf"));
        assert_eq!(payload.proxima_actualizacion, contrato.proxima_actualizacion);
    }
}
