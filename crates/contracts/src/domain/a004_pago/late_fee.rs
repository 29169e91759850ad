//! Estimated late fee (mora) for pending payments.
//!
//! A period `YYYY-MM` falls due on day [`DIA_VENCIMIENTO`] of that month. Past that date the
//! fee accrues daily at [`TASA_DIARIA_MORA`] over the payment total. The estimate is shown
//! next to the payment and never persisted by the client.

use super::aggregate::{EstadoPago, Pago};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub const DIA_VENCIMIENTO: u32 = 10;

/// 0.5% per day late
pub const TASA_DIARIA_MORA: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// Due date of a `YYYY-MM` period.
pub fn fecha_vencimiento(periodo: &str) -> Option<NaiveDate> {
    let (year, month) = periodo.trim().split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, DIA_VENCIMIENTO)
}

/// Fee owed as of `today`, or `None` when the payment is not pending, not yet due,
/// or its period cannot be parsed.
pub fn late_fee(pago: &Pago, today: NaiveDate) -> Option<Decimal> {
    if pago.estado != EstadoPago::Pendiente {
        return None;
    }
    let vencimiento = fecha_vencimiento(&pago.periodo)?;
    if today <= vencimiento {
        return None;
    }
    let dias = Decimal::from((today - vencimiento).num_days());
    let fee = (pago.total() * TASA_DIARIA_MORA * dias)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    (fee > Decimal::ZERO).then_some(fee)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pendiente(periodo: &str) -> Pago {
        Pago {
            id: 1,
            contrato_id: 1,
            periodo: periodo.into(),
            monto_alquiler: Decimal::from(100_000),
            monto_expensas: Decimal::from(20_000),
            monto_servicios: Decimal::ZERO,
            fecha_pago: None,
            estado: EstadoPago::Pendiente,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_rate_constant() {
        assert_eq!(TASA_DIARIA_MORA, Decimal::new(5, 3));
    }

    #[test]
    fn test_no_fee_until_due_day() {
        let p = pendiente("2025-03");
        assert_eq!(late_fee(&p, d(2025, 3, 1)), None);
        assert_eq!(late_fee(&p, d(2025, 3, 10)), None);
    }

    #[test]
    fn test_fee_accrues_per_day() {
        let p = pendiente("2025-03");
        // 120000 * 0.005 * 5
        assert_eq!(late_fee(&p, d(2025, 3, 15)), Some(Decimal::from(3_000)));
    }

    #[test]
    fn test_only_pending_with_valid_period() {
        let mut p = pendiente("2025-03");
        p.estado = EstadoPago::Cobrado;
        assert_eq!(late_fee(&p, d(2025, 4, 1)), None);
        assert_eq!(late_fee(&pendiente("Marzo 2025"), d(2025, 4, 1)), None);
        assert_eq!(late_fee(&pendiente("2025-13"), d(2026, 4, 1)), None);
    }
}
