use crate::domain::a001_departamento::aggregate::Departamento;
use crate::domain::a002_inquilino::aggregate::Inquilino;
use crate::domain::a003_contrato::aggregate::Contrato;
use crate::domain::a004_pago::aggregate::Pago;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Snapshot of the four collections fetched for one dashboard load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collections {
    pub departamentos: Vec<Departamento>,
    pub inquilinos: Vec<Inquilino>,
    pub contratos: Vec<Contrato>,
    pub pagos: Vec<Pago>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoAlerta {
    /// Pending payment
    Mora,
    /// Lease expiring soon
    Vence,
    /// Rented unit without an active contract
    Error,
    /// Upcoming rent increase
    Info,
}

impl TipoAlerta {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mora => "MORA",
            Self::Vence => "VENCE",
            Self::Error => "ERROR",
            Self::Info => "INFO",
        }
    }
}

/// Date shown on an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum AlertaFecha {
    Fecha(NaiveDate),
    /// Pending payment without a payment date
    Hoy,
    /// Inconsistencies have no date of their own
    RevisarAhora,
}

impl std::fmt::Display for AlertaFecha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fecha(d) => write!(f, "{}", d.format("%d/%m/%Y")),
            Self::Hoy => f.write_str("Hoy"),
            Self::RevisarAhora => f.write_str("Revisar ahora"),
        }
    }
}

/// Derived, never persisted notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alerta {
    /// Stable across recomputations: `<tipo>-<source record id>`
    pub id: String,
    pub tipo: TipoAlerta,
    pub mensaje: String,
    pub fecha: AlertaFecha,
    /// Tenant on the related contract, when it resolves
    pub inquilino: Option<String>,
}
