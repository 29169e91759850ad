use crate::domain::common::{parse_amount, parse_date, AggregateRoot, EntityId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoPago {
    #[default]
    Pendiente,
    Cobrado,
    Parcial,
}

impl EstadoPago {
    pub const ALL: [EstadoPago; 3] = [Self::Pendiente, Self::Cobrado, Self::Parcial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Cobrado => "COBRADO",
            Self::Parcial => "PARCIAL",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

/// Pago de un período contra un contrato: alquiler, expensas y servicios por separado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pago {
    pub id: EntityId,
    pub contrato_id: EntityId,
    /// Free-text label, conventionally `YYYY-MM`
    pub periodo: String,
    pub monto_alquiler: Decimal,
    #[serde(default)]
    pub monto_expensas: Decimal,
    #[serde(default)]
    pub monto_servicios: Decimal,
    #[serde(default)]
    pub fecha_pago: Option<NaiveDate>,
    pub estado: EstadoPago,
}

impl Pago {
    /// alquiler + expensas + servicios
    pub fn total(&self) -> Decimal {
        self.monto_alquiler + self.monto_expensas + self.monto_servicios
    }
}

impl AggregateRoot for Pago {
    fn id(&self) -> EntityId {
        self.id
    }

    fn description(&self) -> String {
        format!("Pago {} (contrato #{})", self.periodo, self.contrato_id)
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "pagos"
    }

    fn element_name() -> &'static str {
        "Pago"
    }

    fn list_name() -> &'static str {
        "Pagos"
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Totals shown above the payments list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagoResumen {
    /// Sum of all components over COBRADO payments
    pub total_cobrado: Decimal,
    pub pendientes: usize,
}

impl PagoResumen {
    pub fn compute(pagos: &[Pago]) -> Self {
        pagos.iter().fold(Self::default(), |mut acc, p| {
            match p.estado {
                EstadoPago::Cobrado => acc.total_cobrado += p.total(),
                EstadoPago::Pendiente => acc.pendientes += 1,
                EstadoPago::Parcial => {}
            }
            acc
        })
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagoDto {
    pub contrato_id: Option<EntityId>,
    pub periodo: String,
    pub monto_alquiler: String,
    pub monto_expensas: String,
    pub monto_servicios: String,
    pub fecha_pago: String,
    pub estado: EstadoPago,
}

/// JSON body for `POST /pagos`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagoPayload {
    pub contrato_id: EntityId,
    pub periodo: String,
    pub monto_alquiler: Decimal,
    pub monto_expensas: Decimal,
    pub monto_servicios: Decimal,
    pub fecha_pago: Option<NaiveDate>,
    pub estado: EstadoPago,
}

impl PagoDto {
    /// Empty form; payment date defaults to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            monto_expensas: "0".to_string(),
            monto_servicios: "0".to_string(),
            fecha_pago: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_payload().map(|_| ())
    }

    pub fn to_payload(&self) -> Result<PagoPayload, String> {
        let contrato_id = self
            .contrato_id
            .ok_or_else(|| "Seleccione un contrato".to_string())?;
        let periodo = self.periodo.trim();
        if periodo.is_empty() {
            return Err("El período es obligatorio".into());
        }
        let monto_alquiler = parse_amount(&self.monto_alquiler)
            .ok_or_else(|| "El monto de alquiler es obligatorio".to_string())?;
        // Empty secondary components count as zero, like the API defaults.
        let component = |input: &str, field: &str| -> Result<Decimal, String> {
            if input.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            parse_amount(input).ok_or_else(|| format!("{} no es un número válido", field))
        };

        Ok(PagoPayload {
            contrato_id,
            periodo: periodo.to_string(),
            monto_alquiler,
            monto_expensas: component(&self.monto_expensas, "Expensas")?,
            monto_servicios: component(&self.monto_servicios, "Servicios")?,
            fecha_pago: parse_date(&self.fecha_pago),
            estado: self.estado,
        })
    }
}
