use crate::domain::common::{non_empty, parse_amount, parse_date, AggregateRoot, EntityId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoContrato {
    #[default]
    Activo,
    Vencido,
    Rescindido,
}

impl EstadoContrato {
    pub const ALL: [EstadoContrato; 3] = [Self::Activo, Self::Vencido, Self::Rescindido];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activo => "ACTIVO",
            Self::Vencido => "VENCIDO",
            Self::Rescindido => "RESCINDIDO",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Contrato de alquiler: vincula un departamento con un inquilino por un rango de fechas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contrato {
    pub id: EntityId,
    pub departamento_id: EntityId,
    pub inquilino_id: EntityId,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub monto_inicial: Decimal,
    #[serde(default)]
    pub deposito_garantia: Option<Decimal>,
    #[serde(default)]
    pub contrato_firmado_url: Option<String>,
    #[serde(default)]
    pub proxima_actualizacion: Option<NaiveDate>,
    #[serde(default)]
    pub porcentaje_actualizacion: Option<Decimal>,
    pub estado: EstadoContrato,
}

impl Contrato {
    pub fn is_activo(&self) -> bool {
        self.estado == EstadoContrato::Activo
    }

    /// Copy of the contract with a new base rent; every other field is preserved.
    pub fn with_monto_inicial(&self, monto: Decimal) -> Contrato {
        Contrato {
            monto_inicial: monto,
            ..self.clone()
        }
    }
}

impl AggregateRoot for Contrato {
    fn id(&self) -> EntityId {
        self.id
    }

    fn description(&self) -> String {
        format!("Contrato #{}", self.id)
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "contratos"
    }

    fn element_name() -> &'static str {
        "Contrato"
    }

    fn list_name() -> &'static str {
        "Contratos"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// JSON body for `POST /contratos` and the full-replacement `PUT /contratos/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContratoPayload {
    pub departamento_id: EntityId,
    pub inquilino_id: EntityId,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub monto_inicial: Decimal,
    pub deposito_garantia: Option<Decimal>,
    pub contrato_firmado_url: Option<String>,
    pub proxima_actualizacion: Option<NaiveDate>,
    pub porcentaje_actualizacion: Option<Decimal>,
    pub estado: EstadoContrato,
}

impl From<&Contrato> for ContratoPayload {
    fn from(c: &Contrato) -> Self {
        Self {
            departamento_id: c.departamento_id,
            inquilino_id: c.inquilino_id,
            fecha_inicio: c.fecha_inicio,
            fecha_fin: c.fecha_fin,
            monto_inicial: c.monto_inicial,
            deposito_garantia: c.deposito_garantia,
            contrato_firmado_url: c.contrato_firmado_url.clone(),
            proxima_actualizacion: c.proxima_actualizacion,
            porcentaje_actualizacion: c.porcentaje_actualizacion,
            estado: c.estado,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContratoDto {
    pub id: Option<EntityId>,
    pub departamento_id: Option<EntityId>,
    pub inquilino_id: Option<EntityId>,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub monto_inicial: String,
    pub deposito_garantia: String,
    pub contrato_firmado_url: String,
    pub proxima_actualizacion: String,
    pub porcentaje_actualizacion: String,
    pub estado: EstadoContrato,
}

fn date_input(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn amount_input(a: Option<Decimal>) -> String {
    a.map(|a| a.normalize().to_string()).unwrap_or_default()
}

/// Optional numeric input: empty is fine, garbage is not.
fn optional_amount(input: &str, field: &str) -> Result<Option<Decimal>, String> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(input)
        .map(Some)
        .ok_or_else(|| format!("{} no es un número válido", field))
}

impl ContratoDto {
    pub fn from_aggregate(c: &Contrato) -> Self {
        Self {
            id: Some(c.id),
            departamento_id: Some(c.departamento_id),
            inquilino_id: Some(c.inquilino_id),
            fecha_inicio: date_input(Some(c.fecha_inicio)),
            fecha_fin: date_input(Some(c.fecha_fin)),
            monto_inicial: amount_input(Some(c.monto_inicial)),
            deposito_garantia: amount_input(c.deposito_garantia),
            contrato_firmado_url: c.contrato_firmado_url.clone().unwrap_or_default(),
            proxima_actualizacion: date_input(c.proxima_actualizacion),
            porcentaje_actualizacion: amount_input(c.porcentaje_actualizacion),
            estado: c.estado,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_payload().map(|_| ())
    }

    pub fn to_payload(&self) -> Result<ContratoPayload, String> {
        let departamento_id = self
            .departamento_id
            .ok_or_else(|| "Seleccione un departamento".to_string())?;
        let inquilino_id = self
            .inquilino_id
            .ok_or_else(|| "Seleccione un inquilino".to_string())?;
        let fecha_inicio =
            parse_date(&self.fecha_inicio).ok_or_else(|| "Fecha de inicio inválida".to_string())?;
        let fecha_fin =
            parse_date(&self.fecha_fin).ok_or_else(|| "Fecha de fin inválida".to_string())?;
        if fecha_fin <= fecha_inicio {
            return Err("La fecha de fin debe ser posterior a la de inicio".into());
        }
        let monto_inicial = parse_amount(&self.monto_inicial)
            .ok_or_else(|| "El monto del alquiler es obligatorio".to_string())?;
        if monto_inicial <= Decimal::ZERO {
            return Err("El monto del alquiler debe ser mayor a cero".into());
        }
        let proxima_actualizacion = if self.proxima_actualizacion.trim().is_empty() {
            None
        } else {
            Some(
                parse_date(&self.proxima_actualizacion)
                    .ok_or_else(|| "Fecha de próxima actualización inválida".to_string())?,
            )
        };

        Ok(ContratoPayload {
            departamento_id,
            inquilino_id,
            fecha_inicio,
            fecha_fin,
            monto_inicial,
            deposito_garantia: optional_amount(&self.deposito_garantia, "El depósito")?,
            contrato_firmado_url: non_empty(&self.contrato_firmado_url),
            proxima_actualizacion,
            porcentaje_actualizacion: optional_amount(
                &self.porcentaje_actualizacion,
                "El porcentaje de actualización",
            )?,
            estado: self.estado,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contrato {
        Contrato {
            id: 4,
            departamento_id: 1,
            inquilino_id: 2,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            fecha_fin: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            monto_inicial: Decimal::from(100_000),
            deposito_garantia: Some(Decimal::from(200_000)),
            contrato_firmado_url: None,
            proxima_actualizacion: NaiveDate::from_ymd_opt(2025, 9, 1),
            porcentaje_actualizacion: Some(Decimal::new(155, 1)),
            estado: EstadoContrato::Activo,
        }
    }

    #[test]
    fn test_decimal_fields_accept_strings_and_numbers() {
        let json = r#"{
            "id": 4, "departamento_id": 1, "inquilino_id": 2,
            "fecha_inicio": "2024-03-01", "fecha_fin": "2026-03-01",
            "monto_inicial": "100000.00", "deposito_garantia": 200000,
            "proxima_actualizacion": null, "porcentaje_actualizacion": 15.5,
            "estado": "ACTIVO"
        }"#;
        let c: Contrato = serde_json::from_str(json).unwrap();
        assert_eq!(c.monto_inicial, Decimal::from(100_000));
        assert_eq!(c.deposito_garantia, Some(Decimal::from(200_000)));
        assert_eq!(c.porcentaje_actualizacion, Some(Decimal::new(155, 1)));
        assert_eq!(c.proxima_actualizacion, None);
    }

    #[test]
    fn test_with_monto_inicial_preserves_other_fields() {
        let c = sample();
        let updated = c.with_monto_inicial(Decimal::from(110_000));
        assert_eq!(updated.monto_inicial, Decimal::from(110_000));
        assert_eq!(
            ContratoPayload::from(&updated),
            ContratoPayload {
                monto_inicial: Decimal::from(110_000),
                ..ContratoPayload::from(&c)
            }
        );
    }

    #[test]
    fn test_dto_roundtrip() {
        let c = sample();
        let dto = ContratoDto::from_aggregate(&c);
        assert_eq!(dto.monto_inicial, "100000");
        assert_eq!(dto.porcentaje_actualizacion, "15.5");
        assert_eq!(dto.to_payload().unwrap(), ContratoPayload::from(&c));
    }

    #[test]
    fn test_fecha_fin_must_follow_inicio() {
        let mut dto = ContratoDto::from_aggregate(&sample());
        dto.fecha_fin = dto.fecha_inicio.clone();
        assert_eq!(
            dto.validate(),
            Err("La fecha de fin debe ser posterior a la de inicio".to_string())
        );
    }

    #[test]
    fn test_required_selections_and_amounts() {
        let mut dto = ContratoDto::from_aggregate(&sample());
        dto.inquilino_id = None;
        assert!(dto.validate().is_err());

        let mut dto = ContratoDto::from_aggregate(&sample());
        dto.monto_inicial = "0".into();
        assert!(dto.validate().is_err());

        let mut dto = ContratoDto::from_aggregate(&sample());
        dto.deposito_garantia = "mucho".into();
        assert!(dto.validate().is_err());

        let mut dto = ContratoDto::from_aggregate(&sample());
        dto.deposito_garantia.clear();
        dto.porcentaje_actualizacion.clear();
        dto.proxima_actualizacion.clear();
        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.deposito_garantia, None);
        assert_eq!(payload.proxima_actualizacion, None);
    }
}
