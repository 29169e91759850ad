use crate::domain::common::{non_empty, AggregateRoot, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Estado
// ============================================================================

/// Estado del departamento. Label set by the user, never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoDepartamento {
    #[default]
    Vacio,
    Alquilado,
    Refaccion,
}

impl EstadoDepartamento {
    pub const ALL: [EstadoDepartamento; 3] = [Self::Vacio, Self::Alquilado, Self::Refaccion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vacio => "VACIO",
            Self::Alquilado => "ALQUILADO",
            Self::Refaccion => "REFACCION",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Unidad alquilable (departamento, casa, cochera, local)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departamento {
    pub id: EntityId,
    pub alias: String,
    pub direccion: String,
    #[serde(default)]
    pub tipo: String,
    pub estado: EstadoDepartamento,
    #[serde(default)]
    pub fecha_estado_desde: Option<NaiveDate>,
    #[serde(default)]
    pub notas: Option<String>,
}

impl AggregateRoot for Departamento {
    fn id(&self) -> EntityId {
        self.id
    }

    fn description(&self) -> String {
        self.alias.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "departamentos"
    }

    fn element_name() -> &'static str {
        "Departamento"
    }

    fn list_name() -> &'static str {
        "Departamentos"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Form state for create/edit. All inputs are kept as entered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DepartamentoDto {
    pub id: Option<EntityId>,
    pub alias: String,
    pub direccion: String,
    pub tipo: String,
    pub estado: EstadoDepartamento,
    pub fecha_estado_desde: String,
    pub notas: String,
}

/// JSON body for `POST /departamentos` and `PUT /departamentos/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartamentoPayload {
    pub alias: String,
    pub direccion: String,
    pub tipo: String,
    pub estado: EstadoDepartamento,
    pub fecha_estado_desde: Option<NaiveDate>,
    pub notas: Option<String>,
}

impl DepartamentoDto {
    pub fn new() -> Self {
        Self {
            tipo: "DEPARTAMENTO".to_string(),
            ..Self::default()
        }
    }

    /// Форма редактирования из существующей записи
    pub fn from_aggregate(d: &Departamento) -> Self {
        Self {
            id: Some(d.id),
            alias: d.alias.clone(),
            direccion: d.direccion.clone(),
            tipo: d.tipo.clone(),
            estado: d.estado,
            fecha_estado_desde: d
                .fecha_estado_desde
                .map(|f| f.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            notas: d.notas.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.alias.trim().is_empty() {
            return Err("El alias es obligatorio".into());
        }
        if self.direccion.trim().is_empty() {
            return Err("La dirección es obligatoria".into());
        }
        Ok(())
    }

    /// Validate and convert to the API payload.
    pub fn to_payload(&self) -> Result<DepartamentoPayload, String> {
        self.validate()?;
        Ok(DepartamentoPayload {
            alias: self.alias.trim().to_string(),
            direccion: self.direccion.trim().to_string(),
            tipo: self.tipo.trim().to_string(),
            estado: self.estado,
            fecha_estado_desde: crate::domain::common::parse_date(&self.fecha_estado_desde),
            notas: non_empty(&self.notas),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_api() {
        let json = r#"{
            "id": 3,
            "alias": "Dpto 3B",
            "direccion": "Av. Corrientes 1234",
            "tipo": "dpto",
            "estado": "ALQUILADO",
            "fecha_estado_desde": "2024-05-01",
            "notas": null,
            "created_at": "2024-05-01T10:00:00Z"
        }"#;
        let d: Departamento = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, 3);
        assert_eq!(d.estado, EstadoDepartamento::Alquilado);
        assert_eq!(d.fecha_estado_desde, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(Departamento::item_path(3), "/departamentos/3");
    }

    #[test]
    fn test_payload_nulls_empty_fields() {
        let mut dto = DepartamentoDto::new();
        dto.alias = " Casa 2 ".into();
        dto.direccion = "Calle Falsa 123".into();
        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.alias, "Casa 2");
        assert_eq!(payload.notas, None);
        assert_eq!(payload.fecha_estado_desde, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["estado"], "VACIO");
        assert!(json["notas"].is_null());
    }

    #[test]
    fn test_validation_requires_alias_and_direccion() {
        let mut dto = DepartamentoDto::new();
        assert!(dto.validate().is_err());
        dto.alias = "Dpto 5A".into();
        assert!(dto.validate().is_err());
        dto.direccion = "Av. Santa Fe 5678".into();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_estado_from_str() {
        assert_eq!(
            EstadoDepartamento::from_str_opt("REFACCION"),
            Some(EstadoDepartamento::Refaccion)
        );
        assert_eq!(EstadoDepartamento::from_str_opt("TODOS"), None);
    }
}
