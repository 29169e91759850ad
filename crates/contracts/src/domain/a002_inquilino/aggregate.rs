use crate::domain::common::{non_empty, AggregateRoot, EntityId};
use serde::{Deserialize, Serialize};

pub const CANALES_COMUNICACION: [&str; 4] = ["WhatsApp", "Email", "Teléfono", "Otro"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoInquilino {
    #[default]
    Activo,
    Inactivo,
}

impl EstadoInquilino {
    pub const ALL: [EstadoInquilino; 2] = [Self::Activo, Self::Inactivo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activo => "ACTIVO",
            Self::Inactivo => "INACTIVO",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

/// Inquilino (persona que alquila una unidad)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquilino {
    pub id: EntityId,
    pub nombre_apellido: String,
    #[serde(default)]
    pub dni_cuit: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub canal_comunicacion: Option<String>,
    pub estado: EstadoInquilino,
}

impl AggregateRoot for Inquilino {
    fn id(&self) -> EntityId {
        self.id
    }

    fn description(&self) -> String {
        self.nombre_apellido.clone()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "inquilinos"
    }

    fn element_name() -> &'static str {
        "Inquilino"
    }

    fn list_name() -> &'static str {
        "Inquilinos"
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InquilinoDto {
    pub id: Option<EntityId>,
    pub nombre_apellido: String,
    pub dni_cuit: String,
    pub telefono: String,
    pub email: String,
    pub canal_comunicacion: String,
    pub estado: EstadoInquilino,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InquilinoPayload {
    pub nombre_apellido: String,
    pub dni_cuit: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub canal_comunicacion: Option<String>,
    pub estado: EstadoInquilino,
}

impl InquilinoDto {
    pub fn new() -> Self {
        Self {
            canal_comunicacion: CANALES_COMUNICACION[0].to_string(),
            ..Self::default()
        }
    }

    pub fn from_aggregate(i: &Inquilino) -> Self {
        Self {
            id: Some(i.id),
            nombre_apellido: i.nombre_apellido.clone(),
            dni_cuit: i.dni_cuit.clone().unwrap_or_default(),
            telefono: i.telefono.clone().unwrap_or_default(),
            email: i.email.clone().unwrap_or_default(),
            canal_comunicacion: i
                .canal_comunicacion
                .clone()
                .unwrap_or_else(|| CANALES_COMUNICACION[0].to_string()),
            estado: i.estado,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.nombre_apellido.trim().is_empty() {
            return Err("El nombre y apellido es obligatorio".into());
        }
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err("El email no es válido".into());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> Result<InquilinoPayload, String> {
        self.validate()?;
        Ok(InquilinoPayload {
            nombre_apellido: self.nombre_apellido.trim().to_string(),
            dni_cuit: non_empty(&self.dni_cuit),
            telefono: non_empty(&self.telefono),
            email: non_empty(&self.email),
            canal_comunicacion: non_empty(&self.canal_comunicacion),
            estado: self.estado,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let json = r#"{"id": 7, "nombre_apellido": "Juan Pérez", "estado": "ACTIVO"}"#;
        let i: Inquilino = serde_json::from_str(json).unwrap();
        assert_eq!(i.description(), "Juan Pérez");
        assert_eq!(i.email, None);
        assert_eq!(Inquilino::collection_path(), "/inquilinos");
    }

    #[test]
    fn test_email_validation() {
        let mut dto = InquilinoDto::new();
        dto.nombre_apellido = "María García".into();
        dto.email = "maria.example.com".into();
        assert!(dto.validate().is_err());
        dto.email = "maria@example.com".into();
        assert!(dto.validate().is_ok());
        dto.email.clear();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_edit_roundtrip_keeps_channel_default() {
        let i = Inquilino {
            id: 1,
            nombre_apellido: "Ana".into(),
            dni_cuit: Some("20-12345678-9".into()),
            telefono: None,
            email: None,
            canal_comunicacion: None,
            estado: EstadoInquilino::Inactivo,
        };
        let dto = InquilinoDto::from_aggregate(&i);
        assert_eq!(dto.canal_comunicacion, "WhatsApp");
        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.dni_cuit.as_deref(), Some("20-12345678-9"));
        assert_eq!(payload.telefono, None);
        assert_eq!(payload.estado, EstadoInquilino::Inactivo);
    }
}
