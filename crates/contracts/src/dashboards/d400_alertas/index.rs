use super::dto::Collections;
use crate::domain::a001_departamento::aggregate::Departamento;
use crate::domain::a002_inquilino::aggregate::Inquilino;
use crate::domain::a003_contrato::aggregate::Contrato;
use crate::domain::common::EntityId;
use std::collections::{HashMap, HashSet};

/// id → record lookups built once per load, so the joins do not rescan collections.
pub struct CollectionIndex<'a> {
    departamentos: HashMap<EntityId, &'a Departamento>,
    inquilinos: HashMap<EntityId, &'a Inquilino>,
    contratos: HashMap<EntityId, &'a Contrato>,
    /// Departments referenced by at least one ACTIVO contract
    ocupados: HashSet<EntityId>,
}

impl<'a> CollectionIndex<'a> {
    pub fn build(data: &'a Collections) -> Self {
        Self {
            departamentos: data.departamentos.iter().map(|d| (d.id, d)).collect(),
            inquilinos: data.inquilinos.iter().map(|i| (i.id, i)).collect(),
            contratos: data.contratos.iter().map(|c| (c.id, c)).collect(),
            ocupados: data
                .contratos
                .iter()
                .filter(|c| c.is_activo())
                .map(|c| c.departamento_id)
                .collect(),
        }
    }

    pub fn departamento(&self, id: EntityId) -> Option<&'a Departamento> {
        self.departamentos.get(&id).copied()
    }

    pub fn inquilino(&self, id: EntityId) -> Option<&'a Inquilino> {
        self.inquilinos.get(&id).copied()
    }

    pub fn contrato(&self, id: EntityId) -> Option<&'a Contrato> {
        self.contratos.get(&id).copied()
    }

    pub fn has_contrato_activo(&self, departamento_id: EntityId) -> bool {
        self.ocupados.contains(&departamento_id)
    }

    /// Alias of the contract's department, or `Contrato #<id>` when it does not resolve.
    pub fn nombre_contrato(&self, contrato_id: EntityId) -> String {
        self.contrato(contrato_id)
            .and_then(|c| self.departamento(c.departamento_id))
            .map(|d| d.alias.clone())
            .unwrap_or_else(|| format!("Contrato #{}", contrato_id))
    }

    pub fn inquilino_de_contrato(&self, contrato_id: EntityId) -> Option<String> {
        self.contrato(contrato_id)
            .and_then(|c| self.inquilino(c.inquilino_id))
            .map(|i| i.nombre_apellido.clone())
    }
}
