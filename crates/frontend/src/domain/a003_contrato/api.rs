//! REST access for `/contratos`

use crate::domain::{a001_departamento, a002_inquilino};
use crate::shared::api_utils::{create_item, fetch_collection, update_item};
use contracts::domain::a001_departamento::aggregate::Departamento;
use contracts::domain::a002_inquilino::aggregate::Inquilino;
use contracts::domain::a003_contrato::aggregate::{Contrato, ContratoDto, ContratoPayload};
use contracts::domain::common::EntityId;
use contracts::usecases::common::{ApiError, ApiResult};

pub async fn fetch_all() -> ApiResult<Vec<Contrato>> {
    fetch_collection::<Contrato>().await
}

pub async fn create(payload: &ContratoPayload) -> ApiResult<()> {
    create_item::<Contrato, _>(payload).await
}

/// Full replacement of the stored contract
pub async fn update(id: EntityId, payload: &ContratoPayload) -> ApiResult<()> {
    update_item::<Contrato, _>(id, payload).await
}

pub async fn save(dto: &ContratoDto) -> ApiResult<()> {
    let payload = dto.to_payload().map_err(ApiError::validation)?;
    match dto.id {
        Some(id) => update(id, &payload).await,
        None => create(&payload).await,
    }
}

/// Everything the contratos page shows
#[derive(Debug, Clone, Default)]
pub struct ContratosData {
    pub contratos: Vec<Contrato>,
    pub departamentos: Vec<Departamento>,
    pub inquilinos: Vec<Inquilino>,
}

/// Contracts plus the collections they reference, requested concurrently
pub async fn fetch_with_references() -> ApiResult<ContratosData> {
    let (contratos, departamentos, inquilinos) = futures::try_join!(
        fetch_all(),
        a001_departamento::api::fetch_all(),
        a002_inquilino::api::fetch_all(),
    )?;
    Ok(ContratosData {
        contratos,
        departamentos,
        inquilinos,
    })
}
