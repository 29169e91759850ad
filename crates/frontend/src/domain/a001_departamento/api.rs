//! REST access for `/departamentos`

use crate::shared::api_utils::{create_item, delete_item, fetch_collection, update_item};
use contracts::domain::a001_departamento::aggregate::{
    Departamento, DepartamentoDto, DepartamentoPayload,
};
use contracts::domain::common::EntityId;
use contracts::usecases::common::{ApiError, ApiResult};

pub async fn fetch_all() -> ApiResult<Vec<Departamento>> {
    fetch_collection::<Departamento>().await
}

pub async fn create(payload: &DepartamentoPayload) -> ApiResult<()> {
    create_item::<Departamento, _>(payload).await
}

pub async fn update(id: EntityId, payload: &DepartamentoPayload) -> ApiResult<()> {
    update_item::<Departamento, _>(id, payload).await
}

pub async fn delete(id: EntityId) -> ApiResult<()> {
    delete_item::<Departamento>(id).await
}

/// POST for a new form, PUT for an existing one
pub async fn save(dto: &DepartamentoDto) -> ApiResult<()> {
    let payload = dto.to_payload().map_err(ApiError::validation)?;
    match dto.id {
        Some(id) => update(id, &payload).await,
        None => create(&payload).await,
    }
}
