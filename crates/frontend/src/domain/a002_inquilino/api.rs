//! REST access for `/inquilinos`

use crate::shared::api_utils::{create_item, delete_item, fetch_collection, update_item};
use contracts::domain::a002_inquilino::aggregate::{Inquilino, InquilinoDto, InquilinoPayload};
use contracts::domain::common::EntityId;
use contracts::usecases::common::{ApiError, ApiResult};

pub async fn fetch_all() -> ApiResult<Vec<Inquilino>> {
    fetch_collection::<Inquilino>().await
}

pub async fn create(payload: &InquilinoPayload) -> ApiResult<()> {
    create_item::<Inquilino, _>(payload).await
}

pub async fn update(id: EntityId, payload: &InquilinoPayload) -> ApiResult<()> {
    update_item::<Inquilino, _>(id, payload).await
}

pub async fn delete(id: EntityId) -> ApiResult<()> {
    delete_item::<Inquilino>(id).await
}

pub async fn save(dto: &InquilinoDto) -> ApiResult<()> {
    let payload = dto.to_payload().map_err(ApiError::validation)?;
    match dto.id {
        Some(id) => update(id, &payload).await,
        None => create(&payload).await,
    }
}
