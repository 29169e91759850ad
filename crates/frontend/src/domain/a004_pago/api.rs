//! REST access for `/pagos`

use crate::domain::{a001_departamento, a003_contrato};
use crate::shared::api_utils::{create_item, fetch_collection};
use contracts::domain::a001_departamento::aggregate::Departamento;
use contracts::domain::a003_contrato::aggregate::Contrato;
use contracts::domain::a004_pago::aggregate::{Pago, PagoDto, PagoPayload};
use contracts::usecases::common::{ApiError, ApiResult};

pub async fn fetch_all() -> ApiResult<Vec<Pago>> {
    fetch_collection::<Pago>().await
}

pub async fn create(payload: &PagoPayload) -> ApiResult<()> {
    create_item::<Pago, _>(payload).await
}

/// Payments are only ever registered, never edited
pub async fn register(dto: &PagoDto) -> ApiResult<()> {
    let payload = dto.to_payload().map_err(ApiError::validation)?;
    create(&payload).await
}

#[derive(Debug, Clone, Default)]
pub struct PagosData {
    pub pagos: Vec<Pago>,
    pub contratos: Vec<Contrato>,
    pub departamentos: Vec<Departamento>,
}

pub async fn fetch_with_references() -> ApiResult<PagosData> {
    let (pagos, contratos, departamentos) = futures::try_join!(
        fetch_all(),
        a003_contrato::api::fetch_all(),
        a001_departamento::api::fetch_all(),
    )?;
    Ok(PagosData {
        pagos,
        contratos,
        departamentos,
    })
}
