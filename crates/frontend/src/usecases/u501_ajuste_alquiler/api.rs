use crate::domain::a003_contrato;
use contracts::domain::a003_contrato::aggregate::Contrato;
use contracts::usecases::common::ApiResult;
use contracts::usecases::u501_ajuste_alquiler::{aplicar_ajuste, Ajuste};

/// Writes the adjusted rent back with a full `PUT /contratos/{id}` built from the
/// snapshot the calculator was opened with.
pub async fn actualizar_monto(contrato: &Contrato, ajuste: &Ajuste) -> ApiResult<()> {
    let payload = aplicar_ajuste(contrato, ajuste);
    a003_contrato::api::update(contrato.id, &payload).await
}
