use crate::domain::{a001_departamento, a002_inquilino, a003_contrato, a004_pago};
use contracts::dashboards::d400_alertas::Collections;
use contracts::usecases::common::ApiResult;

/// Fetch the four collections concurrently; the dashboard renders only when all arrived.
///
/// The first failing request fails the whole load.
pub async fn load_collections() -> ApiResult<Collections> {
    let (departamentos, inquilinos, contratos, pagos) = futures::try_join!(
        a001_departamento::api::fetch_all(),
        a002_inquilino::api::fetch_all(),
        a003_contrato::api::fetch_all(),
        a004_pago::api::fetch_all(),
    )?;
    log::debug!(
        "dashboard: {} departamentos, {} inquilinos, {} contratos, {} pagos",
        departamentos.len(),
        inquilinos.len(),
        contratos.len(),
        pagos.len()
    );
    Ok(Collections {
        departamentos,
        inquilinos,
        contratos,
        pagos,
    })
}
