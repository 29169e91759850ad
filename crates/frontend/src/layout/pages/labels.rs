use contracts::domain::a001_departamento::aggregate::Departamento;
use contracts::domain::a002_inquilino::aggregate::Inquilino;
use contracts::domain::a003_contrato::aggregate::Contrato;
use contracts::domain::a004_pago::aggregate::Pago;
use contracts::domain::common::AggregateRoot;

/// Display label for a page key; unknown keys are returned as is.
pub fn page_label(key: &str) -> &str {
    match key {
        "d400_alertas" => "Dashboard",
        "a001_departamento" => Departamento::list_name(),
        "a002_inquilino" => Inquilino::list_name(),
        "a003_contrato" => Contrato::list_name(),
        "a004_pago" => Pago::list_name(),
        other => other,
    }
}
