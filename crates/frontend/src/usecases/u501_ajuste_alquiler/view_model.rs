use super::api;
use crate::shared::api_utils::{confirm, notify, notify_error};
use crate::shared::number_format::format_money;
use contracts::domain::a001_departamento::aggregate::Departamento;
use contracts::domain::a003_contrato::aggregate::Contrato;
use contracts::domain::common::{parse_amount, EntityId};
use contracts::usecases::u501_ajuste_alquiler::{compute_adjustment, Ajuste, TipoAjuste};
use leptos::prelude::*;
use std::rc::Rc;

/// Select options: active contracts only, labelled with the unit and current rent
pub fn opciones_contrato(
    contratos: &[Contrato],
    departamentos: &[Departamento],
) -> Vec<(EntityId, String)> {
    contratos
        .iter()
        .filter(|c| c.is_activo())
        .map(|c| {
            let nombre = departamentos
                .iter()
                .find(|d| d.id == c.departamento_id)
                .map(|d| d.alias.clone())
                .unwrap_or_else(|| format!("Contrato #{}", c.id));
            (c.id, format!("{} - {}", nombre, format_money(c.monto_inicial)))
        })
        .collect()
}

#[derive(Clone, Copy)]
pub struct CalculadoraViewModel {
    pub contrato_id: RwSignal<Option<EntityId>>,
    pub monto_base: RwSignal<String>,
    pub tipo: RwSignal<TipoAjuste>,
    pub valor: RwSignal<String>,
    pub applying: RwSignal<bool>,
    contratos: StoredValue<Vec<Contrato>>,
}

impl CalculadoraViewModel {
    pub fn new(contratos: Vec<Contrato>) -> Self {
        Self {
            contrato_id: RwSignal::new(None),
            monto_base: RwSignal::new(String::new()),
            tipo: RwSignal::new(TipoAjuste::default()),
            valor: RwSignal::new(String::new()),
            applying: RwSignal::new(false),
            contratos: StoredValue::new(contratos),
        }
    }

    fn contrato(&self, id: EntityId) -> Option<Contrato> {
        self.contratos
            .with_value(|list| list.iter().find(|c| c.id == id).cloned())
    }

    /// Picking a contract loads its current rent as the base; clearing keeps the base.
    pub fn select_contrato(&self, id: Option<EntityId>) {
        self.contrato_id.set(id);
        if let Some(c) = id.and_then(|id| self.contrato(id)) {
            self.monto_base.set(c.monto_inicial.normalize().to_string());
        }
    }

    /// Recomputed on every input change; empty or invalid inputs give `None`
    pub fn resultado(&self) -> Option<Ajuste> {
        compute_adjustment(
            parse_amount(&self.monto_base.get()),
            self.tipo.get(),
            parse_amount(&self.valor.get()),
        )
    }

    pub fn can_apply(&self) -> bool {
        self.contrato_id.get().is_some() && self.resultado().is_some() && !self.applying.get()
    }

    pub fn aplicar_command(&self, on_updated: Rc<dyn Fn(())>, on_close: Rc<dyn Fn(())>) {
        let Some(contrato) = self.contrato_id.get_untracked().and_then(|id| self.contrato(id)) else {
            return;
        };
        let Some(ajuste) = self.resultado() else {
            return;
        };
        if !confirm(&format!(
            "¿Estás seguro de actualizar el monto del contrato a {}?",
            format_money(ajuste.nuevo_monto)
        )) {
            return;
        }

        let applying = self.applying;
        applying.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::actualizar_monto(&contrato, &ajuste).await;
            applying.set(false);
            match result {
                Ok(()) => {
                    notify("Contrato actualizado correctamente.");
                    (on_updated)(());
                    (on_close)(());
                }
                Err(e) => notify_error("Error al actualizar", &e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_departamento::aggregate::EstadoDepartamento;
    use contracts::domain::a003_contrato::aggregate::EstadoContrato;
    use rust_decimal::Decimal;

    fn contrato(id: EntityId, estado: EstadoContrato) -> Contrato {
        Contrato {
            id,
            departamento_id: 3,
            inquilino_id: 1,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            fecha_fin: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            monto_inicial: Decimal::from(320_000),
            deposito_garantia: None,
            contrato_firmado_url: None,
            proxima_actualizacion: None,
            porcentaje_actualizacion: None,
            estado,
        }
    }

    #[test]
    fn test_opciones_only_active() {
        let contratos = vec![
            contrato(1, EstadoContrato::Activo),
            contrato(2, EstadoContrato::Rescindido),
        ];
        let deptos = vec![Departamento {
            id: 3,
            alias: "Depto 2A".into(),
            direccion: "Rioja 1500".into(),
            tipo: "DEPARTAMENTO".into(),
            estado: EstadoDepartamento::Alquilado,
            fecha_estado_desde: None,
            notas: None,
        }];
        let opciones = opciones_contrato(&contratos, &deptos);
        assert_eq!(opciones, vec![(1, "Depto 2A - $ 320.000,00".to_string())]);
        assert_eq!(
            opciones_contrato(&contratos, &[])[0].1,
            "Contrato #1 - $ 320.000,00"
        );
    }
}
