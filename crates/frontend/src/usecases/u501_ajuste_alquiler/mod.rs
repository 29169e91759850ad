//! Calculadora de ajustes (modal launched from the contratos page)

pub mod api;
mod view;
mod view_model;

pub use view::CalculadoraAjustes;
pub use view_model::CalculadoraViewModel;
