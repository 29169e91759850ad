//! Calculadora de ajustes: simulate a percentage (IPC) or fixed rent increase and
//! optionally write the new amount back onto an existing contract.

pub mod calculator;

pub use calculator::{aplicar_ajuste, compute_adjustment, Ajuste, TipoAjuste};
