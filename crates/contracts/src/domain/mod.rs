pub mod a001_departamento;
pub mod a002_inquilino;
pub mod a003_contrato;
pub mod a004_pago;
pub mod common;
