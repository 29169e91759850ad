pub mod common;
pub mod u501_ajuste_alquiler;
