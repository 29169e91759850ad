pub mod u501_ajuste_alquiler;
