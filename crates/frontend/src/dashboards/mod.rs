pub mod d400_alertas;

pub use d400_alertas::ui::AlertasDashboard;
