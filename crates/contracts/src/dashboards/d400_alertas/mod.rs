//! Dashboard: derived alerts and headline counts over the four collections.

pub mod derive;
pub mod dto;
pub mod index;
pub mod kpi;

pub use derive::{derive_alerts, INFO_WINDOW_DAYS, VENCE_WINDOW_DAYS};
pub use dto::{Alerta, AlertaFecha, Collections, TipoAlerta};
pub use index::CollectionIndex;
pub use kpi::DashboardKpis;
