pub mod estado_badge;
pub mod stat_card;

pub use estado_badge::EstadoBadge;
pub use stat_card::StatCard;
