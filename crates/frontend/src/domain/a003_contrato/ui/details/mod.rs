mod view;
mod view_model;

pub use view::ContratoDetails;
pub use view_model::ContratoDetailsViewModel;
