mod view;
mod view_model;

pub use view::InquilinoDetails;
pub use view_model::InquilinoDetailsViewModel;
