pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod load_state;
pub mod modal_frame;
pub mod number_format;
