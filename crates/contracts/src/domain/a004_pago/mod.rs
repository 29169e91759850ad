pub mod aggregate;
pub mod late_fee;
