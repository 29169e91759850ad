//! Shared contracts between the dashboard frontend and the rental REST API.
//!
//! Everything here is platform-neutral: entity shapes, form DTOs, the alert deriver
//! and the rent adjustment calculator compile and test on the host as well as on wasm32.

pub mod dashboards;
pub mod domain;
pub mod usecases;
