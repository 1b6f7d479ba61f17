//! Web layer for the aviation weather API.
//!
//! Provides the METAR and TAF read endpoints.

mod dto;
mod routes;
mod state;

pub use dto::{TafFaultData, metar_fault, taf_fault};
pub use routes::{cors_layer, create_router};
pub use state::AppState;
