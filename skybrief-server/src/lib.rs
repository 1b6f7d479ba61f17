//! Aviation weather API server.
//!
//! Fetches METAR and TAF reports from the NOAA Aviation Weather Center and
//! returns them to API consumers in a normalized, strongly-typed shape.

pub mod config;
pub mod decode;
pub mod domain;
pub mod noaa;
pub mod web;
