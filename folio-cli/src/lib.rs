//! Folio - Portfolio Site Host
//!
//! Hosts the compiled web UI behind an `/api` reverse proxy to the deployed
//! backend, and bundles the one-shot probes used to check that deployment.

pub mod config;
pub mod probe;
pub mod server;

pub use server::AppState;
