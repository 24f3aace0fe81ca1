//! Shared types for the Folio UI and tooling
//!
//! This crate contains the JSON wire types exchanged with the portfolio
//! backend:
//! - Admin summary counts
//! - Project and certificate records
//! - Contact form and auth payloads

pub mod messages;

pub use messages::*;
