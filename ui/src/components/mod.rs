//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `layout`: Page shell (header, footer, navigation)
//! - `showcase`: Project grid and certificates
//! - `contact`: Contact form
//! - `admin`: Admin area and the summary panel

pub mod admin;
pub mod contact;
pub mod layout;
pub mod showcase;
