//! Application layer services.
//!
//! Services sit between HTTP handlers and the domain: they parse caller
//! input, call the registry and shape results for presentation.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and inspection

pub mod services;
