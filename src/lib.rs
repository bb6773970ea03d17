//! # shortlink
//!
//! A small URL shortening service built with Axum. Links live in an
//! in-memory registry for the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The link registry, its entities and the clock
//! - **Application Layer** ([`application`]) - Service orchestrating registry calls
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Random 6-character codes with collision regeneration
//! - Per-link validity window, checked lazily on every read
//! - Race-free click counting under concurrent redirects
//! - Statistics that stay available after a link expires
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://short.yerva"   # Optional
//! cargo run
//!
//! curl -X POST -d 'url=https://example.com/long/path&validity=1' http://localhost:8080/shorten
//! curl -i 'http://localhost:8080/redirect?code=ab12cd'
//! curl 'http://localhost:8080/stats?code=ab12cd'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ShortenedLink};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::Link;
    pub use crate::domain::registry::{LinkRegistry, RegistryError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
