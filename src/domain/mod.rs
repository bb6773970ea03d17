//! Domain layer: the link registry and the types it works with.
//!
//! # Architecture
//!
//! - [`entities`] - Plain data returned to callers
//! - [`registry`] - The concurrency-safe in-memory link registry
//! - [`clock`] - Time source used for expiry decisions
//!
//! The domain layer has no dependency on HTTP. Handlers reach it through
//! [`crate::application::services::LinkService`].

pub mod clock;
pub mod entities;
pub mod registry;

pub use clock::{Clock, ManualClock, SystemClock};
pub use registry::{LinkRegistry, RegistryError};
