//! Core domain entities.
//!
//! - [`Link`] - Point-in-time view of a shortened link

pub mod link;

pub use link::Link;
