//! In-memory link registry.
//!
//! The registry maps short codes to link records and is shared by every
//! request handler for the lifetime of the process.
//!
//! # Concurrency
//!
//! ```text
//! RwLock<HashMap<code, Arc<LinkEntry>>>
//!   create   -> write lock: check-and-insert
//!   resolve  -> read lock:  expiry check + AtomicU64::fetch_add
//!   inspect  -> read lock:  snapshot
//! ```
//!
//! Only the click counter is ever mutated after insertion. Records become
//! visible fully initialized. Locks are `parking_lot` and never poison.
//!
//! # Expiry
//!
//! Expiry is evaluated lazily against the injected [`Clock`]. Expired
//! records are kept: resolve rejects them, inspect still reports them.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::Link;
use crate::utils::code_generator::CodeGenerator;

/// Default number of generator calls before create gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Errors returned by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("short code '{code}' not found")]
    NotFound { code: String },

    #[error("short code '{code}' expired at {expired_at}")]
    Expired {
        code: String,
        expired_at: DateTime<Utc>,
    },

    #[error("no free short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },
}

#[derive(Debug)]
struct LinkEntry {
    code: String,
    target_url: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    clicks: AtomicU64,
}

impl LinkEntry {
    /// A link is still active at the exact instant of `expires_at`.
    fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    fn snapshot(&self, now: DateTime<Utc>) -> Link {
        Link {
            code: self.code.clone(),
            target_url: self.target_url.clone(),
            created_at: self.created_at,
            expires_at: self.expires_at,
            click_count: self.clicks.load(Ordering::Acquire),
            expired: self.is_expired_at(now),
        }
    }
}

/// Concurrency-safe store of short links.
///
/// Construct one per process and share it behind an [`Arc`].
pub struct LinkRegistry {
    links: RwLock<HashMap<String, Arc<LinkEntry>>>,
    generator: Arc<dyn CodeGenerator>,
    clock: Arc<dyn Clock>,
    max_attempts: usize,
}

impl LinkRegistry {
    /// Creates an empty registry.
    ///
    /// `max_attempts` bounds how many candidate codes are tried per create;
    /// values below 1 are treated as 1.
    pub fn new(
        generator: Arc<dyn CodeGenerator>,
        clock: Arc<dyn Clock>,
        max_attempts: usize,
    ) -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
            generator,
            clock,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Registers `target_url` under a freshly generated code.
    ///
    /// The record expires `validity_minutes` after the current clock time.
    /// A generated code that is already taken is discarded and a new one
    /// requested; existing records are never replaced.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CodeSpaceExhausted`] if every attempt
    /// collided. The registry is left unchanged.
    pub fn create(&self, target_url: String, validity_minutes: u32) -> Result<Link, RegistryError> {
        let created_at = self.clock.now();
        let expires_at = created_at + Duration::minutes(i64::from(validity_minutes));

        let mut links = self.links.write();

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            match links.entry(code) {
                Entry::Occupied(taken) => {
                    warn!(code = %taken.key(), attempt, "Short code collision, regenerating");
                }
                Entry::Vacant(slot) => {
                    let entry = Arc::new(LinkEntry {
                        code: slot.key().clone(),
                        target_url,
                        created_at,
                        expires_at,
                        clicks: AtomicU64::new(0),
                    });
                    let link = entry.snapshot(created_at);
                    slot.insert(entry);

                    info!(code = %link.code, %expires_at, "Short link created");
                    return Ok(link);
                }
            }
        }

        warn!(attempts = self.max_attempts, "Giving up on short code generation");
        Err(RegistryError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Returns the target URL for `code` and counts one click.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the code is unknown
    /// - [`RegistryError::Expired`] if the code is past its expiry; the
    ///   click count is not touched
    pub fn resolve(&self, code: &str) -> Result<String, RegistryError> {
        let entry = self.lookup(code)?;

        let now = self.clock.now();
        if entry.is_expired_at(now) {
            debug!(code, expired_at = %entry.expires_at, "Resolve rejected, link expired");
            return Err(RegistryError::Expired {
                code: code.to_string(),
                expired_at: entry.expires_at,
            });
        }

        let clicks = entry.clicks.fetch_add(1, Ordering::AcqRel) + 1;
        debug!(code, clicks, "Short link resolved");

        Ok(entry.target_url.clone())
    }

    /// Returns a snapshot of the record for `code`, expired or not.
    ///
    /// `Link::expired` is judged against the same clock reading the
    /// snapshot was taken at.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the code is unknown.
    pub fn inspect(&self, code: &str) -> Result<Link, RegistryError> {
        let entry = self.lookup(code)?;
        let link = entry.snapshot(self.clock.now());
        debug!(code, clicks = link.click_count, "Short link inspected");
        Ok(link)
    }

    /// Number of stored links, expired ones included.
    pub fn len(&self) -> usize {
        self.links.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.read().is_empty()
    }

    fn lookup(&self, code: &str) -> Result<Arc<LinkEntry>, RegistryError> {
        self.links
            .read()
            .get(code)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                code: code.to_string(),
            })
    }
}
