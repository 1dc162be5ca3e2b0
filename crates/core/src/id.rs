//! Opaque identifiers and the generators that mint them.
//!
//! Identifiers are plain strings to callers: lookups compare them byte-for-byte
//! (case-sensitive), never by parsing. Generation goes through [`IdGenerator`]
//! so tests can swap the random source for a deterministic one.

use core::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Opaque, non-empty string identifier.
///
/// Serializes as a plain string; deserialization goes through [`OpaqueId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OpaqueId(String);

impl OpaqueId {
    /// Wrap an existing identifier, rejecting the empty string.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::invalid_id("identifier must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OpaqueId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OpaqueId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<OpaqueId> for String {
    fn from(value: OpaqueId) -> Self {
        value.0
    }
}

impl From<Uuid> for OpaqueId {
    fn from(value: Uuid) -> Self {
        Self(value.hyphenated().to_string())
    }
}

/// Source of fresh identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> OpaqueId;
}

/// Production generator: random UUIDv4, rendered lowercase and hyphenated.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> OpaqueId {
        OpaqueId::from(Uuid::new_v4())
    }
}

/// Deterministic generator yielding `<prefix>-1`, `<prefix>-2`, ...
///
/// Intended for tests; the counter is atomic so a shared reference is enough.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> OpaqueId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        OpaqueId(format!("{}-{}", self.prefix, n))
    }
}
