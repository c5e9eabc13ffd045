//! # mfa-storage
//!
//! Secret storage interface for the TOTP MFA subsystem.
//!
//! The verification engine is stateless and never caches secrets; it
//! consumes this crate's [`SecretStore`] trait to load one credential per
//! user at verification time and to persist new credentials at
//! enrollment.
//!
//! ## Security Note
//!
//! Production implementations should encrypt credential data at rest and
//! must never log secret material. The bundled [`MemorySecretStore`] is a
//! reference implementation for tests and embedding, not a durable store.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod memory;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use memory::MemorySecretStore;
pub use store::SecretStore;
