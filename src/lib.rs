//! Deterministic partition keys for routing events.
//!
//! # Overview
//!
//! A [`PartitionKeyDeriver`] turns an arbitrary JSON event into a [`PartitionKey`] that a
//! stream processor or sharded store can use to route the event consistently. Derivation never
//! fails:
//!
//! - a missing or falsy event yields the trivial key `"0"`;
//! - an event carrying a truthy `partitionKey` field yields that field's canonical JSON;
//! - any other event yields the SHA3-512 hex digest of its canonical JSON, hashed once more if the
//!   digest is longer than the maximum key length.
//!
//! The trivial key, maximum length, hash algorithm and encoding live in an immutable
//! [`DeriverConfig`]. [`deterministic_partition_key`] derives with the defaults.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum. They can only come from building a deriver out
//! of an invalid configuration or from converting a typed event with
//! [`PartitionKeyDeriver::derive_from`].
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate with the `"dpk"` target.
//! Consider integrating a `log`-compatible logger implementation for better visibility.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

pub mod canonical;
pub mod digester;

mod config;
mod deriver;
mod error;
mod partition_key;

pub use config::DeriverConfig;
pub use deriver::{deterministic_partition_key, PartitionKeyDeriver};
pub use digester::{Digester, HashAlgorithm, HashEncoding, Sha3Digester};
pub use error::{Error, Result};
pub use partition_key::PartitionKey;
