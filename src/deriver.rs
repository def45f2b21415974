use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::{
    canonical::{explicit_partition_key, is_falsy, to_canonical_string},
    digester::{Digester, Sha3Digester},
    DeriverConfig, Error, PartitionKey, Result,
};

/// Derives deterministic partition keys from events.
///
/// Derivation follows a strict precedence, first match wins:
/// 1. absent or falsy event: the trivial key;
/// 2. an object with a truthy `partitionKey` field: that field's canonical JSON, unbounded;
/// 3. anything else: the digest of the event's canonical JSON, re-hashed once if it is longer
///    than the configured maximum.
///
/// # Examples
/// ```
/// # use dpk::PartitionKeyDeriver;
/// # use serde_json::json;
/// let deriver = PartitionKeyDeriver::default();
/// assert_eq!(deriver.derive(Some(&json!({"partitionKey": "abc"}))), "\"abc\"");
/// ```
pub struct PartitionKeyDeriver<D = Sha3Digester> {
    config: DeriverConfig,
    digester: D,
}

impl PartitionKeyDeriver<Sha3Digester> {
    /// Create a deriver hashing with the algorithm and encoding from `config`.
    pub fn new(config: DeriverConfig) -> Result<Self> {
        let digester = Sha3Digester::new(config.hash_algorithm, config.hash_encoding);
        PartitionKeyDeriver::with_digester(config, digester)
    }
}

impl Default for PartitionKeyDeriver<Sha3Digester> {
    fn default() -> Self {
        PartitionKeyDeriver {
            config: DeriverConfig::default(),
            digester: Sha3Digester::default(),
        }
    }
}

impl<D: Digester> PartitionKeyDeriver<D> {
    /// Create a deriver that hashes with a custom `digester`.
    ///
    /// The hash settings in `config` are ignored; the trivial key and maximum length still apply.
    pub fn with_digester(config: DeriverConfig, digester: D) -> Result<Self> {
        config.validate()?;
        Ok(PartitionKeyDeriver { config, digester })
    }

    /// Configuration this deriver was built with.
    pub fn config(&self) -> &DeriverConfig {
        &self.config
    }

    /// Derive the partition key for `event`. `None` stands for a missing event.
    pub fn derive(&self, event: Option<&Value>) -> PartitionKey {
        let Some(event) = event.filter(|event| !is_falsy(event)) else {
            log::trace!(target: "dpk", "event is absent, using trivial partition key");
            return self.trivial_partition_key();
        };

        if let Some(explicit_key) = explicit_partition_key(event) {
            let key = to_canonical_string(explicit_key);
            log::trace!(target: "dpk", partition_key = key.as_str(); "using explicit partition key");
            return key.into();
        }

        let digest = self.digest_with_max_length(&to_canonical_string(event));
        if digest.is_empty() {
            log::warn!(target: "dpk", "digester returned an empty digest, using trivial partition key");
            return self.trivial_partition_key();
        }

        log::trace!(target: "dpk",
                    event:serde,
                    partition_key = digest.as_str();
                    "derived partition key from event digest");
        digest.into()
    }

    /// Same as [`PartitionKeyDeriver::derive`] for events of any serializable type.
    ///
    /// Fails only if `event` cannot be represented as JSON.
    pub fn derive_from<T: Serialize + ?Sized>(&self, event: Option<&T>) -> Result<PartitionKey> {
        let event = event
            .map(serde_json::to_value)
            .transpose()
            .map_err(|err| Error::EventSerialization(Arc::new(err)))?;
        Ok(self.derive(event.as_ref()))
    }

    fn digest_with_max_length(&self, data: &str) -> String {
        let digest = self.digester.digest(data.as_bytes());
        if digest.len() > self.config.max_partition_key_length {
            log::debug!(target: "dpk",
                        digest_length = digest.len(),
                        max_length = self.config.max_partition_key_length;
                        "digest exceeds maximum partition key length, re-hashing");
            // Single re-hash of the encoded digest, whatever its resulting length.
            return self.digester.digest(digest.as_bytes());
        }
        digest
    }

    fn trivial_partition_key(&self) -> PartitionKey {
        self.config.trivial_partition_key.clone().into()
    }
}

/// Derive the partition key for `event` using the default configuration.
///
/// ```
/// # use dpk::deterministic_partition_key;
/// assert_eq!(deterministic_partition_key(None), "0");
/// ```
pub fn deterministic_partition_key(event: Option<&Value>) -> PartitionKey {
    PartitionKeyDeriver::default().derive(event)
}
