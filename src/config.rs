use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    digester::{HashAlgorithm, HashEncoding, Sha3Digester},
    Error, PartitionKeyDeriver, Result,
};

/// Configuration for [`PartitionKeyDeriver`].
///
/// Every field defaults to the corresponding constant, so `DeriverConfig::default()` reproduces
/// the standard behavior: trivial key `"0"`, at most 256 characters, SHA3-512, hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeriverConfig {
    pub(crate) trivial_partition_key: String,
    pub(crate) max_partition_key_length: usize,
    pub(crate) hash_algorithm: HashAlgorithm,
    pub(crate) hash_encoding: HashEncoding,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        DeriverConfig {
            trivial_partition_key: DeriverConfig::TRIVIAL_PARTITION_KEY.to_owned(),
            max_partition_key_length: DeriverConfig::MAX_PARTITION_KEY_LENGTH,
            hash_algorithm: HashAlgorithm::default(),
            hash_encoding: HashEncoding::default(),
        }
    }
}

impl DeriverConfig {
    /// Key returned when nothing better can be derived.
    pub const TRIVIAL_PARTITION_KEY: &'static str = "0";

    /// Longest digest used as-is before it gets re-hashed.
    pub const MAX_PARTITION_KEY_LENGTH: usize = 256;

    /// Load configuration from a JSON document. Missing keys fall back to defaults.
    ///
    /// ```
    /// # use dpk::DeriverConfig;
    /// let config = DeriverConfig::from_json_str(r#"{"hashAlgorithm": "sha3-256"}"#).unwrap();
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| Error::InvalidConfiguration(Arc::new(err)))
    }

    /// Same as [`DeriverConfig::from_json_str`] but reads from `reader`.
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|err| Error::InvalidConfiguration(Arc::new(err)))
    }

    /// Override the key returned for absent events and empty digests.
    pub fn trivial_partition_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.trivial_partition_key = key.into();
        self
    }

    /// Override the digest length above which a digest is hashed once more.
    pub fn max_partition_key_length(&mut self, max_length: usize) -> &mut Self {
        self.max_partition_key_length = max_length;
        self
    }

    /// Override the hash algorithm used to digest events.
    pub fn hash_algorithm(&mut self, algorithm: HashAlgorithm) -> &mut Self {
        self.hash_algorithm = algorithm;
        self
    }

    /// Override the text encoding of digests.
    pub fn hash_encoding(&mut self, encoding: HashEncoding) -> &mut Self {
        self.hash_encoding = encoding;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.trivial_partition_key.is_empty() {
            return Err(Error::EmptyTrivialPartitionKey);
        }
        Ok(())
    }

    /// Create a new [`PartitionKeyDeriver`] using this configuration.
    ///
    /// ```
    /// # use dpk::DeriverConfig;
    /// let deriver = DeriverConfig::default().to_deriver().unwrap();
    /// assert_eq!(deriver.derive(None), "0");
    /// ```
    pub fn to_deriver(self) -> Result<PartitionKeyDeriver<Sha3Digester>> {
        PartitionKeyDeriver::new(self)
    }
}
