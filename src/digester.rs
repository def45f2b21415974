//! Digester implementation.
use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine as _,
};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_224, Sha3_256, Sha3_384, Sha3_512};

/// Computes an encoded digest of its input.
pub trait Digester {
    /// Return the encoded digest of `input`.
    fn digest(&self, input: &[u8]) -> String;
}

impl<T: Fn(&[u8]) -> String> Digester for T {
    fn digest(&self, input: &[u8]) -> String {
        self(input)
    }
}

/// Hash algorithm used to digest events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA3-224.
    #[serde(rename = "sha3-224")]
    Sha3_224,
    /// SHA3-256.
    #[serde(rename = "sha3-256")]
    Sha3_256,
    /// SHA3-384.
    #[serde(rename = "sha3-384")]
    Sha3_384,
    /// SHA3-512.
    #[default]
    #[serde(rename = "sha3-512")]
    Sha3_512,
}

impl HashAlgorithm {
    fn compute(self, input: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha3_224 => Sha3_224::digest(input).to_vec(),
            HashAlgorithm::Sha3_256 => Sha3_256::digest(input).to_vec(),
            HashAlgorithm::Sha3_384 => Sha3_384::digest(input).to_vec(),
            HashAlgorithm::Sha3_512 => Sha3_512::digest(input).to_vec(),
        }
    }
}

/// Text encoding applied to raw digest bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashEncoding {
    /// Lowercase hexadecimal.
    #[default]
    Hex,
    /// Standard base64 with padding.
    Base64,
    /// URL-safe base64 without padding.
    Base64Url,
}

impl HashEncoding {
    fn encode(self, bytes: &[u8]) -> String {
        match self {
            HashEncoding::Hex => hex::encode(bytes),
            HashEncoding::Base64 => STANDARD.encode(bytes),
            HashEncoding::Base64Url => URL_SAFE_NO_PAD.encode(bytes),
        }
    }
}

/// The default digester: a SHA3-family hash with a configurable output encoding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sha3Digester {
    algorithm: HashAlgorithm,
    encoding: HashEncoding,
}

impl Sha3Digester {
    /// Create a digester for `algorithm` whose output is encoded with `encoding`.
    pub fn new(algorithm: HashAlgorithm, encoding: HashEncoding) -> Sha3Digester {
        Sha3Digester {
            algorithm,
            encoding,
        }
    }
}

impl Digester for Sha3Digester {
    fn digest(&self, input: &[u8]) -> String {
        self.encoding.encode(&self.algorithm.compute(input))
    }
}
