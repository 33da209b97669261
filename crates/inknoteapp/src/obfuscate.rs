//! # Obfuscation Layer
//!
//! A reversible text ⇄ bytes transform parameterized by a key string, hidden
//! behind the [`Obfuscator`] trait so the persistence pipeline does not care
//! which one is in use.
//!
//! ## Strategies
//!
//! - [`EncodingObfuscator`] (default): Base64 of the UTF-8 text. The key is
//!   accepted and **ignored**. This keeps casual eyes off the file and
//!   nothing more: it provides no confidentiality, and a wrong key is never
//!   detected.
//! - [`AesGcmObfuscator`]: AES-256-GCM with a per-save random salt and nonce.
//!   The key actually matters, and a wrong key is reported as
//!   [`InknoteError::WrongKey`].
//!
//! ## AES-GCM Layout
//!
//! ```text
//! "INKAES01" | salt (16) | nonce (12) | ciphertext + tag
//! ```
//!
//! The cipher key is `SHA-256(salt || key)`. That is a fast hash, not a
//! password-stretching KDF, so short keys remain brute-forceable offline.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::{InknoteError, Result};

/// A reversible transform between document text and stored bytes.
pub trait Obfuscator {
    /// Stable strategy name, as used in configuration.
    fn name(&self) -> &'static str;

    fn obfuscate(&self, text: &str, key: &str) -> Result<Vec<u8>>;

    fn deobfuscate(&self, bytes: &[u8], key: &str) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Encoding,
    AesGcm,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Encoding => "encoding",
            Strategy::AesGcm => "aes-gcm",
        }
    }

    pub fn build(&self) -> Box<dyn Obfuscator> {
        match self {
            Strategy::Encoding => Box::new(EncodingObfuscator),
            Strategy::AesGcm => Box::new(AesGcmObfuscator),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = InknoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encoding" => Ok(Strategy::Encoding),
            "aes-gcm" | "aes" => Ok(Strategy::AesGcm),
            other => Err(InknoteError::Config(format!(
                "Unknown obfuscation strategy '{}' (expected 'encoding' or 'aes-gcm')",
                other
            ))),
        }
    }
}

/// Base64 of the UTF-8 bytes. Key-independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingObfuscator;

impl Obfuscator for EncodingObfuscator {
    fn name(&self) -> &'static str {
        Strategy::Encoding.as_str()
    }

    fn obfuscate(&self, text: &str, _key: &str) -> Result<Vec<u8>> {
        Ok(STANDARD.encode(text.as_bytes()).into_bytes())
    }

    fn deobfuscate(&self, bytes: &[u8], _key: &str) -> Result<String> {
        let raw = STANDARD
            .decode(bytes)
            .map_err(|e| InknoteError::Decode(format!("invalid base64: {}", e)))?;
        String::from_utf8(raw).map_err(|e| InknoteError::Decode(format!("invalid UTF-8: {}", e)))
    }
}

const AES_MAGIC: &[u8; 8] = b"INKAES01";
const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const HEADER_LEN: usize = AES_MAGIC.len() + SALT_LEN + NONCE_LEN;

/// AES-256-GCM keyed by `SHA-256(salt || key)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesGcmObfuscator;

impl AesGcmObfuscator {
    fn cipher(salt: &[u8], key: &str) -> Result<Aes256Gcm> {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(key.as_bytes());
        let digest = hasher.finalize();
        Aes256Gcm::new_from_slice(&digest)
            .map_err(|e| InknoteError::Store(format!("AES key init failed: {}", e)))
    }
}

impl Obfuscator for AesGcmObfuscator {
    fn name(&self) -> &'static str {
        Strategy::AesGcm.as_str()
    }

    fn obfuscate(&self, text: &str, key: &str) -> Result<Vec<u8>> {
        let mut salt = [0u8; SALT_LEN];
        let mut nonce = [0u8; NONCE_LEN];
        rand::rngs::OsRng.fill_bytes(&mut salt);
        rand::rngs::OsRng.fill_bytes(&mut nonce);

        let cipher = Self::cipher(&salt, key)?;
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), text.as_bytes())
            .map_err(|e| InknoteError::Store(format!("AES-GCM encrypt failed: {}", e)))?;

        let mut out = Vec::with_capacity(HEADER_LEN + ciphertext.len());
        out.extend_from_slice(AES_MAGIC);
        out.extend_from_slice(&salt);
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn deobfuscate(&self, bytes: &[u8], key: &str) -> Result<String> {
        if !bytes.starts_with(AES_MAGIC) {
            return Err(InknoteError::Decode(
                "missing AES-GCM payload header".to_string(),
            ));
        }
        if bytes.len() < HEADER_LEN {
            return Err(InknoteError::Decode(
                "AES-GCM payload too short".to_string(),
            ));
        }

        let salt_end = AES_MAGIC.len() + SALT_LEN;
        let salt = &bytes[AES_MAGIC.len()..salt_end];
        let nonce = &bytes[salt_end..HEADER_LEN];
        let ciphertext = &bytes[HEADER_LEN..];

        let cipher = Self::cipher(salt, key)?;
        let plain = cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| {
                InknoteError::WrongKey(
                    "authentication failed (wrong key or tampered file)".to_string(),
                )
            })?;
        String::from_utf8(plain).map_err(|e| InknoteError::Decode(format!("invalid UTF-8: {}", e)))
    }
}
