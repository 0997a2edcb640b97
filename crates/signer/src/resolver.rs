use anyhow::Result;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::identity::DerivationPath;
use crate::signing::CurveKind;

/// Key material resolved for one derivation path.
#[derive(Debug, Clone)]
pub struct ResolvedKey {
    pub secret_key: Vec<u8>,
    pub public_key: Vec<u8>,
    /// Coin address for the key, when the backend knows one.
    pub address: Option<String>,
}

/// Resolves a derivation path to key material.
///
/// Implementations may suspend (hardware access, user confirmation on a
/// device). A resolver must be deterministic for a given (path, curve)
/// over the lifetime of its seed.
#[async_trait]
pub trait KeyResolver: Send + Sync {
    async fn resolve(&self, path: &DerivationPath, curve: CurveKind) -> Result<ResolvedKey>;
}

/// Software resolver that derives everything in-process from a seed
/// string: the SHA-256 hash of the seed is the root secret, and each path
/// hashes the root together with the curve tag and the path components.
pub struct SeedResolver {
    root: [u8; 32],
}

impl SeedResolver {
    pub fn from_seed(seed: &str) -> Self {
        Self {
            root: Sha256::digest(seed.as_bytes()).into(),
        }
    }

    fn secret_for(&self, path: &DerivationPath, curve: CurveKind) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.root);
        hasher.update(curve.tag().as_bytes());
        for component in path.components() {
            hasher.update(component.to_le_bytes());
        }
        hasher.finalize().into()
    }
}

#[async_trait]
impl KeyResolver for SeedResolver {
    async fn resolve(&self, path: &DerivationPath, curve: CurveKind) -> Result<ResolvedKey> {
        debug!(curve = curve.tag(), ?path, "resolving identity key from seed");
        let secret = self.secret_for(path, curve);
        let mut public_key = curve.public_key(&secret)?;
        if curve == CurveKind::Ed25519 {
            // Node encoding pads ed25519 keys to 33 bytes with a 0x01
            // marker byte.
            public_key.insert(0, 0x01);
        }
        Ok(ResolvedKey {
            secret_key: secret.to_vec(),
            public_key,
            address: None,
        })
    }
}
