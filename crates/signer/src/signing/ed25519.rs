use anyhow::Result;
use ed25519_dalek::{Signer, SigningKey};

/// Signs the digest bytes with ed25519, returning the bare 64-byte
/// signature. Ed25519 signs the payload directly; there is no prehash
/// step and no header byte.
pub fn sign(secret_key: &[u8], digest: &[u8]) -> Result<Vec<u8>> {
    let signing_key = signing_key(secret_key)?;
    Ok(signing_key.sign(digest).to_bytes().to_vec())
}

/// Raw 32-byte public key for a secret key.
pub fn public_key(secret_key: &[u8]) -> Result<Vec<u8>> {
    let signing_key = signing_key(secret_key)?;
    Ok(signing_key.verifying_key().to_bytes().to_vec())
}

fn signing_key(secret_key: &[u8]) -> Result<SigningKey> {
    let secret: [u8; 32] = secret_key.try_into().map_err(|_| {
        anyhow::anyhow!("ed25519 secret key must be 32 bytes, got {}", secret_key.len())
    })?;
    Ok(SigningKey::from_bytes(&secret))
}
