use anyhow::Result;
use p256::ecdsa::SigningKey;

/// Same header convention as the secp256k1 module.
const HEADER_BASE: u8 = 31;

/// Signs a digest with ECDSA over NIST P-256.
///
/// Returns 65 bytes: `header ++ r ++ s`.
pub fn sign(secret_key: &[u8], digest: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::from_slice(secret_key)
        .map_err(|e| anyhow::anyhow!("invalid nist256p1 secret key: {e}"))?;
    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(digest)
        .map_err(|e| anyhow::anyhow!("nist256p1 sign failed: {e}"))?;

    let mut out = Vec::with_capacity(65);
    out.push(HEADER_BASE + recovery_id.to_byte());
    out.extend_from_slice(&signature.to_bytes());
    Ok(out)
}

/// Compressed SEC1 public key (33 bytes) for a secret key.
pub fn public_key(secret_key: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::from_slice(secret_key)
        .map_err(|e| anyhow::anyhow!("invalid nist256p1 secret key: {e}"))?;
    Ok(signing_key
        .verifying_key()
        .to_encoded_point(true)
        .as_bytes()
        .to_vec())
}
