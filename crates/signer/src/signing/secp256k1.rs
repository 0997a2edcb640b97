use anyhow::Result;
use k256::ecdsa::SigningKey;

/// Header offset for recoverable signed-message signatures: 27 for the
/// recovery-id origin plus 4 to flag a compressed public key.
const HEADER_BASE: u8 = 31;

/// Signs a digest with ECDSA over secp256k1.
///
/// Returns 65 bytes: `header ++ r ++ s`, where the header byte carries the
/// recovery id so coin verifiers can recover the signer's key.
pub fn sign(secret_key: &[u8], digest: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::from_slice(secret_key)
        .map_err(|e| anyhow::anyhow!("invalid secp256k1 secret key: {e}"))?;
    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(digest)
        .map_err(|e| anyhow::anyhow!("secp256k1 sign failed: {e}"))?;

    let mut out = Vec::with_capacity(65);
    out.push(HEADER_BASE + recovery_id.to_byte());
    out.extend_from_slice(&signature.to_bytes());
    Ok(out)
}

/// Compressed SEC1 public key (33 bytes) for a secret key.
pub fn public_key(secret_key: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::from_slice(secret_key)
        .map_err(|e| anyhow::anyhow!("invalid secp256k1 secret key: {e}"))?;
    Ok(signing_key
        .verifying_key()
        .to_encoded_point(true)
        .as_bytes()
        .to_vec())
}
