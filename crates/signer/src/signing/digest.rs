use anyhow::Result;
use sha2::{Digest, Sha256};

use super::curve::CurveKind;

/// Protocol classes a challenge can be signed under.
///
/// Anything that is not the authentication or encryption-key protocol is a
/// coin-style signed message; the literal tag travels to the digest
/// delegate untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolClass {
    /// SSH authentication challenges.
    Auth,
    /// GPG encryption-key challenges.
    Encryption,
    /// Ledger signed-message protocol, tagged by coin name.
    Coin(String),
}

impl ProtocolClass {
    pub fn from_proto(proto: Option<&str>) -> Self {
        match proto {
            Some("ssh") => Self::Auth,
            Some("gpg") => Self::Encryption,
            other => Self::Coin(other.unwrap_or_default().to_string()),
        }
    }
}

/// Digest delegate for the coin signed-message branch.
///
/// Owns all protocol-tag-specific framing: magic headers, length prefixes.
pub trait CoinMessageDigester: Send + Sync {
    fn coin_message_digest(&self, protocol_tag: &str, payload: &[u8]) -> Result<Vec<u8>>;
}

/// Builds the digest the curve primitive will sign.
///
/// Each verifier class defines its own canonical digest; this is the one
/// place that must match all of them bit-for-bit.
pub fn build_digest(
    protocol: &ProtocolClass,
    curve: CurveKind,
    challenge_hidden: &[u8],
    challenge_visual: &str,
    digester: &dyn CoinMessageDigester,
) -> Result<Vec<u8>> {
    match protocol {
        // SSH hashes the challenge for the ECDSA curves; ed25519 signs it
        // raw.
        ProtocolClass::Auth => {
            if curve == CurveKind::Ed25519 {
                Ok(challenge_hidden.to_vec())
            } else {
                Ok(Sha256::digest(challenge_hidden).to_vec())
            }
        }
        // GPG signs the challenge verbatim on every curve.
        ProtocolClass::Encryption => Ok(challenge_hidden.to_vec()),
        ProtocolClass::Coin(tag) => {
            let mut payload = Vec::with_capacity(64);
            payload.extend_from_slice(&Sha256::digest(challenge_hidden));
            payload.extend_from_slice(&Sha256::digest(challenge_visual.as_bytes()));
            digester.coin_message_digest(tag, &payload)
        }
    }
}
