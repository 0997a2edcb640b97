use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::SignIdentityError;

use super::{ed25519, nist256p1, secp256k1};

/// The closed set of signature curves the signer understands.
///
/// Adding a curve means adding a variant and a primitive module; every
/// dispatch site is an exhaustive match, so the compiler finds them all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    #[default]
    Secp256k1,
    Nist256p1,
    Ed25519,
}

impl CurveKind {
    /// Parses a curve tag. Anything outside the three recognized tags is a
    /// configuration error.
    pub fn from_tag(tag: &str) -> Result<Self, SignIdentityError> {
        match tag {
            "secp256k1" => Ok(Self::Secp256k1),
            "nist256p1" => Ok(Self::Nist256p1),
            "ed25519" => Ok(Self::Ed25519),
            other => Err(SignIdentityError::UnsupportedCurve(other.to_string())),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Secp256k1 => "secp256k1",
            Self::Nist256p1 => "nist256p1",
            Self::Ed25519 => "ed25519",
        }
    }

    /// Signs a prepared digest with the curve primitive.
    ///
    /// ECDSA curves return 65 bytes (`header ++ r ++ s`); ed25519 returns
    /// the bare 64-byte signature.
    pub fn sign(&self, secret_key: &[u8], digest: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Secp256k1 => secp256k1::sign(secret_key, digest),
            Self::Nist256p1 => nist256p1::sign(secret_key, digest),
            Self::Ed25519 => ed25519::sign(secret_key, digest),
        }
    }

    /// Public key for a secret key, in the curve's natural encoding:
    /// SEC1 compressed (33 bytes) for the ECDSA curves, 32 bytes for
    /// ed25519.
    pub fn public_key(&self, secret_key: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Secp256k1 => secp256k1::public_key(secret_key),
            Self::Nist256p1 => nist256p1::public_key(secret_key),
            Self::Ed25519 => ed25519::public_key(secret_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_tags_parse() {
        assert_eq!(CurveKind::from_tag("secp256k1").unwrap(), CurveKind::Secp256k1);
        assert_eq!(CurveKind::from_tag("nist256p1").unwrap(), CurveKind::Nist256p1);
        assert_eq!(CurveKind::from_tag("ed25519").unwrap(), CurveKind::Ed25519);
    }

    #[test]
    fn unknown_tag_is_unsupported_curve() {
        let err = CurveKind::from_tag("curve25519").unwrap_err();
        assert!(matches!(err, SignIdentityError::UnsupportedCurve(tag) if tag == "curve25519"));
    }

    #[test]
    fn tag_roundtrips() {
        for curve in [CurveKind::Secp256k1, CurveKind::Nist256p1, CurveKind::Ed25519] {
            assert_eq!(CurveKind::from_tag(curve.tag()).unwrap(), curve);
        }
    }

    #[test]
    fn default_curve_is_secp256k1() {
        assert_eq!(CurveKind::default(), CurveKind::Secp256k1);
    }

    #[test]
    fn serde_tags_match_wire_names() {
        let curve: CurveKind = serde_json::from_str(r#""nist256p1""#).unwrap();
        assert_eq!(curve, CurveKind::Nist256p1);
        assert_eq!(serde_json::to_string(&CurveKind::Ed25519).unwrap(), r#""ed25519""#);
    }
}
