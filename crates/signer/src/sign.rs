use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::ConfirmationDisplay;
use crate::error::SignIdentityError;
use crate::identity::{DerivationPath, Identity};
use crate::resolver::KeyResolver;
use crate::signing::{
    CoinMessageDigester, CurveKind, ProtocolClass, build_digest, normalize_public_key,
    normalize_signature,
};

/// One challenge-signing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignIdentityRequest {
    pub identity: Identity,
    #[serde(with = "hex::serde")]
    pub challenge_hidden: Vec<u8>,
    pub challenge_visual: String,
    /// Absent means secp256k1.
    #[serde(default)]
    pub curve: CurveKind,
}

/// The signed artifact returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedIdentity {
    pub address: Option<String>,
    #[serde(with = "hex::serde")]
    pub public_key: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub signature: Vec<u8>,
}

/// Runs the full signing pipeline for one request.
///
/// 1. Canonicalizes the identity and shows it for confirmation.
/// 2. Derives the hardened path and resolves it to a key pair.
/// 3. Builds the protocol digest, signs, and normalizes the output.
///
/// The resolver call is the only suspension point. Everything after it is
/// pure computation, so a failure is deterministic for the inputs and is
/// surfaced immediately rather than retried.
pub async fn sign_identity(
    request: &SignIdentityRequest,
    resolver: &dyn KeyResolver,
    digester: &dyn CoinMessageDigester,
    display: &dyn ConfirmationDisplay,
) -> Result<SignedIdentity, SignIdentityError> {
    let canonical = request.identity.canonical_string();
    display.show(&canonical, &request.challenge_visual);

    let path = DerivationPath::for_identity(&canonical, request.identity.index);
    debug!(identity = %canonical, curve = request.curve.tag(), "signing identity challenge");

    let resolved = resolver
        .resolve(&path, request.curve)
        .await
        .map_err(SignIdentityError::Resolver)?;

    let protocol = ProtocolClass::from_proto(request.identity.proto.as_deref());
    let digest = build_digest(
        &protocol,
        request.curve,
        &request.challenge_hidden,
        &request.challenge_visual,
        digester,
    )
    .map_err(SignIdentityError::Digest)?;

    let raw = request
        .curve
        .sign(&resolved.secret_key, &digest)
        .map_err(SignIdentityError::Signing)?;

    let signature = normalize_signature(raw, request.curve, &protocol);
    let public_key = normalize_public_key(resolved.public_key, &protocol);

    // Only secp256k1 has an address convention.
    let address = match request.curve {
        CurveKind::Secp256k1 => resolved.address,
        CurveKind::Nist256p1 | CurveKind::Ed25519 => None,
    };

    Ok(SignedIdentity {
        address,
        public_key,
        signature,
    })
}
