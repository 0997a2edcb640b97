mod curve;
mod secp256k1;
mod nist256p1;
mod ed25519;
mod digest;
mod magic;
mod normalize;

pub use curve::CurveKind;
pub use digest::{CoinMessageDigester, ProtocolClass, build_digest};
pub use magic::MagicMessageDigester;
pub use normalize::{normalize_public_key, normalize_signature};
