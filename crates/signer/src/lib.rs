pub mod identity;
pub mod resolver;
pub mod sign;
pub mod display;
pub mod error;
pub mod signing;

pub use identity::{DerivationPath, Identity};
pub use resolver::{KeyResolver, ResolvedKey, SeedResolver};
pub use sign::{SignIdentityRequest, SignedIdentity, sign_identity};
pub use display::{ConfirmationDisplay, TracingDisplay};
pub use error::SignIdentityError;
pub use signing::{CoinMessageDigester, CurveKind, MagicMessageDigester, ProtocolClass};
