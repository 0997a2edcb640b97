mod descriptor;
mod path;

pub use descriptor::Identity;
pub use path::{DerivationPath, HARDENED, IDENTITY_PURPOSE};
