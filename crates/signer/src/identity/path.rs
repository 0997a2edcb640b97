use sha2::{Digest, Sha256};

/// Hardened-derivation flag bit.
pub const HARDENED: u32 = 0x8000_0000;

/// Purpose component prefixed to every identity path.
pub const IDENTITY_PURPOSE: u32 = 13;

/// A fixed-length hardened derivation path for an identity key.
///
/// The external key resolver must reproduce the same key pair for the same
/// path on every call, so construction has to be fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationPath([u32; 5]);

impl DerivationPath {
    /// Derives the path for a canonical identity string and rotation index.
    ///
    /// `SHA-256(le32(index) ++ identity)` supplies four path components;
    /// the purpose constant is prepended and every component is hardened.
    pub fn for_identity(canonical: &str, index: u32) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(index.to_le_bytes());
        hasher.update(canonical.as_bytes());
        let digest = hasher.finalize();

        let mut components = [IDENTITY_PURPOSE, 0, 0, 0, 0];
        for (slot, chunk) in components[1..].iter_mut().zip(digest.chunks_exact(4)) {
            *slot = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for component in &mut components {
            *component |= HARDENED;
        }
        Self(components)
    }

    pub fn components(&self) -> &[u32; 5] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let a = DerivationPath::for_identity("ssh://u@h", 0);
        let b = DerivationPath::for_identity("ssh://u@h", 0);
        assert_eq!(a, b);
    }

    #[test]
    fn every_component_is_hardened() {
        let path = DerivationPath::for_identity("https://alice@example.com", 3);
        for component in path.components() {
            assert_eq!(component & HARDENED, HARDENED);
        }
    }

    #[test]
    fn first_component_is_hardened_purpose() {
        let path = DerivationPath::for_identity("gpg://bob@mail", 0);
        assert_eq!(path.components()[0], IDENTITY_PURPOSE | HARDENED);
    }

    #[test]
    fn index_changes_the_path() {
        let a = DerivationPath::for_identity("ssh://u@h", 0);
        let b = DerivationPath::for_identity("ssh://u@h", 1);
        assert_ne!(a, b);
    }

    #[test]
    fn identity_changes_the_path() {
        let a = DerivationPath::for_identity("ssh://u@h", 0);
        let b = DerivationPath::for_identity("ssh://u@i", 0);
        assert_ne!(a, b);
    }
}
