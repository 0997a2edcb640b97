#[derive(Debug, thiserror::Error)]
pub enum SignIdentityError {
    /// An unrecognized curve tag reached curve dispatch. This is a
    /// configuration defect, never a transient condition.
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(String),
    /// The external key resolver failed (user declined, hardware fault).
    /// Passed through to the caller unchanged.
    #[error(transparent)]
    Resolver(anyhow::Error),
    #[error("challenge signing failed: {0}")]
    Signing(anyhow::Error),
    #[error("coin message digest failed: {0}")]
    Digest(anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_curve_names_the_tag() {
        let error = SignIdentityError::UnsupportedCurve("ed448".into());
        assert_eq!(error.to_string(), "unsupported curve: ed448");
    }

    #[test]
    fn resolver_error_passes_through_unchanged() {
        let error = SignIdentityError::Resolver(anyhow::anyhow!("user declined on device"));
        assert_eq!(error.to_string(), "user declined on device");
    }

    #[test]
    fn signing_error_keeps_source() {
        let error = SignIdentityError::Signing(anyhow::anyhow!("bad key"));
        assert!(error.to_string().contains("bad key"));
    }
}
