/// Shows the identity and visual challenge to the operator before a key is
/// resolved. Purely informational; the pipeline consumes no return value.
pub trait ConfirmationDisplay: Send + Sync {
    fn show(&self, canonical_identity: &str, challenge_visual: &str);
}

/// Routes the confirmation through `tracing`.
#[derive(Debug, Default)]
pub struct TracingDisplay;

impl ConfirmationDisplay for TracingDisplay {
    fn show(&self, canonical_identity: &str, challenge_visual: &str) {
        tracing::info!(
            identity = %canonical_identity,
            challenge = %challenge_visual,
            "sign identity request"
        );
    }
}
