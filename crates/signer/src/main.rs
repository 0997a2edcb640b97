use clap::{Parser, ValueEnum};
use identity_signer::{
    CurveKind, Identity, MagicMessageDigester, SeedResolver, SignIdentityRequest, TracingDisplay,
    sign_identity,
};

#[derive(Debug, Clone, ValueEnum)]
enum Curve {
    Secp256k1,
    Nist256p1,
    Ed25519,
}

impl From<Curve> for CurveKind {
    fn from(curve: Curve) -> Self {
        match curve {
            Curve::Secp256k1 => CurveKind::Secp256k1,
            Curve::Nist256p1 => CurveKind::Nist256p1,
            Curve::Ed25519 => CurveKind::Ed25519,
        }
    }
}

#[derive(Parser)]
struct Args {
    /// Identity protocol tag, e.g. "ssh", "gpg", or a coin name.
    #[clap(long)]
    proto: Option<String>,
    #[clap(long)]
    user: Option<String>,
    #[clap(long)]
    host: Option<String>,
    #[clap(long)]
    port: Option<String>,
    #[clap(long)]
    path: Option<String>,
    /// Key rotation index.
    #[clap(long, default_value = "0")]
    index: u32,
    #[clap(long, env = "SIGNING_SEED")]
    seed: String,
    #[clap(long, env = "SIGNING_CURVE", default_value = "secp256k1")]
    curve: Curve,
    /// Hex-encoded hidden challenge.
    #[clap(long)]
    challenge_hidden: String,
    /// Human-readable challenge shown alongside the identity.
    #[clap(long, default_value = "")]
    challenge_visual: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let challenge_hidden =
        hex::decode(&args.challenge_hidden).expect("--challenge-hidden must be hex");

    let request = SignIdentityRequest {
        identity: Identity {
            proto: args.proto,
            user: args.user,
            host: args.host,
            port: args.port,
            path: args.path,
            index: args.index,
        },
        challenge_hidden,
        challenge_visual: args.challenge_visual,
        curve: args.curve.into(),
    };

    let resolver = SeedResolver::from_seed(&args.seed);
    let digester = MagicMessageDigester::new();

    let signed = sign_identity(&request, &resolver, &digester, &TracingDisplay)
        .await
        .expect("signing failed");

    println!("{}", serde_json::to_string_pretty(&signed).unwrap());
}
