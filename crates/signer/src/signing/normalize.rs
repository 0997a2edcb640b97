use super::curve::CurveKind;
use super::digest::ProtocolClass;

/// Fixes up the leading signature byte for the consumer protocol.
///
/// Ed25519 signatures carry no header byte natively and gain a 0x00
/// prefix. The auth and encryption protocols do not use the recovery-id
/// convention, so their header byte is zeroed. The coin protocol keeps the
/// recovery byte the curve primitive produced.
pub fn normalize_signature(raw: Vec<u8>, curve: CurveKind, protocol: &ProtocolClass) -> Vec<u8> {
    if curve == CurveKind::Ed25519 {
        let mut out = Vec::with_capacity(raw.len() + 1);
        out.push(0x00);
        out.extend_from_slice(&raw);
        return out;
    }
    match protocol {
        ProtocolClass::Auth | ProtocolClass::Encryption => {
            let mut out = raw;
            if let Some(first) = out.first_mut() {
                *first = 0x00;
            }
            out
        }
        ProtocolClass::Coin(_) => raw,
    }
}

/// Replaces the 0x01 odd-y marker byte on resolver public keys with 0x00
/// under the auth and encryption protocols. Coin keys pass through
/// unchanged.
pub fn normalize_public_key(pubkey: Vec<u8>, protocol: &ProtocolClass) -> Vec<u8> {
    match protocol {
        ProtocolClass::Auth | ProtocolClass::Encryption => {
            let mut out = pubkey;
            if out.first() == Some(&0x01) {
                out[0] = 0x00;
            }
            out
        }
        ProtocolClass::Coin(_) => pubkey,
    }
}
