use std::collections::HashMap;

use anyhow::Result;
use sha2::{Digest, Sha256};

use super::digest::CoinMessageDigester;

const BITCOIN_HEADER: &str = "Bitcoin Signed Message:\n";

/// Signed-message digest with per-coin magic headers.
///
/// Frames the payload as `varint(len(header)) ++ header ++
/// varint(len(payload)) ++ payload` and digests with double SHA-256, the
/// framing coin signed-message verifiers expect.
pub struct MagicMessageDigester {
    headers: HashMap<String, String>,
}

impl MagicMessageDigester {
    pub fn new() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Bitcoin".to_string(), BITCOIN_HEADER.to_string());
        Self { headers }
    }

    /// Registers a signed-message header for a protocol tag.
    pub fn with_header(mut self, tag: &str, header: &str) -> Self {
        self.headers.insert(tag.to_string(), header.to_string());
        self
    }

    fn header_for(&self, tag: &str) -> &str {
        // Unregistered tags sign under the Bitcoin header.
        self.headers
            .get(tag)
            .map(String::as_str)
            .unwrap_or(BITCOIN_HEADER)
    }
}

impl Default for MagicMessageDigester {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinMessageDigester for MagicMessageDigester {
    fn coin_message_digest(&self, protocol_tag: &str, payload: &[u8]) -> Result<Vec<u8>> {
        let header = self.header_for(protocol_tag);

        let mut framed = Vec::with_capacity(header.len() + payload.len() + 10);
        write_varint(&mut framed, header.len() as u64);
        framed.extend_from_slice(header.as_bytes());
        write_varint(&mut framed, payload.len() as u64);
        framed.extend_from_slice(payload);

        Ok(Sha256::digest(Sha256::digest(&framed)).to_vec())
    }
}

/// Bitcoin-style variable-length integer.
fn write_varint(out: &mut Vec<u8>, value: u64) {
    match value {
        0..=0xfc => out.push(value as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
}
