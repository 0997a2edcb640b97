use serde::{Deserialize, Serialize};

/// The coordinates of the remote endpoint an identity key is bound to.
///
/// Every field is optional; absent fields simply drop out of the canonical
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub proto: Option<String>,
    pub user: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub path: Option<String>,
    /// Key rotation counter. Distinct indices yield unrelated keys for the
    /// same endpoint.
    #[serde(default)]
    pub index: u32,
}

impl Identity {
    /// Canonical string form, e.g. `ssh://user@host:22/path`.
    ///
    /// The piece order (`proto://`, `user@`, `host`, `:port`, `path`) is a
    /// wire contract with external verifiers and must never change.
    pub fn canonical_string(&self) -> String {
        let mut s = String::new();
        if let Some(proto) = &self.proto {
            s.push_str(proto);
            s.push_str("://");
        }
        if let Some(user) = &self.user {
            s.push_str(user);
            s.push('@');
        }
        if let Some(host) = &self.host {
            s.push_str(host);
        }
        if let Some(port) = &self.port {
            s.push(':');
            s.push_str(port);
        }
        if let Some(path) = &self.path {
            s.push_str(path);
        }
        s
    }
}
