// Server scope value object

/// Logical server partition that statistics can be restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerScope(pub String);

impl ServerScope {
    /// Producers may send a server id, a server name, or both. The id wins
    /// when present.
    pub fn from_parts(server_id: &str, server_name: &str) -> Self {
        if server_id.is_empty() {
            Self(server_name.to_string())
        } else {
            Self(server_id.to_string())
        }
    }

    /// An absent or empty filter means "all servers".
    pub fn filter(raw: Option<String>) -> Option<Self> {
        raw.filter(|value| !value.is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
