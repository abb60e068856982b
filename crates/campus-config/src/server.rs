//! Web view configuration.

use serde::{Deserialize, Serialize};

/// Default listen address for `campus serve`.
fn default_addr() -> String {
    String::from("127.0.0.1:5000")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// `host:port` the HTML report is served on.
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_loopback() {
        assert_eq!(ServerConfig::default().addr, "127.0.0.1:5000");
    }
}
