//! Client configuration.
//!
//! Every field has a default so a `Config` deserialized from a partial
//! document (or built with `Config::default()`) is immediately usable.
//! Unrecognized keys in a source document are ignored by serde.
//! The struct is read-only once handed to a [`crate::client::Client`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a single IRC connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Server hostname or address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Text encoding label for the wire (anything `encoding_rs` knows).
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// Idle timeout in milliseconds; the connection is dropped when no
    /// data arrives for this long.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Nickname to register with.
    #[serde(default = "default_nick")]
    pub nick: String,
    /// Server password, sent as `PASS` before registration when set.
    #[serde(default)]
    pub pass: Option<String>,
    /// Channels joined automatically once the MOTD completes, in order.
    #[serde(default)]
    pub auto_join_channels: Vec<String>,
    /// Log verbosity hint for the embedding process (the library itself
    /// only emits `tracing` events).
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    6667
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

fn default_timeout_ms() -> u64 {
    7_200_000
}

fn default_nick() -> String {
    "banter".to_string()
}

fn default_log() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            encoding: default_encoding(),
            timeout_ms: default_timeout_ms(),
            nick: default_nick(),
            pass: None,
            auto_join_channels: Vec::new(),
            log: default_log(),
        }
    }
}

impl Config {
    /// The `host:port` pair used for the TCP dial.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The idle timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Set the server host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the server port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the nickname.
    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = nick.into();
        self
    }

    /// Set the server password.
    pub fn with_pass(mut self, pass: impl Into<String>) -> Self {
        self.pass = Some(pass.into());
        self
    }

    /// Set the channels to join after the MOTD completes.
    pub fn with_channels<I, T>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.auto_join_channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the idle timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.addr(), "127.0.0.1:6667");
        assert_eq!(config.encoding, "utf-8");
        assert_eq!(config.timeout(), Duration::from_millis(7_200_000));
        assert_eq!(config.nick, "banter");
        assert!(config.pass.is_none());
        assert!(config.auto_join_channels.is_empty());
        assert_eq!(config.log, "warn");
    }

    #[test]
    fn test_partial_document_gets_defaults() {
        let config: Config = toml::from_str("nick = \"alice\"\nport = 6697\n").unwrap();
        assert_eq!(config.nick, "alice");
        assert_eq!(config.port, 6697);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.timeout_ms, 7_200_000);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let config: Config =
            toml::from_str("nick = \"bob\"\nno_such_option = true\n").unwrap();
        assert_eq!(config.nick, "bob");
    }

    #[test]
    fn test_builder_helpers() {
        let config = Config::default()
            .with_host("irc.example.net")
            .with_port(6697)
            .with_nick("carol")
            .with_pass("hunter2")
            .with_channels(["#one", "#two"]);
        assert_eq!(config.addr(), "irc.example.net:6697");
        assert_eq!(config.pass.as_deref(), Some("hunter2"));
        assert_eq!(config.auto_join_channels, vec!["#one", "#two"]);
    }
}
