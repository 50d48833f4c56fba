//! Error types for the client connection library.
//!
//! Protocol-level failures are deliberately small in scope: transport
//! problems are normalized into the disconnect path by [`crate::client`],
//! and malformed inbound lines are dropped rather than surfaced.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured text encoding label is not recognized.
    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),

    /// The peer sent more bytes than the line limit without a CRLF.
    #[error("line too long: {actual} bytes (limit {limit})")]
    LineTooLong {
        /// Bytes buffered or framed so far.
        actual: usize,
        /// The enforced limit.
        limit: usize,
    },

    /// Failed to parse an inbound line.
    #[error("invalid message: {string}")]
    InvalidMessage {
        /// The raw line.
        string: String,
        /// The underlying parse error.
        #[source]
        cause: MessageParseError,
    },
}

/// Errors encountered when parsing a raw line into a [`crate::Message`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Line was empty.
    #[error("empty message")]
    EmptyMessage,

    /// Line had fewer than two non-empty space-separated tokens.
    #[error("not enough tokens: got {got}, need at least 2")]
    TooFewTokens {
        /// Number of non-empty tokens found.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::LineTooLong {
            actual: 9000,
            limit: 8191,
        };
        assert_eq!(format!("{}", err), "line too long: 9000 bytes (limit 8191)");

        let err = MessageParseError::TooFewTokens { got: 1 };
        assert_eq!(format!("{}", err), "not enough tokens: got 1, need at least 2");
    }

    #[test]
    fn test_error_source_chaining() {
        let cause = MessageParseError::EmptyMessage;
        let err = ProtocolError::InvalidMessage {
            string: String::new(),
            cause: cause.clone(),
        };

        let source = std::error::Error::source(&err);
        assert!(source.is_some());
        assert_eq!(source.unwrap().to_string(), cause.to_string());
    }

    #[test]
    fn test_error_conversion() {
        let io_err =
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err: ProtocolError = io_err.into();

        match err {
            ProtocolError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
