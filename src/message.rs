//! The structured representation of one protocol line, and the parser
//! that produces it.
//!
//! Parsing is a positional scan over the space-split tokens of a line:
//! an optional `:prefix` in the first slot, then the command
//! (upper-cased), then middle parameters until a token starting with
//! `:` marks the trailing parameter, which swallows the rest of the
//! line as a single element.

use std::fmt;

use crate::error::MessageParseError;

/// A parsed IRC message.
///
/// `command` is `None` for the rare well-formed line that never yields
/// a command token; such messages are still routed (as a generic
/// fallback event) rather than rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Sender identity string, absent for locally-originated lines.
    pub prefix: Option<String>,
    /// The command, upper-cased; may be a 3-digit numeric reply code.
    pub command: Option<String>,
    /// Ordered parameters; the trailing parameter, when present, is the
    /// final element and may contain spaces.
    pub params: Vec<String>,
    /// The original raw line, kept for diagnostics.
    pub raw: String,
}

impl Message {
    /// Parse one raw line (without its CRLF terminator).
    ///
    /// Lines with fewer than two non-empty tokens are rejected; this is
    /// a soft failure the connection loop drops silently.
    pub fn parse(line: &str) -> Result<Message, MessageParseError> {
        let tokens: Vec<&str> = line.split(' ').collect();

        let non_empty = tokens.iter().filter(|t| !t.is_empty()).count();
        if non_empty < 2 {
            return Err(if non_empty == 0 {
                MessageParseError::EmptyMessage
            } else {
                MessageParseError::TooFewTokens { got: non_empty }
            });
        }

        let mut prefix = None;
        let mut command = None;
        let mut params = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];
            if i == 0 && token.starts_with(':') {
                prefix = Some(token[1..].to_string());
            } else if token.is_empty() {
                // Runs of spaces produce empty tokens; skip them.
            } else if command.is_none() && !token.starts_with(':') {
                command = Some(token.to_ascii_uppercase());
            } else if let Some(rest) = token.strip_prefix(':') {
                // Trailing parameter: this token and everything after it
                // collapse into one final element.
                let mut trailing = rest.to_string();
                for later in &tokens[i + 1..] {
                    trailing.push(' ');
                    trailing.push_str(later);
                }
                params.push(trailing);
                break;
            } else {
                params.push(token.to_string());
            }
            i += 1;
        }

        Ok(Message {
            prefix,
            command,
            params,
            raw: line.to_string(),
        })
    }

    /// The trailing-or-middle parameter at `index`, when present.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }
}

impl fmt::Display for Message {
    /// Reconstruct the wire form (without CRLF). The final parameter is
    /// written as a trailing `:param` whenever leaving the colon off
    /// would change how the line reparses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut sep = |f: &mut fmt::Formatter<'_>| -> fmt::Result {
            if first {
                first = false;
                Ok(())
            } else {
                write!(f, " ")
            }
        };

        if let Some(prefix) = &self.prefix {
            sep(f)?;
            write!(f, ":{}", prefix)?;
        }
        if let Some(command) = &self.command {
            sep(f)?;
            write!(f, "{}", command)?;
        }
        for (i, param) in self.params.iter().enumerate() {
            sep(f)?;
            let last = i + 1 == self.params.len();
            if last && (param.is_empty() || param.contains(' ') || param.starts_with(':')) {
                write!(f, ":{}", param)?;
            } else {
                write!(f, "{}", param)?;
            }
        }
        Ok(())
    }
}
