//! Message prefix (source) handling.
//!
//! A prefix is the optional leading `:identity` token on a protocol
//! line, conventionally of the form `nick!user@host` for users or a
//! bare server name.

/// A borrowed view over a raw prefix string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prefix<'a> {
    /// The prefix as it appeared on the wire, without the leading `:`.
    pub raw: &'a str,
}

impl<'a> Prefix<'a> {
    /// Wrap a raw prefix string.
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The identity: everything before the first `!`, or the whole
    /// prefix when no `!` is present. Empty prefixes yield `None`.
    pub fn identity(&self) -> Option<&'a str> {
        let id = match self.raw.find('!') {
            Some(pos) => &self.raw[..pos],
            None => self.raw,
        };
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    /// The username portion, between `!` and `@`, when present.
    pub fn user(&self) -> Option<&'a str> {
        let after_bang = &self.raw[self.raw.find('!')? + 1..];
        let user = match after_bang.find('@') {
            Some(pos) => &after_bang[..pos],
            None => after_bang,
        };
        if user.is_empty() {
            None
        } else {
            Some(user)
        }
    }

    /// The host portion, after `@`, when present.
    pub fn host(&self) -> Option<&'a str> {
        let host = &self.raw[self.raw.find('@')? + 1..];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

/// Extract the identity from an optional raw prefix.
pub fn identity_of(prefix: Option<&str>) -> Option<&str> {
    prefix.and_then(|p| Prefix::new(p).identity())
}
