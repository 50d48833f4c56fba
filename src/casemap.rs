//! IRC case-mapping.
//!
//! Nicknames and channel names compare case-insensitively under the
//! `rfc1459` mapping, where a handful of bracket characters are folded
//! together in addition to ASCII case.

fn fold(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        'A'..='Z' => c.to_ascii_lowercase(),
        _ => c,
    }
}

/// Convert a string to IRC lowercase using the RFC 1459 case mapping.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(fold).collect()
}

/// Compare two strings under the RFC 1459 case mapping.
pub fn irc_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.chars().zip(b.chars()).all(|(ca, cb)| fold(ca) == fold(cb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_folding() {
        assert_eq!(irc_to_lower("NickName"), "nickname");
        assert!(irc_eq("TehBot", "tehbot"));
        assert!(!irc_eq("alice", "bob"));
    }

    #[test]
    fn test_bracket_folding() {
        assert_eq!(irc_to_lower("nick[away]~"), "nick{away}^");
        assert!(irc_eq("foo[]\\", "FOO{}|"));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(!irc_eq("nick", "nick_"));
    }
}
