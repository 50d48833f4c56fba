//! mIRC text decoration helpers.
//!
//! Stateless utilities for wrapping message text in the classic mIRC
//! control bytes. Nothing here touches the protocol or connection; the
//! output is ordinary message text the receiving client interprets.

/// The 16-color mIRC palette, indexed by wire color code.
pub const COLOR_NAMES: [&str; 16] = [
    "white", "black", "blue", "green", "red", "brown", "purple", "orange", "yellow", "lime",
    "teal", "cyan", "royal", "pink", "grey", "silver",
];

const COLOR: char = '\x03';
const BOLD: char = '\x02';
const ITALIC: char = '\x1D';
const UNDERLINE: char = '\x1F';
const REVERSE: char = '\x16';
const RESET: char = '\x0F';

/// A color given either by palette index or by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSpec<'a> {
    /// A wire color code, valid in `0..16`.
    Index(usize),
    /// A palette name from [`COLOR_NAMES`].
    Name(&'a str),
}

impl<'a> From<usize> for ColorSpec<'a> {
    fn from(index: usize) -> Self {
        ColorSpec::Index(index)
    }
}

impl<'a> From<&'a str> for ColorSpec<'a> {
    fn from(name: &'a str) -> Self {
        ColorSpec::Name(name)
    }
}

/// Resolve a spec to its wire color code. Out-of-range indexes and
/// unknown names resolve to `None`, never an error.
fn resolve(spec: ColorSpec<'_>) -> Option<usize> {
    match spec {
        ColorSpec::Index(i) if i < COLOR_NAMES.len() => Some(i),
        ColorSpec::Index(_) => None,
        ColorSpec::Name(name) => COLOR_NAMES.iter().position(|&n| n == name),
    }
}

/// Wrap `message` in color codes.
///
/// The background is optional and only applied when a foreground is
/// also given. If the foreground does not resolve, the message is
/// returned unmodified.
pub fn color<'a>(
    message: &str,
    fg: impl Into<ColorSpec<'a>>,
    bg: Option<ColorSpec<'a>>,
) -> String {
    let Some(fg) = resolve(fg.into()) else {
        return message.to_string();
    };

    match bg.and_then(resolve) {
        Some(bg) => format!("{COLOR}{fg},{bg}{message}{COLOR}"),
        None => format!("{COLOR}{fg}{message}{COLOR}"),
    }
}

/// Wrap text in bold toggles.
pub fn bold(text: &str) -> String {
    format!("{BOLD}{text}{BOLD}")
}

/// Wrap text in italic toggles.
pub fn italic(text: &str) -> String {
    format!("{ITALIC}{text}{ITALIC}")
}

/// Wrap text in underline toggles.
pub fn underline(text: &str) -> String {
    format!("{UNDERLINE}{text}{UNDERLINE}")
}

/// The reverse-video toggle byte.
pub fn reverse() -> String {
    REVERSE.to_string()
}

/// The formatting reset byte.
pub fn reset() -> String {
    RESET.to_string()
}
