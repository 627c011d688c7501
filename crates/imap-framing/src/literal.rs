//! Literal declaration grammar.
//!
//! A declaration sits at the very end of a line, immediately before the
//! terminator:
//!
//! ```text
//! literal-decl = ["~"] "{" 1*DIGIT ["+"] "}"
//! ```
//!
//! Any other suffix (`{3-}`, `{}`, `{ 3}`, a length that overflows `u64`) is
//! not a declaration, and the line is ordinary text.

use bstr::ByteSlice;

/// Whether the sender waits for a continuation before sending the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralKind {
    /// `{N}`: the receiver owes a continuation response.
    Synchronizing,
    /// `{N+}`: the payload follows the declaration immediately.
    NonSynchronizing,
}

/// A literal declaration recognised at the end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiteralDecl {
    /// Declared payload length in bytes.
    pub length: u64,
    /// Synchronizing or not.
    pub kind: LiteralKind,
    /// Declared with the `~` octet-safe marker.
    pub binary: bool,
}

impl LiteralDecl {
    /// Returns `true` if this declaration obliges a continuation response.
    #[must_use]
    pub fn is_synchronizing(&self) -> bool {
        self.kind == LiteralKind::Synchronizing
    }
}

/// Recognises a literal declaration at the end of `line`.
///
/// `line` is the line content without its terminator.
///
/// ```rust
/// use imap_framing::{LiteralKind, parse_literal_decl};
///
/// let decl = parse_literal_decl(b"A1 APPEND INBOX ~{12+}").unwrap();
/// assert_eq!(decl.length, 12);
/// assert_eq!(decl.kind, LiteralKind::NonSynchronizing);
/// assert!(decl.binary);
///
/// assert_eq!(parse_literal_decl(b"A1 LOGIN {3-}"), None);
/// ```
#[must_use]
pub fn parse_literal_decl(line: &[u8]) -> Option<LiteralDecl> {
    let body = line.strip_suffix(b"}")?;
    let (body, kind) = match body.strip_suffix(b"+") {
        Some(rest) => (rest, LiteralKind::NonSynchronizing),
        None => (body, LiteralKind::Synchronizing),
    };

    let open = body.rfind_byte(b'{')?;
    let digits = &body[open + 1..];
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let length = digits.iter().try_fold(0u64, |acc, &d| {
        acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
    })?;

    Some(LiteralDecl {
        length,
        kind,
        binary: open > 0 && body[open - 1] == b'~',
    })
}
