//! Framer: per-connection owner of the line/literal classification cursor.
//!
//! What it does
//! - Walks the caller's receive buffer from a remembered cursor, confirming
//!   complete lines and skipping declared literal payload as opaque bytes.
//! - Counts synchronizing declarations found during one `scan` call so the
//!   transport knows how many continuations it owes.
//!
//! Scope
//! - The framer never owns or copies the buffer. The caller appends to its
//!   own buffer, passes the whole unconsumed window to `scan`, and reports
//!   removals through `consume`.
//! - Command syntax is not validated; only the literal grammar at the end of
//!   each line matters.
//!
//! Invariants
//! - After every `scan`, `maximum_valid_bytes == cursor <= buffer.len()`.
//! - Payload bytes of an incomplete literal are exposed as they arrive; an
//!   unterminated ordinary line is never exposed, because it may still turn
//!   into a literal declaration.
//! - Persisted state is a few integers regardless of buffer or literal size.
//!
//! Example (declaration split across feeds)
//! ```rust
//! use imap_framing::LiteralFramer;
//!
//! let mut framer = LiteralFramer::new();
//! let mut buffer = Vec::new();
//! let mut owed = 0;
//! for byte in b"A1 LOGIN {1}\r\n" {
//!     buffer.push(*byte);
//!     owed += framer.scan(&buffer).synchronizing_literal_count;
//! }
//! assert_eq!(owed, 1);
//! assert!(framer.is_in_literal());
//! ```

use bstr::ByteSlice;
use tracing::{debug, trace};

use crate::{FramingError, FramingOptions, literal::parse_literal_decl};

/// Outcome of one [`LiteralFramer::scan`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FramingResult {
    /// Leading bytes of the current buffer that a decoder may parse now.
    pub maximum_valid_bytes: usize,
    /// Synchronizing literals recognised during this call only.
    pub synchronizing_literal_count: usize,
}

/// Incremental line and literal scanner for one byte stream.
///
/// Typical loop:
/// ```ignore
/// loop {
///     buffer.extend_from_slice(&read_some()?);
///     let framed = framer.scan(&buffer);
///     for _ in 0..framed.synchronizing_literal_count {
///         send_continuation()?;
///     }
///     let used = decoder.decode(&buffer[..framed.maximum_valid_bytes])?;
///     buffer.drain(..used);
///     framer.consume(used);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LiteralFramer {
    options: FramingOptions,
    // Bytes from the buffer start that are classified.
    cursor: usize,
    // Payload bytes still to skip before line scanning resumes.
    literal_remaining: u64,
    // Bytes past `cursor` known to hold no line terminator.
    line_probe: usize,
}

/// A terminated line located relative to the buffer start.
struct LineSpan {
    content_end: usize,
    line_end: usize,
}

impl LiteralFramer {
    /// Creates a framer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a framer with the given options.
    #[must_use]
    pub fn with_options(options: FramingOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// The options this framer was created with.
    #[must_use]
    pub fn options(&self) -> &FramingOptions {
        &self.options
    }

    /// Bytes from the current buffer start that have been classified, equal
    /// to the most recent `maximum_valid_bytes` less any consumption since.
    #[must_use]
    pub fn framed_bytes(&self) -> usize {
        self.cursor
    }

    /// Payload bytes of the current literal that have not arrived yet.
    #[must_use]
    pub fn pending_literal_bytes(&self) -> u64 {
        self.literal_remaining
    }

    /// Returns `true` while the framer is skipping literal payload.
    #[must_use]
    pub fn is_in_literal(&self) -> bool {
        self.literal_remaining > 0
    }

    /// Forgets all stream state, keeping the options.
    pub fn reset(&mut self) {
        *self = Self::with_options(self.options);
    }

    /// Classifies as much of `buffer` as is decidable.
    ///
    /// `buffer` must hold every byte received since the last [`consume`], in
    /// order; the framer resumes where the previous call stopped. Calling
    /// again without new bytes is harmless.
    ///
    /// [`consume`]: Self::consume
    pub fn scan(&mut self, buffer: &[u8]) -> FramingResult {
        debug_assert!(
            self.cursor <= buffer.len(),
            "buffer shrank below the framed prefix"
        );

        let mut synchronizing_literal_count = 0;
        loop {
            if self.literal_remaining > 0 {
                let available = buffer.len().saturating_sub(self.cursor);
                let take = usize::try_from(self.literal_remaining)
                    .map_or(available, |remaining| remaining.min(available));
                self.cursor += take;
                self.literal_remaining -= take as u64;
                if self.literal_remaining > 0 {
                    break;
                }
                trace!(end = self.cursor, "literal payload complete");
            }

            let Some(line) = self.next_line(buffer) else {
                break;
            };
            let start = self.cursor;
            self.cursor = line.line_end;

            let content = &buffer[start..line.content_end];
            match parse_literal_decl(content) {
                Some(decl) => {
                    debug!(
                        length = decl.length,
                        kind = ?decl.kind,
                        binary = decl.binary,
                        end = self.cursor,
                        "literal declaration"
                    );
                    if decl.is_synchronizing() {
                        synchronizing_literal_count += 1;
                    }
                    self.literal_remaining = decl.length;
                }
                None => {
                    trace!(start, end = self.cursor, line = %content.as_bstr(), "line");
                }
            }
        }

        FramingResult {
            maximum_valid_bytes: self.cursor,
            synchronizing_literal_count,
        }
    }

    /// Records that the caller removed the first `n` bytes of its buffer.
    ///
    /// `n` should not exceed [`framed_bytes`](Self::framed_bytes); larger
    /// values are clamped and leave the framer out of step with the stream.
    /// Use [`try_consume`](Self::try_consume) to have that checked.
    pub fn consume(&mut self, n: usize) {
        let excess = n.saturating_sub(self.cursor);
        self.cursor = self.cursor.saturating_sub(n);
        self.line_probe = self.line_probe.saturating_sub(excess);
    }

    /// Like [`consume`](Self::consume), but rejects consuming bytes that were
    /// never framed.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::ConsumeBeyondFrame`] if `n` exceeds
    /// [`framed_bytes`](Self::framed_bytes). The framer is left unchanged.
    pub fn try_consume(&mut self, n: usize) -> Result<(), FramingError> {
        if n > self.cursor {
            return Err(FramingError::ConsumeBeyondFrame {
                requested: n,
                framed: self.cursor,
            });
        }
        self.consume(n);
        Ok(())
    }

    /// Finds the next terminated line starting at the cursor.
    ///
    /// On failure, remembers how far the search got so the next call only
    /// looks at new bytes.
    fn next_line(&mut self, buffer: &[u8]) -> Option<LineSpan> {
        let start = self.cursor;
        let mut from = start + self.line_probe;

        while let Some(offset) = buffer.get(from..).and_then(|rest| rest.find_byte(b'\n')) {
            let lf = from + offset;
            let crlf = lf > start && buffer[lf - 1] == b'\r';
            if crlf || !self.options.strict_crlf {
                self.line_probe = 0;
                return Some(LineSpan {
                    content_end: if crlf { lf - 1 } else { lf },
                    line_end: lf + 1,
                });
            }
            from = lf + 1;
        }

        self.line_probe = buffer.len().saturating_sub(start);
        None
    }
}
