use alloc::vec::Vec;

use bstr::{BStr, ByteSlice};
use tracing::trace;

use crate::{FramingError, FramingOptions, FramingResult, LiteralFramer};

/// Receive buffer layered over a [`LiteralFramer`].
///
/// The framer only reads a caller-owned buffer; this adapter owns one, keeps
/// the framer in step with it, and tracks how many continuations the
/// transport still has to send.
///
/// ```rust
/// use imap_framing::FramedBuffer;
///
/// let mut buffer = FramedBuffer::default();
/// buffer.feed(b"A1 LOGIN {5}\r\n");
/// assert_eq!(buffer.continuations_owed(), 1);
/// buffer.acknowledge_continuation().unwrap();
///
/// buffer.feed(b"alice {6+}\r\nsecret\r\n");
/// assert_eq!(buffer.decodable(), "A1 LOGIN {5}\r\nalice {6+}\r\nsecret\r\n");
///
/// let len = buffer.decodable().len();
/// buffer.consume(len).unwrap();
/// assert!(buffer.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FramedBuffer {
    bytes: Vec<u8>,
    framer: LiteralFramer,
    continuations_owed: usize,
}

impl FramedBuffer {
    /// Creates an empty buffer whose framer uses `options`.
    #[must_use]
    pub fn new(options: FramingOptions) -> Self {
        Self {
            bytes: Vec::new(),
            framer: LiteralFramer::with_options(options),
            continuations_owed: 0,
        }
    }

    /// Appends received bytes and rescans.
    ///
    /// Synchronizing literals found by this call are added to
    /// [`continuations_owed`](Self::continuations_owed).
    pub fn feed(&mut self, bytes: &[u8]) -> FramingResult {
        self.bytes.extend_from_slice(bytes);
        let result = self.framer.scan(&self.bytes);
        self.continuations_owed += result.synchronizing_literal_count;
        result
    }

    /// The leading bytes a command decoder may parse now.
    #[must_use]
    pub fn decodable(&self) -> &BStr {
        self.bytes[..self.framer.framed_bytes()].as_bstr()
    }

    /// Removes the first `n` bytes after the decoder is done with them.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::ConsumeBeyondFrame`] if `n` exceeds the
    /// decodable prefix; nothing is removed in that case.
    pub fn consume(&mut self, n: usize) -> Result<(), FramingError> {
        self.framer.try_consume(n)?;
        self.bytes.drain(..n);
        trace!(consumed = n, buffered = self.bytes.len(), "consumed");
        Ok(())
    }

    /// Continuations discovered but not yet acknowledged.
    #[must_use]
    pub fn continuations_owed(&self) -> usize {
        self.continuations_owed
    }

    /// Records that one continuation response was sent.
    ///
    /// # Errors
    ///
    /// Returns [`FramingError::NoContinuationOwed`] if none is outstanding.
    pub fn acknowledge_continuation(&mut self) -> Result<(), FramingError> {
        self.continuations_owed = self
            .continuations_owed
            .checked_sub(1)
            .ok_or(FramingError::NoContinuationOwed)?;
        Ok(())
    }

    /// Number of buffered bytes, framed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The underlying framer.
    #[must_use]
    pub fn framer(&self) -> &LiteralFramer {
        &self.framer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unframed_tail_is_not_decodable() {
        let mut buffer = FramedBuffer::default();
        buffer.feed(b"A1 NOOP\r\nA2 LOG");
        assert_eq!(buffer.decodable(), "A1 NOOP\r\n");
        assert_eq!(buffer.len(), 15);
    }

    #[test]
    fn consume_beyond_frame_keeps_bytes() {
        let mut buffer = FramedBuffer::default();
        buffer.feed(b"A1 NOOP\r\nA2 LOG");
        assert_eq!(
            buffer.consume(12),
            Err(FramingError::ConsumeBeyondFrame {
                requested: 12,
                framed: 9,
            })
        );
        assert_eq!(buffer.len(), 15);

        buffer.consume(9).unwrap();
        assert_eq!(buffer.decodable(), "");
        buffer.feed(b"IN {2}\r\n");
        assert_eq!(buffer.decodable(), "A2 LOGIN {2}\r\n");
    }

    #[test]
    fn acknowledging_without_debt_fails() {
        let mut buffer = FramedBuffer::default();
        assert_eq!(
            buffer.acknowledge_continuation(),
            Err(FramingError::NoContinuationOwed)
        );

        buffer.feed(b"A {1}\r\nx {1}\r\ny\r\n");
        assert_eq!(buffer.continuations_owed(), 2);
        buffer.acknowledge_continuation().unwrap();
        buffer.acknowledge_continuation().unwrap();
        assert_eq!(
            buffer.acknowledge_continuation(),
            Err(FramingError::NoContinuationOwed)
        );
    }

    #[test]
    fn options_reach_the_framer() {
        let buffer = FramedBuffer::new(FramingOptions { strict_crlf: true });
        assert!(buffer.framer().options().strict_crlf);
    }
}
