//! Incremental framing for IMAP-style command streams.
//!
//! Commands are CRLF-terminated lines, except where a line ends in a literal
//! declaration (`{N}`, `{N+}`, `~{N}`): the next `N` bytes are opaque payload
//! and may contain line breaks. [`LiteralFramer`] is fed the receive buffer
//! after every append and answers two questions:
//!
//! - how many leading bytes a command decoder may safely look at, and
//! - how many synchronizing literals were discovered, each of which obliges
//!   the receiver to send a continuation before the payload will arrive.
//!
//! ```rust
//! use imap_framing::LiteralFramer;
//!
//! let mut framer = LiteralFramer::new();
//! let mut buffer = b"A1 LOGIN {5}\r\n".to_vec();
//!
//! let result = framer.scan(&buffer);
//! assert_eq!(result.maximum_valid_bytes, buffer.len());
//! assert_eq!(result.synchronizing_literal_count, 1);
//!
//! // After the continuation was sent the client transmits the payload.
//! buffer.extend_from_slice(b"alice secret\r\n");
//! let result = framer.scan(&buffer);
//! assert_eq!(result.maximum_valid_bytes, buffer.len());
//! assert_eq!(result.synchronizing_literal_count, 0);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "buffered")]
mod buffered;
mod error;
mod framer;
mod literal;
mod options;

#[cfg(test)]
mod tests;

#[cfg(feature = "buffered")]
pub use buffered::FramedBuffer;
pub use error::FramingError;
pub use framer::{FramingResult, LiteralFramer};
pub use literal::{LiteralDecl, LiteralKind, parse_literal_decl};
pub use options::FramingOptions;
