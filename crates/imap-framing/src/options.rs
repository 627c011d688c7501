/// Configuration options for [`LiteralFramer`](crate::LiteralFramer).
///
/// # Examples
///
/// ```rust
/// use imap_framing::{FramingOptions, LiteralFramer};
///
/// let framer = LiteralFramer::with_options(FramingOptions {
///     strict_crlf: true,
///     ..Default::default()
/// });
/// assert!(framer.options().strict_crlf);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FramingOptions {
    /// Whether only CRLF terminates a line.
    ///
    /// By default a line feed ends a line whether or not it is preceded by a
    /// carriage return, which tolerates clients that send bare LF. When
    /// `true`, a bare LF is treated as ordinary line content and scanning
    /// continues until a CRLF pair is seen.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_crlf: bool,
}
