use thiserror::Error;

/// Misuse reported by the checked entry points.
///
/// Scanning itself never fails: text that does not match the literal grammar
/// is ordinary line content, not an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingError {
    /// The caller tried to consume bytes that were never exposed as framed.
    #[error("cannot consume {requested} bytes, only {framed} are framed")]
    ConsumeBeyondFrame {
        /// Number of bytes the caller asked to consume.
        requested: usize,
        /// Number of bytes the framer has classified so far.
        framed: usize,
    },
    /// A continuation was acknowledged while none was owed.
    #[error("no continuation is owed")]
    NoContinuationOwed,
}
