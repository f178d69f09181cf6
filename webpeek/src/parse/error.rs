//! Error types returned by the header probes.

use derive_more::Display;
use webpeek_common::error::ReportableError;
use webpeek_common::parse::FourCC;

/// Error type returned by the WebP header probes.
///
/// Only the layout the probes rely on is checked, so the single failure mode is running out of input.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ParseError {
    /// The input ended before a chunk tag or header word could be read in full.
    ///
    /// This covers empty inputs and inputs shorter than the header fields being probed.
    #[error("Truncated chunk")]
    TruncatedChunk,
}

#[derive(Clone, Copy, Debug, Display)]
#[display(fmt = "while parsing `{}` chunk", _0)]
pub(crate) struct WhileParsingChunk(pub(crate) FourCC);

#[derive(Clone, Copy, Debug, Display)]
#[display(fmt = "read {} of {} bytes at offset 0x{:08x}", read, expected, offset)]
pub(crate) struct ShortRead {
    pub(crate) read: usize,
    pub(crate) expected: usize,
    pub(crate) offset: u64,
}

impl ReportableError for ParseError {
    #[cfg(feature = "error-detail")]
    type Stack = webpeek_common::error::ReportStack;
    #[cfg(not(feature = "error-detail"))]
    type Stack = webpeek_common::error::NullReportStack;
}
