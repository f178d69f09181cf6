//! Chunk types, layout constants and errors for parsing WebP headers.

pub mod error;
mod header;
mod vp8x;

pub use error::ParseError;
pub use header::{chunk_type, RIFF_HEADER_LEN, WEBP};
pub use vp8x::{FlagByte, Vp8xFlags, ANIMATION_FLAG_INDEX, VP8X_FIELDS_LEN};

pub use webpeek_common::parse::FourCC;
