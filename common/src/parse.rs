//! Primitive types for parsing RIFF headers.

mod fourcc;

pub use fourcc::FourCC;
