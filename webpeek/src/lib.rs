#![warn(missing_docs)]

//! `webpeek` answers questions about WebP files by reading as little of their header as possible.
//!
//! The main entry point is [`is_webp_animated`], which reports whether an input is an animated WebP image. It never
//! fails: inputs which are empty, truncated, unreadable, or not WebP at all are reported as not animated. The input is
//! always [closed](Close) before it returns.
//!
//! # Usage
//!
//! The input must implement [`Read`] + [`Skip`] + [`Close`]. [`Skip`] represents a subset of the [`Seek`] trait; an
//! input stream which can be skipped forward, but not necessarily seeked to arbitrary positions. [`Close`] releases the
//! input, reporting any failure to do so.
//!
//! ```
//! let example_input = b"RIFF\x1a\0\0\0WEBPVP8X\x0a\0\0\0\x02\0\0\0\0\0\0\0\0\0ANIM";
//! assert!(webpeek::is_webp_animated(std::io::Cursor::new(example_input)));
//! ```
//!
//! When the reason for a negative answer matters, [`try_is_webp_animated`] distinguishes a confirmed still image from
//! an input which could not be read:
//!
//! ```
//! let truncated_input = b"RIFF\x1a\0\0\0WEBPVP8X\x0a\0";
//! let result = webpeek::try_is_webp_animated(std::io::Cursor::new(truncated_input));
//! assert!(matches!(result, Err(webpeek::Error::Parse(_))));
//! ```
//!
//! [`Seek`]: std::io::Seek

pub mod parse;
mod reader;
mod util;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use derive_builder::Builder;
use webpeek_common::ResultExt;

use crate::parse::chunk_type::VP8X;
use crate::parse::error::WhileParsingChunk;
use crate::parse::{FourCC, ParseError, Vp8xFlags, RIFF_HEADER_LEN};
use crate::reader::HeaderReader;

//
// public types
//

/// Error type returned by `webpeek`.
pub type Error = webpeek_common::error::Error<ParseError>;

#[derive(Builder, Clone, Debug)]
#[builder(build_fn(name = "try_build"))]
/// Configuration for the WebP header probes.
pub struct Config {
    /// Which header byte is tested for the animation flag.
    ///
    /// The default is [`FlagByte::Trailing`].
    #[builder(default)]
    pub flag_byte: FlagByte,
}

pub use parse::{FlagByte, ANIMATION_FLAG_INDEX};
pub use webpeek_common::{Close, ReadSkipAdapter, Report, SeekSkipAdapter, Skip};

/// Number of bytes covering every header field read by the probes.
pub const PROBE_LEN: usize = 32;

//
// public functions
//

/// Returns whether `input` is an animated WebP image.
///
/// `input` is consumed and always [closed](Close) before returning. Any failure, whether reading the input or closing
/// it, results in `false`; see [`try_is_webp_animated`] to observe errors instead.
///
/// See the [module-level documentation](self) for usage examples.
pub fn is_webp_animated<R: Read + Skip + Close>(input: R) -> bool {
    is_webp_animated_with_config(input, Config::default())
}

/// Returns whether `input` is an animated WebP image, with the given [`Config`].
///
/// `input` is consumed and always [closed](Close) before returning. Any failure, whether reading the input or closing
/// it, results in `false`.
pub fn is_webp_animated_with_config<R: Read + Skip + Close>(mut input: R, config: Config) -> bool {
    let animated = match try_is_webp_animated_with_config(&mut input, config) {
        Ok(animated) => animated,
        Err(err) => {
            log::debug!("treating input as not animated: {err}\n{err:?}");
            false
        }
    };

    if let Err(err) = input.close() {
        log::warn!("error closing input: {err}");
    }

    animated
}

/// Returns whether `input` is an animated WebP image, or the reason it could not be determined.
///
/// Unlike [`is_webp_animated`], `input` is not [closed](Close); it is dropped, or can be passed by `&mut` reference to
/// be reused.
///
/// # Errors
///
/// If `input` ends before the first chunk tag or the tested `VP8X` byte, an [`Error::Parse`] containing
/// [`ParseError::TruncatedChunk`] is returned. If an IO error occurs, an [`Error::Io`] is returned.
///
/// An input whose first chunk is not `VP8X` is not an error: simple format WebP files cannot be animated, so `false`
/// is returned.
pub fn try_is_webp_animated<R: Read + Skip>(input: R) -> Result<bool, Error> {
    try_is_webp_animated_with_config(input, Config::default())
}

/// Returns whether `input` is an animated WebP image, with the given [`Config`], or the reason it could not be
/// determined.
///
/// # Errors
///
/// See [`try_is_webp_animated`].
pub fn try_is_webp_animated_with_config<R: Read + Skip>(input: R, config: Config) -> Result<bool, Error> {
    let mut reader = HeaderReader::new(input);

    // The RIFF length and form type are not validated.
    reader.skip(RIFF_HEADER_LEN)?;

    let offset = reader.offset();
    let tag = reader.read_word().attach_printable("while reading first chunk tag")?;
    let name = FourCC::parse(&tag[..]);
    log::debug!("{name} @ 0x{offset:08x}");
    if name != VP8X {
        return Ok(false);
    }

    let flag_byte = config.flag_byte;
    reader.skip(flag_byte.skip_len())?;
    let offset = reader.offset();
    let word = reader.read_word().attach_printable(WhileParsingChunk(VP8X))?;
    let flags = Vp8xFlags::from_word(word, flag_byte);
    log::debug!(
        "{name} @ 0x{offset:08x}: word {word:02x?}, tested byte @ 0x{flag_offset:08x}: {flags:08b}",
        flag_offset = flag_byte.offset(),
    );

    Ok(flags.contains(Vp8xFlags::IS_ANIMATED))
}

/// Returns whether the file at `path` is an animated WebP image.
///
/// A file which cannot be opened is reported as not animated.
pub fn is_webp_animated_path<P: AsRef<Path>>(path: P) -> bool {
    is_webp_animated_path_with_config(path, Config::default())
}

/// Returns whether the file at `path` is an animated WebP image, with the given [`Config`].
///
/// A file which cannot be opened is reported as not animated.
pub fn is_webp_animated_path_with_config<P: AsRef<Path>>(path: P, config: Config) -> bool {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => is_webp_animated_with_config(BufReader::with_capacity(PROBE_LEN, file), config),
        Err(err) => {
            log::debug!("treating {path:?} as not animated: error opening file: {err}");
            false
        }
    }
}

/// Returns whether `path` has a `.webp` extension, ignoring case.
pub fn has_webp_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("webp"))
        .unwrap_or(false)
}

//
// Config impls
//

impl Config {
    /// Construct a builder for `Config`.
    ///
    /// See the documentation for [`ConfigBuilder`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

//
// ConfigBuilder impls
//

impl ConfigBuilder {
    /// Build a new [`Config`].
    pub fn build(&self) -> Config {
        self.try_build()
            .unwrap_or_else(|err| unreachable!("every config field has a default: {err}"))
    }
}

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub mod readme {}
