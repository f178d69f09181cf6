#![warn(missing_docs)]

//! `webpeek-common` is a common library shared by the `webpeek` crates.
//!
//! It defines the stream traits the header inspectors consume ([`Skip`] and [`Close`], alongside [`std::io::Read`]),
//! adapters implementing them for arbitrary [`Seek`] or [`Read`] streams, and the [`Report`] error type used to
//! describe why an inspection failed.

#[macro_use]
pub mod macros;

mod close;
pub mod error;
pub mod parse;
mod skip;

use std::io;
use std::io::{Read, Seek};

use derive_more::{Deref, DerefMut};

//
// public types
//

pub use error::{Error, Report, ResultExt};

/// A subset of the [`Seek`] trait, providing a cursor which can skip forward within a stream of bytes.
///
/// [`Skip`] is implemented for the common std input types, and can be implemented for any [`Seek`] type by wrapping
/// it in a [`SeekSkipAdapter`], or for any [`Read`] type by wrapping it in a [`ReadSkipAdapter`].
pub trait Skip {
    /// Skip an amount of bytes in a stream.
    ///
    /// A skip beyond the end of a stream is allowed, but behavior is defined by the implementation. Subsequent reads
    /// are expected to return no data.
    fn skip(&mut self, amount: u64) -> io::Result<()>;
}

/// A stream which can be explicitly released by its owner.
///
/// Closing consumes the stream, so it can happen at most once. Implementations which can observe a failure to release
/// the underlying resource report it to the caller; handles whose release is only ever done by [`Drop`] close
/// infallibly.
pub trait Close {
    /// Release the stream and any resources it holds.
    fn close(self) -> io::Result<()>;
}

/// An adapter implementing [`Skip`] for all types implementing [`Seek`].
#[derive(Clone, Copy, Debug, Default, Deref, DerefMut)]
pub struct SeekSkipAdapter<T>(pub T);

/// An adapter implementing [`Skip`] for any [`Read`] stream, by reading and discarding the skipped bytes.
///
/// This is intended for inputs which cannot be seeked, such as pipes or sockets.
#[derive(Clone, Debug, Default)]
pub struct ReadSkipAdapter<T> {
    inner: T,
    position: u64,
}

//
// SeekSkipAdapter impls
//

impl<T: Seek> Skip for SeekSkipAdapter<T> {
    fn skip(&mut self, amount: u64) -> io::Result<()> {
        match amount.try_into() {
            Ok(0) => (),
            Ok(amount) => {
                self.0.seek(io::SeekFrom::Current(amount))?;
            }
            Err(_) => {
                let stream_pos = Seek::stream_position(&mut self.0)?;
                let seek_pos = stream_pos
                    .checked_add(amount)
                    .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "seek past u64::MAX"))?;
                self.0.seek(io::SeekFrom::Start(seek_pos))?;
            }
        }
        Ok(())
    }
}

impl<T: Read> Read for SeekSkipAdapter<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl<T: Close> Close for SeekSkipAdapter<T> {
    fn close(self) -> io::Result<()> {
        self.0.close()
    }
}

//
// ReadSkipAdapter impls
//

impl<T: Read> ReadSkipAdapter<T> {
    /// Wrap a [`Read`] stream.
    pub fn new(inner: T) -> Self {
        Self { inner, position: 0 }
    }

    /// Returns the number of bytes read or skipped so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Unwrap this adapter, returning the underlying stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read> Read for ReadSkipAdapter<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.position += read as u64;
        Ok(read)
    }
}

impl<T: Read> Skip for ReadSkipAdapter<T> {
    fn skip(&mut self, amount: u64) -> io::Result<()> {
        let skipped = io::copy(&mut (&mut self.inner).take(amount), &mut io::sink())?;
        self.position += skipped;
        Ok(())
    }
}

impl<T: Close> Close for ReadSkipAdapter<T> {
    fn close(self) -> io::Result<()> {
        self.inner.close()
    }
}
