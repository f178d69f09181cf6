use std::io;
use std::io::Read;

use webpeek_common::{ensure_attach, Skip};

use crate::parse::error::ShortRead;
use crate::parse::ParseError;
use crate::Error;

/// A forward-only cursor over the header of a WebP input.
///
/// Skips are trusted: the tracked offset advances by the requested amount even if the input ended early, in which
/// case the next [`read_word`](Self::read_word) comes up short.
pub struct HeaderReader<R> {
    inner: R,
    offset: u64,
}

//
// HeaderReader impls
//

impl<R: Read + Skip> HeaderReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn skip(&mut self, amount: u64) -> Result<(), Error> {
        self.inner.skip(amount)?;
        self.offset = self.offset.saturating_add(amount);
        Ok(())
    }

    /// Read a four byte word, failing with [`ParseError::TruncatedChunk`] if the input has fewer bytes left.
    pub fn read_word(&mut self) -> Result<[u8; 4], Error> {
        let mut word = [0; 4];
        let offset = self.offset;
        let read = read_up_to(&mut self.inner, &mut word)?;
        self.offset += read as u64;
        ensure_attach!(
            read == word.len(),
            ParseError::TruncatedChunk,
            ShortRead { read, expected: word.len(), offset },
        );
        Ok(word)
    }
}

/// Fill as much of `buf` as possible before the input ends, returning the amount read.
fn read_up_to<R: Read>(mut input: R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => (),
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use assert_matches::assert_matches;

    use super::*;

    /// Returns at most one byte per read, interrupting every other call.
    struct TrickleInput<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for TrickleInput<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::ErrorKind::Interrupted.into());
            }
            let len = buf.len().min(self.data.len()).min(1);
            buf[..len].copy_from_slice(&self.data[..len]);
            self.data = &self.data[len..];
            Ok(len)
        }
    }

    #[test]
    fn read_up_to_partial_reads() {
        let input = TrickleInput { data: b"VP8X", interrupt: false };
        let mut buf = [0; 4];
        assert_eq!(read_up_to(input, &mut buf).unwrap(), 4);
        assert_eq!(&buf, b"VP8X");
    }

    #[test]
    fn read_up_to_eof() {
        let mut buf = [0; 4];
        assert_eq!(read_up_to(&b"VP"[..], &mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"VP");
    }

    #[test]
    fn read_word_tracks_offset() {
        let mut reader = HeaderReader::new(Cursor::new(b"RIFF\0\0\0\0WEBPVP8X"));
        reader.skip(12).unwrap();
        assert_eq!(reader.offset(), 12);
        assert_eq!(&reader.read_word().unwrap(), b"VP8X");
        assert_eq!(reader.offset(), 16);
    }

    #[test]
    fn read_word_truncated() {
        let mut reader = HeaderReader::new(Cursor::new(b"RIFF\0\0\0\0WEBPVP"));
        reader.skip(12).unwrap();
        assert_matches!(reader.read_word(), Err(Error::Parse(err)) => {
            assert_matches!(err.get_ref(), ParseError::TruncatedChunk);
            if cfg!(feature = "error-detail") {
                assert!(format!("{err:?}").contains("read 2 of 4 bytes at offset 0x0000000c"), "{err:?}");
            }
        });
    }

    #[test]
    fn skip_past_end() {
        let mut reader = HeaderReader::new(Cursor::new(b"RIFF"));
        reader.skip(12).unwrap();
        assert_eq!(reader.offset(), 12);
        assert_matches!(reader.read_word(), Err(Error::Parse(_)));
    }
}
