//! [`Skip`] impls for std input types.

use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, Cursor, Empty, Read};

use crate::{SeekSkipAdapter, Skip};

macro_rules! deref_skip {
    () => {
        fn skip(&mut self, amount: u64) -> io::Result<()> {
            (**self).skip(amount)
        }
    };
}

impl<T: Skip + ?Sized> Skip for &mut T {
    deref_skip!();
}

impl<T: Skip + ?Sized> Skip for Box<T> {
    deref_skip!();
}

macro_rules! skip_via_adapter {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Skip for $ty {
                fn skip(&mut self, amount: u64) -> io::Result<()> {
                    SeekSkipAdapter(self).skip(amount)
                }
            }
        )+
    };
}

skip_via_adapter!(Empty, File, &File);

impl<T: AsRef<[u8]>> Skip for Cursor<T> {
    fn skip(&mut self, amount: u64) -> io::Result<()> {
        SeekSkipAdapter(self).skip(amount)
    }
}

impl<T: Read + Skip> Skip for BufReader<T> {
    fn skip(&mut self, amount: u64) -> io::Result<()> {
        let buf_len = self.buffer().len();
        if let Some(skip_amount) = amount.checked_sub(buf_len as u64) {
            if skip_amount != 0 {
                self.get_mut().skip(skip_amount)?;
            }
        }
        self.consume(buf_len.min(amount as usize));
        Ok(())
    }
}

impl Skip for &[u8] {
    fn skip(&mut self, amount: u64) -> io::Result<()> {
        let advance_amount = self.len().min(amount.try_into().unwrap_or(usize::MAX));
        *self = &self[advance_amount..];
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn buf_reader_skip_within_buffer() {
        let mut input = BufReader::with_capacity(8, Cursor::new(b"0123456789abcdef"));
        input.fill_buf().unwrap();
        input.skip(4).unwrap();
        let mut buf = [0; 4];
        input.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"4567");
    }

    #[test]
    fn buf_reader_skip_past_buffer() {
        let mut input = BufReader::with_capacity(8, Cursor::new(b"0123456789abcdef"));
        input.fill_buf().unwrap();
        input.skip(12).unwrap();
        let mut buf = [0; 4];
        input.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"cdef");
    }

    #[test]
    fn slice_skip_past_end() {
        let mut input = &b"0123"[..];
        input.skip(12).unwrap();
        assert!(input.is_empty());
    }
}
