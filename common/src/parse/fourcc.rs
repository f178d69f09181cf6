use std::fmt;

use bytes::{Buf, BufMut};

/// A four-byte character code, as used to tag RIFF chunks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FourCC {
    /// The character code, as an array of four bytes.
    pub value: [u8; 4],
}

impl FourCC {
    /// The encoded length of a [`FourCC`], in bytes.
    pub const ENCODED_LEN: u32 = 4;

    /// Construct a [`FourCC`] from a string, padding it with spaces to four bytes.
    ///
    /// # Panics
    ///
    /// This function panics if `name` is longer than four bytes.
    pub const fn from_str(name: &str) -> Self {
        let name = name.as_bytes();
        let mut fourcc = [b' '; 4];
        let mut name_idx = 0;
        while name_idx < name.len() {
            fourcc[name_idx] = name[name_idx];
            name_idx += 1;
        }
        FourCC { value: fourcc }
    }

    /// Parse a [`FourCC`] from a [`Buf`].
    ///
    /// The position of `input` is advanced by 4.
    ///
    /// # Panics
    ///
    /// This function panics if `input.remaining() < 4`.
    pub fn parse<B: Buf>(mut input: B) -> Self {
        let mut value = [0; 4];
        input.copy_to_slice(&mut value);
        Self { value }
    }

    /// Writes `self` to the [`BufMut`] `out`.
    pub fn put_buf<B: BufMut>(&self, mut out: B) {
        out.put(&self.value[..])
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(value: [u8; 4]) -> Self {
        Self { value }
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.value) {
            Ok(string) if string.bytes().all(|byte| byte.is_ascii_graphic() || byte == b' ') => {
                write!(f, "{}", string.trim())
            }
            _ => write!(f, "0x{:08x}", u32::from_be_bytes(self.value)),
        }
    }
}
