use super::header::RIFF_HEADER_LEN;
use super::FourCC;

bitflags::bitflags! {
    /// Feature flags carried in the first payload byte of a `VP8X` chunk.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Vp8xFlags: u8 {
        /// An `ICCP` color profile chunk is present.
        const HAS_ICCP_CHUNK = 0b0010_0000;
        /// The image has alpha.
        const HAS_ALPH_CHUNK = 0b0001_0000;
        /// An `EXIF` metadata chunk is present.
        const HAS_EXIF_CHUNK = 0b0000_1000;
        /// An `XMP ` metadata chunk is present.
        const HAS_XMP_CHUNK = 0b0000_0100;
        /// The image is animated, with `ANIM` and `ANMF` chunks following.
        const IS_ANIMATED = 0b0000_0010;
    }
}

/// Which byte of a `VP8X` header is tested for [`Vp8xFlags::IS_ANIMATED`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlagByte {
    /// The last byte of the word following the `VP8X` size and canvas fields (file offset 31).
    ///
    /// In a well-formed file this lands on the second character of the chunk after `VP8X`: the `N` of `ANIM` has
    /// the animation bit set, while the `P` of `VP8 `/`VP8L` and the `L` of `ALPH` do not. A still image followed
    /// by an `ICCP` chunk tests positive.
    #[default]
    Trailing,

    /// The `VP8X` flags byte, as laid out by the WebP container format (file offset 20).
    Vp8x,
}

/// Index of the byte tested by [`FlagByte::Trailing`] within the word it is read from.
pub const ANIMATION_FLAG_INDEX: usize = 3;

/// Bytes following the `VP8X` tag before the word tested by [`FlagByte::Trailing`]: the chunk length, flags,
/// reserved bytes, canvas width, and the first canvas height byte.
pub const VP8X_FIELDS_LEN: u64 = 12;

//
// FlagByte impls
//

impl FlagByte {
    /// Bytes to skip after the `VP8X` tag before reading the word containing the tested byte.
    pub const fn skip_len(self) -> u64 {
        match self {
            FlagByte::Trailing => VP8X_FIELDS_LEN,
            FlagByte::Vp8x => CHUNK_LEN_FIELD_LEN,
        }
    }

    /// Index of the tested byte within the word read after [`skip_len`](Self::skip_len).
    pub const fn index(self) -> usize {
        match self {
            FlagByte::Trailing => ANIMATION_FLAG_INDEX,
            FlagByte::Vp8x => 0,
        }
    }

    /// Offset of the tested byte from the start of the file.
    pub const fn offset(self) -> u64 {
        RIFF_HEADER_LEN + FourCC::ENCODED_LEN as u64 + self.skip_len() + self.index() as u64
    }
}

const CHUNK_LEN_FIELD_LEN: u64 = 4;

//
// Vp8xFlags impls
//

impl Vp8xFlags {
    /// Select the tested byte from a word read at [`FlagByte::skip_len`] past the `VP8X` tag.
    pub fn from_word(word: [u8; 4], flag_byte: FlagByte) -> Self {
        Self::from_bits_retain(word[flag_byte.index()])
    }
}
