use super::FourCC;

macro_rules! chunk_type {
    ($($code:ident),+ $(,)?) => {
        /// RIFF chunk types defined by the WebP container format.
        pub mod chunk_type {
            use super::*;
            $(
                #[doc = concat!("The `", stringify!($code), "` chunk type.")]
                pub const $code: FourCC = FourCC::from_str(stringify!($code));
            )+
        }
    };
}

chunk_type!(ALPH, ANIM, ANMF, EXIF, ICCP, RIFF, VP8, VP8L, VP8X, XMP);

/// The RIFF form type identifying a WebP file.
pub const WEBP: FourCC = FourCC::from_str("WEBP");

/// Length of the RIFF file header: the `RIFF` tag, the file length, and the [`WEBP`] form type.
pub const RIFF_HEADER_LEN: u64 = 12;
