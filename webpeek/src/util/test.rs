
use bytes::BufMut;
use webpeek_common::parse::FourCC;

use crate::parse::chunk_type::{ANIM, ANMF, VP8X};

use webp::{TestFileHeaderSpecBuilder, TestVp8xSpecBuilder, TestWebp, TestWebpBuilder};

pub fn test_header() -> TestFileHeaderSpecBuilder {
    Default::default()
}

pub fn test_vp8x() -> TestVp8xSpecBuilder {
    Default::default()
}

pub fn test_webp() -> TestWebpBuilder {
    Default::default()
}

/// Lay out 12 filler bytes, `tag`, 12 more filler bytes, then `word`.
pub fn test_layout(tag: &[u8; 4], word: [u8; 4]) -> TestWebp {
    let mut data = vec![];
    data.put_bytes(0xaa, 12);
    FourCC::from(*tag).put_buf(&mut data);
    data.put_bytes(0x55, 12);
    data.extend_from_slice(&word);
    TestWebp::from(data)
}

pub fn write_test_chunk(out: &mut Vec<u8>, name: FourCC, data: &[u8]) {
    name.put_buf(&mut *out);
    out.put_u32_le(data.len() as u32);
    out.extend_from_slice(data);
    if data.len() % 2 == 1 {
        out.put_u8(0);
    }
}

pub fn write_test_anim(out: &mut Vec<u8>) {
    ANIM.put_buf(&mut *out);
    out.put_u32_le(6);
    out.put_u32_le(0xFACEC4FE);
    out.put_u16_le(0xF00F);
}

pub fn write_test_anmf(out: &mut Vec<u8>, width: u32, height: u32, data: &[u8]) {
    ANMF.put_buf(&mut *out);
    out.put_u32_le(16 + data.len() as u32);
    out.put_uint_le(0, 3);
    out.put_uint_le(0, 3);
    out.put_uint_le(width.into(), 3);
    out.put_uint_le(height.into(), 3);
    out.put_uint_le(0xC0FFEE, 3);
    out.put_u8(0);
    out.extend_from_slice(data);
}

pub fn write_test_vp8x(out: &mut Vec<u8>, flags: u8, width: u32, height: u32) {
    VP8X.put_buf(&mut *out);
    out.put_u32_le(10);
    out.push(flags);
    out.extend_from_slice(&[0; 3]);
    assert!(width < 2u32.pow(24));
    out.put_uint_le(width.into(), 3);
    assert!(height < 2u32.pow(24));
    out.put_uint_le(height.into(), 3);
}
