use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use webpeek::{is_webp_animated_with_config, Config, FlagByte};

criterion_group!(benches, detect);
criterion_main!(benches);

const ANIMATED: &[u8] = b"RIFF\x1a\0\0\0WEBPVP8X\x0a\0\0\0\x02\0\0\0\0\0\0\0\0\0ANIM\x06\0\0\0\0\0\0\0\0\0";
const SIMPLE: &[u8] = b"RIFF\x14\0\0\0WEBPVP8L\x08\0\0\0\x2f\0\0\0\0\x88\x88\x08";

pub fn detect(c: &mut Criterion) {
    let mut detect = c.benchmark_group("is_webp_animated");
    for (name, flag_byte) in [("trailing", FlagByte::Trailing), ("vp8x", FlagByte::Vp8x)] {
        let config = Config::builder().flag_byte(flag_byte).build();
        detect.bench_function(format!("{name}/animated"), |b| {
            b.iter(|| is_webp_animated_with_config(Cursor::new(black_box(ANIMATED)), config.clone()))
        });
        detect.bench_function(format!("{name}/simple"), |b| {
            b.iter(|| is_webp_animated_with_config(Cursor::new(black_box(SIMPLE)), config.clone()))
        });
    }
    detect.finish();
}
