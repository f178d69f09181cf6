#![no_main]

use std::io;

use libfuzzer_sys::fuzz_target;
use webpeek::{Config, FlagByte};

fuzz_target!(|data: &[u8]| {
    for flag_byte in [FlagByte::Trailing, FlagByte::Vp8x] {
        let config = Config::builder().flag_byte(flag_byte).build();
        let animated = webpeek::is_webp_animated_with_config(io::Cursor::new(data), config.clone());
        match webpeek::try_is_webp_animated_with_config(io::Cursor::new(data), config) {
            Ok(try_animated) => assert_eq!(animated, try_animated),
            Err(error) => {
                assert!(!animated);
                match error {
                    webpeek::Error::Io(error) => panic!("in-memory input returned an io error: {error}"),
                    #[cfg_attr(not(fuzzing_repro), allow(unused))]
                    webpeek::Error::Parse(error) => {
                        #[cfg(fuzzing_repro)]
                        eprintln!("webpeek returned a parse error: {error}\n{error:?}");
                    }
                }
            }
        }
    }
});
