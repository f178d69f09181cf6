use std::io::Cursor;
use std::path::Path;

use assert_matches::assert_matches;
use webpeek::parse::ParseError;
use webpeek::{is_webp_animated_path, is_webp_animated_with_config, try_is_webp_animated, Config, Error, FlagByte};
use webpeek_common_test::{init_logger, TestType};

fn configs() -> [Config; 2] {
    [FlagByte::Trailing, FlagByte::Vp8x].map(|flag_byte| Config::builder().flag_byte(flag_byte).build())
}

#[test]
fn test_data() {
    let visited = webpeek_common_test::test_data(".webp", |test_type, name, data| {
        for config in configs() {
            let animated = is_webp_animated_with_config(Cursor::new(data), config.clone());
            match test_type {
                TestType::Animated => assert!(animated, "{name} not detected as animated with {config:?}"),
                TestType::Still | TestType::Other => {
                    assert!(!animated, "{name} detected as animated with {config:?}")
                }
            }
        }
        match test_type {
            TestType::Animated => assert!(try_is_webp_animated(Cursor::new(data)).unwrap()),
            TestType::Still => assert!(!try_is_webp_animated(Cursor::new(data)).unwrap()),
            TestType::Other => match name {
                "empty.webp" | "truncated.webp" => {
                    assert_matches!(try_is_webp_animated(Cursor::new(data)), Err(Error::Parse(err)) => {
                        assert_matches!(err.get_ref(), ParseError::TruncatedChunk, "{name}: {err:?}");
                    });
                }
                _ => assert_matches!(try_is_webp_animated(Cursor::new(data)), Ok(false), "{name}"),
            },
        }
    });
    assert_ne!(visited, 0, "no test data found");
}

#[test]
fn test_data_paths() {
    init_logger();
    let test_data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../test-data");
    assert!(is_webp_animated_path(test_data.join("animated/anim.webp")));
    assert!(!is_webp_animated_path(test_data.join("still/vp8x-lossless.webp")));
    assert!(!is_webp_animated_path(test_data.join("other/empty.webp")));
    assert!(!is_webp_animated_path(test_data.join("other/missing.webp")));
}
