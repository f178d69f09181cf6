use std::fs;
use std::io;
use std::io::Read;

use libflate::gzip;

//
// public types
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestType {
    /// Animated WebP files.
    Animated,
    /// WebP files with a single still frame.
    Still,
    /// Inputs which are not extended format WebP files, or are damaged.
    Other,
}

//
// private types
//

struct TestDirSpec {
    path: &'static str,
    test_type: TestType,
}

fn gunzip(input: &[u8]) -> Vec<u8> {
    let mut decoder = gzip::Decoder::new(input).unwrap();
    let mut data = Vec::new();
    decoder.read_to_end(&mut data).unwrap();
    data
}

macro_rules! test_dir {
    ($name:literal, $test_type:ident) => {
        $crate::TestDirSpec {
            path: concat!(env!("CARGO_MANIFEST_DIR"), "/../test-data/", $name),
            test_type: TestType::$test_type,
        }
    };
}

const TEST_DATA_DIRS: &[TestDirSpec] = &[
    test_dir!("animated", Animated),
    test_dir!("still", Still),
    test_dir!("other", Other),
];

//
// public functions
//

pub fn init_logger() {
    // Ignore errors initializing the logger if tests race to configure it
    let _ignore = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .is_test(true)
        .try_init();
}

/// Call `detect` on every file under `test-data/` ending in `ext` or `ext.gz`, returning how many were visited.
pub fn test_data<F: FnMut(TestType, &str, &[u8])>(ext: &str, mut detect: F) -> usize {
    init_logger();
    let ext_gz = ext.to_string() + ".gz";
    let mut visited = 0;
    for dir_spec in TEST_DATA_DIRS {
        let dir_entries = match fs::read_dir(dir_spec.path) {
            Ok(dir_entries) => dir_entries,
            Err(err) => match err.kind() {
                io::ErrorKind::NotFound => continue,
                _ => panic!("could not read test data directory: {err}"),
            },
        };

        for dir_entry in dir_entries.map(Result::unwrap) {
            let file_name = dir_entry.file_name().to_string_lossy().into_owned();
            let data = match &file_name {
                name if name.ends_with(ext) => Some(fs::read(dir_entry.path()).unwrap()),
                name if name.ends_with(&ext_gz) => Some(gunzip(&fs::read(dir_entry.path()).unwrap())),
                _ => None,
            };
            if let Some(data) = data {
                log::info!("running test on {:?} input: {file_name:?}", dir_spec.test_type);
                detect(dir_spec.test_type, &file_name, &data[..]);
                visited += 1;
            }
        }
    }
    visited
}
