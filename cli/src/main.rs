use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser as _, ValueEnum};
use webpeek::{Config, FlagByte, ReadSkipAdapter, PROBE_LEN};

#[derive(clap::Parser)]
struct Args {
    /// Which header byte is tested for the animation flag.
    #[clap(long, value_enum, default_value_t = FlagByteArg::Trailing)]
    flag_byte: FlagByteArg,

    /// Report files which could not be read as errors, instead of as static.
    #[clap(long)]
    strict: bool,

    /// Skip files without a `.webp` extension.
    #[clap(long)]
    webp_only: bool,

    /// Paths to the files to test. `-` reads standard input.
    #[clap(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FlagByteArg {
    /// The byte at file offset 31.
    Trailing,
    /// The VP8X chunk's flags byte, at file offset 20.
    Vp8x,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()
        .context("Error initializing logging")?;

    let args = Args::try_parse().context("Error parsing command line arguments")?;

    let config = Config::builder().flag_byte(args.flag_byte.into()).build();

    let mut failures = 0;
    for path in &args.files {
        if args.webp_only && !is_stdin(path) && !webpeek::has_webp_extension(path) {
            log::info!("skipping {path:?}: not a .webp file");
            continue;
        }

        let animated = if args.strict {
            match detect_strict(path, config.clone()) {
                Ok(animated) => animated,
                Err(err) => {
                    log::error!("{path:?}: {err:?}");
                    failures += 1;
                    continue;
                }
            }
        } else if is_stdin(path) {
            webpeek::is_webp_animated_with_config(ReadSkipAdapter::new(io::stdin().lock()), config.clone())
        } else {
            webpeek::is_webp_animated_path_with_config(path, config.clone())
        };

        let description = if animated { "animated" } else { "static" };
        println!("{}: {description}", path.display());
    }

    if failures != 0 {
        anyhow::bail!("{failures} of {} files could not be inspected", args.files.len());
    }
    Ok(())
}

fn detect_strict(path: &Path, config: Config) -> Result<bool, anyhow::Error> {
    let animated = if is_stdin(path) {
        webpeek::try_is_webp_animated_with_config(ReadSkipAdapter::new(io::stdin().lock()), config)
            .context("Error reading standard input")?
    } else {
        let file = File::open(path).context("Error opening file")?;
        webpeek::try_is_webp_animated_with_config(BufReader::with_capacity(PROBE_LEN, file), config)
            .context("Error reading webp header")?
    };
    Ok(animated)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

impl From<FlagByteArg> for FlagByte {
    fn from(arg: FlagByteArg) -> Self {
        match arg {
            FlagByteArg::Trailing => FlagByte::Trailing,
            FlagByteArg::Vp8x => FlagByte::Vp8x,
        }
    }
}
