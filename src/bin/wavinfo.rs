//! wavinfo.rs
//!
//! Print the chunk structure and metadata of a RIFF/WAVE file.

use std::process;

extern crate wavinfo;
use wavinfo::{Config, Error, WaveInspector, EXIT_IO};

#[macro_use]
extern crate clap;
use clap::{App, Arg};

fn run(path: &str, config: &Config) -> Result<i32, Error> {
    let mut inspector = match WaveInspector::open(path) {
        Ok(inspector) => inspector,
        Err(e) => {
            eprintln!("Could not open file {}: {}", path, e);
            return Ok(EXIT_IO);
        }
    };

    let report = inspector.inspect()?;
    print!("{}", report.display(config.preview_limit));
    Ok(report.exit_code())
}

fn main() {
    let matches = App::new("wavinfo")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Show the chunk structure and metadata of a RIFF/WAVE file.")
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .help("Log container and warning details to stderr"),
        )
        .arg(
            Arg::with_name("debug")
                .long("debug")
                .short("d")
                .help("Log every chunk header to stderr"),
        )
        .arg(
            Arg::with_name("preview")
                .long("preview")
                .short("p")
                .takes_value(true)
                .value_name("BYTES")
                .help("Bytes of unrecognized chunks to show, 0 shows everything [default: 256]"),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Wave file to inspect")
                .required(true)
                .index(1),
        )
        .get_matches();

    let mut config = Config {
        verbose: matches.is_present("verbose"),
        debug: matches.is_present("debug"),
        ..Config::default()
    };

    if matches.is_present("preview") {
        let limit = value_t!(matches, "preview", usize).unwrap_or_else(|e| e.exit());
        config.preview_limit = if limit == 0 { None } else { Some(limit) };
    }

    wavinfo::init(&config);

    let path = matches.value_of("INPUT").unwrap_or_default();

    let code = match run(path, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            e.exit_code()
        }
    };

    process::exit(code);
}
