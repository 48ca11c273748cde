//! Shell entrypoint.
//!
//! Resolves the configuration, installs logging on stderr and runs the
//! selected mode: the interactive parse REPL, the token dumper, or a
//! one-shot parse of a file.

use std::{fs, io, path::Path, process::ExitCode};

use interpreter::{
    config::{Mode, ShellConfig, USAGE},
    repl,
};
use log::{error, info};
use tracing_subscriber::filter::LevelFilter;

fn main() -> ExitCode {
    let config = match ShellConfig::detect() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}\n{}", err, USAGE);
            return ExitCode::from(1);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_max_level(tracing_level(config.log_level))
        .init();

    info!("starting in {:?} mode", config.mode);

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::from(1)
        }
    }
}

fn run(config: &ShellConfig) -> io::Result<bool> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match &config.mode {
        Mode::Repl => {
            repl::start(stdin, &mut stdout, &config.prompt)?;
            Ok(true)
        }
        Mode::Tokens(None) => {
            repl::start_token_dump(stdin, &mut stdout, &config.prompt)?;
            Ok(true)
        }
        Mode::Tokens(Some(path)) => {
            let source = fs::read_to_string(path)?;
            repl::dump_tokens(source, Some(file_name(path)), &mut stdout)?;
            Ok(true)
        }
        Mode::Parse(path) => {
            let source = fs::read_to_string(path)?;
            repl::parse_source(source, file_name(path), &mut stdout)
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn tracing_level(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}
