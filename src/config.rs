//! Shell configuration.
//!
//! Settings are resolved in this order:
//!  1. Command-line arguments (`--log`, `--prompt`, the mode word)
//!  2. Environment variables (`INTERPRETER_LOG`, `INTERPRETER_PROMPT`)
//!  3. Defaults (`repl` mode, `>> ` prompt, `warn` logging)

use std::{env, path::PathBuf, str::FromStr};

use log::LevelFilter;
use thiserror::Error;

pub const LOG_ENV: &str = "INTERPRETER_LOG";
pub const PROMPT_ENV: &str = "INTERPRETER_PROMPT";
pub const DEFAULT_PROMPT: &str = ">> ";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

pub const USAGE: &str = "usage: interpreter [--log LEVEL] [--prompt TEXT] [repl | tokens [FILE] | parse FILE]";

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Read lines from stdin, print each line's parsed program.
    Repl,
    /// Print the tokens of a file, or of each stdin line when no file is given.
    Tokens(Option<PathBuf>),
    /// Parse a whole file once.
    Parse(PathBuf),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown argument {0:?}")]
    UnknownArgument(String),
    #[error("{0} expects a value")]
    MissingValue(&'static str),
    #[error("invalid log level {0:?}, expected one of off, error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("parse mode expects a file")]
    MissingFile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub mode: Mode,
    pub prompt: String,
    pub log_level: LevelFilter,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            mode: Mode::Repl,
            prompt: String::from(DEFAULT_PROMPT),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ShellConfig {
    /// Resolves the configuration of the running process.
    pub fn detect() -> Result<Self, ConfigError> {
        Self::resolve(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Resolves a configuration from explicit arguments (without the program
    /// name) and an environment lookup.
    pub fn resolve<I, F>(args: I, lookup: F) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShellConfig::default();

        if let Some(level) = lookup(LOG_ENV) {
            config.log_level = parse_level(&level)?;
        }
        if let Some(prompt) = lookup(PROMPT_ENV) {
            config.prompt = prompt;
        }

        let mut args = args.into_iter();
        let mut mode = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log" => {
                    let level = args.next().ok_or(ConfigError::MissingValue("--log"))?;
                    config.log_level = parse_level(&level)?;
                }
                "--prompt" => {
                    config.prompt = args.next().ok_or(ConfigError::MissingValue("--prompt"))?;
                }
                "repl" if mode.is_none() => mode = Some(Mode::Repl),
                "tokens" if mode.is_none() => {
                    mode = Some(Mode::Tokens(None));
                }
                "parse" if mode.is_none() => {
                    let file = args.next().ok_or(ConfigError::MissingFile)?;
                    mode = Some(Mode::Parse(PathBuf::from(file)));
                }
                _ => match &mut mode {
                    Some(Mode::Tokens(file)) if file.is_none() && !arg.starts_with("--") => {
                        *file = Some(PathBuf::from(arg));
                    }
                    _ => return Err(ConfigError::UnknownArgument(arg)),
                },
            }
        }

        if let Some(mode) = mode {
            config.mode = mode;
        }
        Ok(config)
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(level.trim()).map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, path::PathBuf};

    use log::LevelFilter;

    use super::{ConfigError, Mode, ShellConfig, LOG_ENV, PROMPT_ENV};

    fn resolve(args: &[&str], env: &[(&str, &str)]) -> Result<ShellConfig, ConfigError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        ShellConfig::resolve(args.iter().map(|arg| arg.to_string()), |key| {
            env.get(key).cloned()
        })
    }

    #[test]
    fn test_defaults() {
        let config = resolve(&[], &[]).unwrap();

        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.mode, Mode::Repl);
        assert_eq!(config.prompt, ">> ");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_modes() {
        assert_eq!(resolve(&["tokens"], &[]).unwrap().mode, Mode::Tokens(None));
        assert_eq!(
            resolve(&["tokens", "a.mk"], &[]).unwrap().mode,
            Mode::Tokens(Some(PathBuf::from("a.mk")))
        );
        assert_eq!(
            resolve(&["parse", "b.mk"], &[]).unwrap().mode,
            Mode::Parse(PathBuf::from("b.mk"))
        );
        assert_eq!(resolve(&["parse"], &[]), Err(ConfigError::MissingFile));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = resolve(&[], &[(LOG_ENV, "debug"), (PROMPT_ENV, "mk> ")]).unwrap();

        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.prompt, "mk> ");
    }

    #[test]
    fn test_arguments_override_environment() {
        let config = resolve(
            &["--log", "TRACE", "--prompt", "$ ", "repl"],
            &[(LOG_ENV, "off"), (PROMPT_ENV, "mk> ")],
        )
        .unwrap();

        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(config.prompt, "$ ");
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            resolve(&["--log", "loud"], &[]),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
        assert_eq!(resolve(&["--log"], &[]), Err(ConfigError::MissingValue("--log")));
        assert_eq!(
            resolve(&["compile"], &[]),
            Err(ConfigError::UnknownArgument("compile".to_string()))
        );
        assert_eq!(
            resolve(&["repl", "extra"], &[]),
            Err(ConfigError::UnknownArgument("extra".to_string()))
        );
        assert_eq!(
            resolve(&[], &[(LOG_ENV, "verbose")]),
            Err(ConfigError::InvalidLogLevel("verbose".to_string()))
        );
    }
}
