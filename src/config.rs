use std::path::PathBuf;

use crate::errors::errors::{Error, ErrorImpl};

pub const DEFAULT_PROMPT: &str = ">> ";

/// Settings for a single run of the `monkey` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    /// Lex this file instead of starting an interactive session.
    pub source_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: String::from(DEFAULT_PROMPT),
            source_file: None,
        }
    }
}

impl Config {
    /// Builds a config from command line arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Config, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if arg == "--prompt" {
                config.prompt = args
                    .next()
                    .ok_or(ErrorImpl::MissingArgumentValue { flag: arg })?;
            } else if arg.starts_with("--") {
                return Err(ErrorImpl::UnknownArgument { argument: arg }.into());
            } else if config.source_file.is_some() {
                return Err(ErrorImpl::UnexpectedArgument { argument: arg }.into());
            } else {
                config.source_file = Some(PathBuf::from(arg));
            }
        }

        Ok(config)
    }
}
