use std::{fmt::Display, io};

use thiserror::Error;

#[derive(Error, Debug)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ReadInput { .. } => "ReadInput",
            ErrorImpl::WriteOutput { .. } => "WriteOutput",
            ErrorImpl::ReadFile { .. } => "ReadFile",
            ErrorImpl::UnknownArgument { .. } => "UnknownArgument",
            ErrorImpl::MissingArgumentValue { .. } => "MissingArgumentValue",
            ErrorImpl::UnexpectedArgument { .. } => "UnexpectedArgument",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ReadInput { .. } | ErrorImpl::WriteOutput { .. } => ErrorTip::None,
            ErrorImpl::ReadFile { path, source } => ErrorTip::Suggestion(match source.kind() {
                io::ErrorKind::NotFound => format!("Could not find `{}`, does the file exist?", path),
                io::ErrorKind::PermissionDenied => {
                    format!("Permission denied reading `{}`, check the file's permissions", path)
                }
                _ => format!("Could not read `{}`: {}", path, source),
            }),
            ErrorImpl::UnknownArgument { argument } => ErrorTip::Suggestion(format!(
                "Unknown option `{}`, the only option is `--prompt <text>`",
                argument
            )),
            ErrorImpl::MissingArgumentValue { flag } => {
                ErrorTip::Suggestion(format!("Option `{}` expects a value", flag))
            }
            ErrorImpl::UnexpectedArgument { argument } => ErrorTip::Suggestion(format!(
                "Unexpected argument `{}`, only one source file can be given",
                argument
            )),
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("failed to read input")]
    ReadInput { source: io::Error },
    #[error("failed to write output")]
    WriteOutput { source: io::Error },
    #[error("failed to read source file {path:?}")]
    ReadFile { path: String, source: io::Error },
    #[error("unknown argument: {argument:?}")]
    UnknownArgument { argument: String },
    #[error("missing value for {flag:?}")]
    MissingArgumentValue { flag: String },
    #[error("unexpected argument: {argument:?}")]
    UnexpectedArgument { argument: String },
}
