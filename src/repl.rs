//! Line-oriented driver around the lexer.
//!
//! Each line read is lexed on its own and its tokens are echoed back, one per
//! line, until the input is exhausted.

use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    config::Config,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::{tokenize_bytes, Lexer},
};

pub fn start<R, W>(mut input: R, output: &mut W, config: &Config) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    debug!(prompt = %config.prompt, "starting interactive session");

    let mut line = Vec::new();

    loop {
        write!(output, "{}", config.prompt).map_err(write_error)?;
        output.flush().map_err(write_error)?;

        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .map_err(|source| ErrorImpl::ReadInput { source })?;
        if read == 0 {
            break;
        }

        let mut lexer = Lexer::from_bytes(line.clone());
        let mut token = lexer.next_token();
        while !token.is_eof() {
            writeln!(output, "{}", token).map_err(write_error)?;
            token = lexer.next_token();
        }
    }

    debug!("input exhausted, ending interactive session");
    Ok(())
}

/// Lexes a whole file and writes its tokens, one per line.
pub fn run_file<W: Write>(path: &Path, output: &mut W) -> Result<(), Error> {
    let source = fs::read(path).map_err(|source| ErrorImpl::ReadFile {
        path: path.to_string_lossy().into_owned(),
        source,
    })?;

    let tokens = tokenize_bytes(source);
    debug!(path = %path.display(), count = tokens.len(), "lexed source file");

    for token in tokens.iter().filter(|token| !token.is_eof()) {
        writeln!(output, "{}", token).map_err(write_error)?;
    }

    Ok(())
}

fn write_error(source: std::io::Error) -> ErrorImpl {
    ErrorImpl::WriteOutput { source }
}
