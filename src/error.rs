use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading a word list or running a session.
#[derive(Debug, Error)]
pub enum Error {
    /// The word list could not be opened or read. Fatal: there is nothing to censor with.
    #[error("cannot read word list {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a phrase failed. A session treats this as the end of input.
    #[error("failed to read input: {0}")]
    InputRead(#[source] io::Error),

    /// Writing a prompt or a censored phrase failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
