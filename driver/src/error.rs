use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    /// The command is known, but there is nothing behind it yet
    #[error("the '{0}' command is not implemented yet")]
    NotImplemented(&'static str),
    #[error("could not find '{program}' in PATH: {source}")]
    ProgramNotFound {
        program: String,
        #[source]
        source: which::Error,
    },
    #[error("failed to run '{invocation}': {source}")]
    Spawn {
        invocation: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid snippet pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("unable to read snippet sources: {0}")]
    Glob(#[from] glob::GlobError),
}
