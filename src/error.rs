//! Error management.

use derive_more::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display)]
pub enum Error {
    /// A record that does not split into exactly two non-empty tokens.
    #[display(fmt = "line {}: malformed record {:?}", line, record)]
    Malformed { line: usize, record: String },
    /// The simplified edge set must hold every undirected edge twice.
    #[display(fmt = "simplified graph has an odd number of directed edges: {}", _0)]
    OddEdgeCount(usize),
    #[display(fmt = "unknown graph: {}", _0)]
    UnknownGraph(String),
    #[display(fmt = "{} graph(s) failed", _0)]
    BatchFailed(usize),
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "input is not valid UTF-8: {}", _0)]
    Utf8(std::str::Utf8Error),
    #[display(fmt = "{}", _0)]
    Csv(csv::Error),
    #[display(fmt = "{}", _0)]
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::Utf8(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(e)
    }
}
