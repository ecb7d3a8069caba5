use std::fmt;

/// Coarse classification shared by every error in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Out-of-domain argument, e.g. an opening balance below the minimum.
    InvalidArgument,
    /// Transaction text or withdrawal amount breaks the format rules.
    MalformedInput,
    InsufficientFunds,
    DuplicateKey,
    NotFound,
    SourceNotFound,
    /// The line source failed while being read.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::MalformedInput => "malformed input",
            ErrorKind::InsufficientFunds => "insufficient funds",
            ErrorKind::DuplicateKey => "duplicate key",
            ErrorKind::NotFound => "not found",
            ErrorKind::SourceNotFound => "source not found",
            ErrorKind::Io => "i/o error",
        };
        f.write_str(name)
    }
}
