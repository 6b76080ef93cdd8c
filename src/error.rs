use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("invalid token {token:?}: {reason}")]
    InvalidToken { token: String, reason: String },
    /// The divisor of a case was zero, so its remainder is undefined.
    #[error("case #{case}: divisor M is zero")]
    ZeroDivisor { case: usize },
    #[error("case #{case}: {source}")]
    Case {
        case: usize,
        #[source]
        source: Box<Error>,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Attach a case number, unless the error already names one.
    pub fn in_case(self, case: usize) -> Self {
        match self {
            Error::ZeroDivisor { .. } | Error::Case { .. } | Error::Io(_) => self,
            other => Error::Case {
                case,
                source: Box::new(other),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
