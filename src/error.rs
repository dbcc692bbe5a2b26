use std::{fmt, io};

#[derive(Debug)]
pub enum QuizError {
    Io(io::Error),
    Parse(serde_json::Error),
    InvalidPack(String),
    Logger(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Io(error) => write!(f, "IO error: {}", error),
            QuizError::Parse(error) => write!(f, "Could not parse question pack: {}", error),
            QuizError::InvalidPack(reason) => write!(f, "Invalid question pack: {}", reason),
            QuizError::Logger(reason) => write!(f, "Could not initialize logger: {}", reason),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Io(error) => Some(error),
            QuizError::Parse(error) => Some(error),
            QuizError::InvalidPack(_) | QuizError::Logger(_) => None,
        }
    }
}

impl From<io::Error> for QuizError {
    fn from(error: io::Error) -> Self {
        QuizError::Io(error)
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(error: serde_json::Error) -> Self {
        QuizError::Parse(error)
    }
}
