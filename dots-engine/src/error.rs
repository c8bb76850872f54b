use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotsError {
    OutOfTurn,
    Overwrite,
    NotOnBoard,
    InvalidAction(usize),
    MalformedState(String),
}

impl fmt::Display for DotsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotsError::OutOfTurn => write!(f, "out of turn"),
            DotsError::Overwrite => write!(f, "overwrite"),
            DotsError::NotOnBoard => write!(f, "not on board"),
            DotsError::InvalidAction(a) => write!(f, "invalid action: {a}"),
            DotsError::MalformedState(msg) => write!(f, "malformed state: {msg}"),
        }
    }
}

impl std::error::Error for DotsError {}
