use roomsplit_domain::RentSplitError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError<'a> {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("Missing `{keyword} := ...` declaration")]
    MissingDeclaration { keyword: &'static str },
    #[error("`{keyword}` declared again at line {line}")]
    DuplicateDeclaration { keyword: &'static str, line: usize },
    #[error("No participant bids were given")]
    NoParticipants,
    #[error("Participant '{name}' appears again at line {line}")]
    DuplicateParticipant { name: &'a str, line: usize },
    #[error("{rooms} rooms were declared for {participants} participants")]
    RoomCountMismatch { rooms: usize, participants: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError<'a> {
    #[error("{0}")]
    Sheet(SheetError<'a>),
    #[error(transparent)]
    Split(#[from] RentSplitError),
}

impl<'a> From<SheetError<'a>> for ProcessError<'a> {
    fn from(err: SheetError<'a>) -> Self {
        ProcessError::Sheet(err)
    }
}
