use roomsplit_application::{RentSheet, SheetError};
use roomsplit_domain::{ParticipantId, RentSplitError, RoomId, ValidationError};

pub fn format_sheet_error(error: &SheetError<'_>) -> String {
    match error {
        SheetError::SyntaxError { line, detail } => {
            format!("Syntax error at line {line}: {detail}")
        }
        SheetError::MissingDeclaration { keyword } => {
            format!("The sheet needs a `{keyword} := ...` line")
        }
        SheetError::DuplicateDeclaration { keyword, line } => {
            format!("`{keyword}` is declared more than once (again at line {line})")
        }
        SheetError::NoParticipants => "The sheet has no participant bids".to_string(),
        SheetError::DuplicateParticipant { name, line } => {
            format!("'{name}' already placed bids (again at line {line})")
        }
        SheetError::RoomCountMismatch {
            rooms,
            participants,
        } => format!("{rooms} rooms are declared but {participants} participants placed bids"),
    }
}

/// Describes a split failure using the participant and room labels of the
/// sheet the bids came from.
pub fn format_split_error(error: &RentSplitError, sheet: &RentSheet<'_>) -> String {
    match error {
        RentSplitError::Validation(validation) => format_validation_error(validation, sheet),
        RentSplitError::NoFeasibleAssignment { best_total } => format!(
            "No room assignment has a positive total value (best total {best_total}); \
             is the rent zero?"
        ),
        RentSplitError::Overflow => {
            "Assignment totals are too large to represent; use smaller amounts".to_string()
        }
        RentSplitError::NonConvergence { rounds } => {
            format!("Compensation did not settle within {rounds} rounds")
        }
        RentSplitError::CompensationStalled { round } => format!(
            "Compensation stalled at round {round}; envious participants could not be discounted"
        ),
    }
}

fn format_validation_error(error: &ValidationError, sheet: &RentSheet<'_>) -> String {
    match error {
        ValidationError::Empty => "The sheet has no participant bids".to_string(),
        ValidationError::NotSquare {
            participant,
            expected,
            found,
        } => {
            let entry = describe_participant(*participant, sheet);
            format!("{entry} bid on {found} rooms, expected {expected}")
        }
        ValidationError::NegativeBid {
            participant,
            room,
            bid,
        } => {
            let entry = describe_participant(*participant, sheet);
            let room = room_label(*room, sheet);
            format!("{entry} placed a negative bid ({bid}) on '{room}'")
        }
        ValidationError::AmountOverflow { participant } => {
            let entry = describe_participant(*participant, sheet);
            format!("Bids of {entry} are too large to add up")
        }
        ValidationError::RowSumMismatch {
            participant,
            sum,
            cost,
        } => {
            let entry = describe_participant(*participant, sheet);
            format!("Bids of {entry} sum to {sum}, but the rent is {cost}")
        }
    }
}

fn describe_participant(id: ParticipantId, sheet: &RentSheet<'_>) -> String {
    match sheet.participants().get(id.0) {
        Some(entry) => format!("'{}' (line {})", entry.name, entry.line),
        None => format!("participant {id}"),
    }
}

fn room_label(id: RoomId, sheet: &RentSheet<'_>) -> String {
    sheet
        .rooms()
        .get(id.0)
        .map_or_else(|| id.to_string(), |room| (*room).to_string())
}
