use crate::error::SheetError;
use fxhash::FxHashSet;
use roomsplit_domain::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantEntry<'a> {
    pub line: usize,
    pub name: &'a str,
    pub bids: Vec<Money>,
}

/// Labelled bid sheet, in participant and room order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentSheet<'a> {
    cost: Money,
    rooms: Vec<&'a str>,
    participants: Vec<ParticipantEntry<'a>>,
}

impl<'a> RentSheet<'a> {
    /// Checks the labels of a sheet. Bid values are checked later by the
    /// domain validator.
    pub fn try_new(
        cost: Money,
        rooms: Vec<&'a str>,
        participants: Vec<ParticipantEntry<'a>>,
    ) -> Result<Self, SheetError<'a>> {
        if participants.is_empty() {
            return Err(SheetError::NoParticipants);
        }

        let mut seen: FxHashSet<&'a str> = FxHashSet::default();
        for entry in &participants {
            if !seen.insert(entry.name) {
                return Err(SheetError::DuplicateParticipant {
                    name: entry.name,
                    line: entry.line,
                });
            }
        }

        if rooms.len() != participants.len() {
            return Err(SheetError::RoomCountMismatch {
                rooms: rooms.len(),
                participants: participants.len(),
            });
        }

        Ok(Self {
            cost,
            rooms,
            participants,
        })
    }

    pub fn cost(&self) -> Money {
        self.cost
    }

    pub fn rooms(&self) -> &[&'a str] {
        &self.rooms
    }

    pub fn participants(&self) -> &[ParticipantEntry<'a>] {
        &self.participants
    }

    pub fn bid_rows(&self) -> Vec<Vec<Money>> {
        self.participants
            .iter()
            .map(|entry| entry.bids.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationRow<'a> {
    pub participant: &'a str,
    pub room: &'a str,
    pub cost: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport<'a> {
    pub rows: Vec<AllocationRow<'a>>,
    pub cost: Money,
    pub utilitarian_total: Money,
    pub surplus: Money,
    pub rounds: usize,
}
