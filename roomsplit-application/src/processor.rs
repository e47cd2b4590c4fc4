use crate::{
    error::{ProcessError, SheetError},
    model::{AllocationRow, RentSheet, SplitReport},
    ports::BidSheetParser,
};
use roomsplit_domain::{RentSplitError, RentSplitter};

#[derive(Clone, Copy)]
pub struct RentSplitProcessor<'a> {
    parser: &'a dyn BidSheetParser,
    splitter: RentSplitter,
}

impl<'a> RentSplitProcessor<'a> {
    pub fn new(parser: &'a dyn BidSheetParser, splitter: RentSplitter) -> Self {
        Self { parser, splitter }
    }

    pub fn parse_sheet<'b>(&self, content: &'b str) -> Result<RentSheet<'b>, SheetError<'b>> {
        let sheet = self.parser.parse(content)?;
        tracing::debug!(
            participant_count = sheet.participants().len(),
            cost = %sheet.cost(),
            "Bid sheet parsed"
        );
        Ok(sheet)
    }

    /// Runs the split for a parsed sheet and attaches participant and room
    /// labels to the result.
    pub fn build_report<'b>(
        &self,
        sheet: &RentSheet<'b>,
    ) -> Result<SplitReport<'b>, RentSplitError> {
        let split = self.splitter.split(sheet.cost(), &sheet.bid_rows())?;

        let rows = sheet
            .participants()
            .iter()
            .zip(split.assignment.rooms())
            .zip(&split.final_costs)
            .map(|((entry, room), cost)| AllocationRow {
                participant: entry.name,
                room: sheet.rooms()[room.0],
                cost: *cost,
            })
            .collect();

        Ok(SplitReport {
            rows,
            cost: sheet.cost(),
            utilitarian_total: split.utilitarian_total,
            surplus: split.surplus,
            rounds: split.rounds,
        })
    }

    pub fn process<'b>(&self, content: &'b str) -> Result<SplitReport<'b>, ProcessError<'b>> {
        let sheet = self.parse_sheet(content)?;
        Ok(self.build_report(&sheet)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParticipantEntry;
    use roomsplit_domain::{Money, ParticipantId, SplitConfig, ValidationError};
    use rstest::{fixture, rstest};

    /// Reads `name: bid bid ...` lines; the first line is the cost and the
    /// rooms are named after their column.
    struct LineParser;

    const ROOM_NAMES: [&str; 4] = ["Attic", "Garden", "Loft", "Cellar"];

    impl BidSheetParser for LineParser {
        fn parse<'a>(&self, content: &'a str) -> Result<RentSheet<'a>, SheetError<'a>> {
            let mut lines = content.lines().enumerate();
            let cost = lines
                .next()
                .and_then(|(_, line)| line.trim().parse::<i64>().ok())
                .ok_or(SheetError::MissingDeclaration { keyword: "COST" })?;

            let participants: Vec<ParticipantEntry<'a>> = lines
                .map(|(idx, line)| {
                    let (name, bids) = line.split_once(':').unwrap_or((line, ""));
                    ParticipantEntry {
                        line: idx + 1,
                        name: name.trim(),
                        bids: bids
                            .split_whitespace()
                            .filter_map(|bid| bid.parse::<i64>().ok())
                            .map(Money::from_i64)
                            .collect(),
                    }
                })
                .collect();

            let rooms = ROOM_NAMES[..participants.len().min(ROOM_NAMES.len())].to_vec();
            RentSheet::try_new(Money::from_i64(cost), rooms, participants)
        }
    }

    #[fixture]
    fn processor() -> RentSplitProcessor<'static> {
        RentSplitProcessor::new(&LineParser, RentSplitter::default())
    }

    #[rstest]
    fn labels_each_allocation(processor: RentSplitProcessor<'static>) {
        let report = processor
            .process("100\nAna: 55 30 10 5\nBen: 0 65 5 30\nCai: 15 50 20 15\nDee: 20 15 30 35")
            .expect("report");

        let expected = vec![
            AllocationRow {
                participant: "Ana",
                room: "Attic",
                cost: Money::from_i64(40),
            },
            AllocationRow {
                participant: "Ben",
                room: "Garden",
                cost: Money::from_i64(45),
            },
            AllocationRow {
                participant: "Cai",
                room: "Loft",
                cost: Money::from_i64(5),
            },
            AllocationRow {
                participant: "Dee",
                room: "Cellar",
                cost: Money::from_i64(10),
            },
        ];
        assert_eq!(report.rows, expected);
        assert_eq!(report.cost, Money::from_i64(100));
        assert_eq!(report.surplus, Money::from_i64(75));
        assert_eq!(report.rounds, 2);
    }

    #[rstest]
    fn room_labels_follow_the_assignment(processor: RentSplitProcessor<'static>) {
        let report = processor.process("100\nAna: 30 70\nBen: 60 40").expect("report");

        assert_eq!(report.rows[0].room, "Garden");
        assert_eq!(report.rows[1].room, "Attic");
    }

    #[rstest]
    fn sheet_errors_are_reported(processor: RentSplitProcessor<'static>) {
        let result = processor.process("100\nAna: 50 50\nAna: 50 50");
        assert_eq!(
            result,
            Err(ProcessError::Sheet(SheetError::DuplicateParticipant {
                name: "Ana",
                line: 3,
            }))
        );
    }

    #[rstest]
    fn split_errors_are_reported(processor: RentSplitProcessor<'static>) {
        let result = processor.process("100\nAna: 50 50\nBen: 60 39");
        assert_eq!(
            result,
            Err(ProcessError::Split(RentSplitError::Validation(
                ValidationError::RowSumMismatch {
                    participant: ParticipantId(1),
                    sum: Money::from_i64(99),
                    cost: Money::from_i64(100),
                }
            )))
        );
    }

    #[test]
    fn splitter_config_is_used() {
        let processor = RentSplitProcessor::new(
            &LineParser,
            RentSplitter::new(SplitConfig { max_rounds: 0 }),
        );
        let result = processor
            .process("100\nAna: 55 30 10 5\nBen: 0 65 5 30\nCai: 15 50 20 15\nDee: 20 15 30 35");
        assert_eq!(
            result,
            Err(ProcessError::Split(RentSplitError::NonConvergence { rounds: 0 }))
        );
    }
}
