use roomsplit_application::{BidSheetParser, ParticipantEntry, RentSheet, SheetError};
use roomsplit_domain::Money;
use roomsplit_parser::{BidLine, ParseError, parse_bid_sheet};

#[derive(Default)]
pub struct TextBidSheetParser;

impl BidSheetParser for TextBidSheetParser {
    fn parse<'a>(&self, content: &'a str) -> Result<RentSheet<'a>, SheetError<'a>> {
        let sheet = parse_bid_sheet(content).map_err(to_sheet_error)?;

        let participants = sheet
            .participants
            .into_iter()
            .map(|BidLine { line, name, bids }| ParticipantEntry {
                line,
                name,
                bids: bids.into_iter().map(Money::from_decimal).collect(),
            })
            .collect();

        RentSheet::try_new(Money::from_decimal(sheet.cost), sheet.rooms, participants)
    }
}

fn to_sheet_error<'a>(err: ParseError) -> SheetError<'a> {
    match err {
        ParseError::SyntaxError { line, detail } => SheetError::SyntaxError { line, detail },
        ParseError::MissingCost => SheetError::MissingDeclaration { keyword: "COST" },
        ParseError::MissingRooms => SheetError::MissingDeclaration { keyword: "ROOMS" },
        ParseError::NoParticipants => SheetError::NoParticipants,
        ParseError::DuplicateCost { line } => SheetError::DuplicateDeclaration {
            keyword: "COST",
            line,
        },
        ParseError::DuplicateRooms { line } => SheetError::DuplicateDeclaration {
            keyword: "ROOMS",
            line,
        },
    }
}
