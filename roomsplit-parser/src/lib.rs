#![warn(clippy::uninlined_format_args)]

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_until, take_while1},
    character::complete::{char, digit1, space1},
    combinator::{eof, map_res, opt, recognize},
    multi::{many0, separated_list1},
    sequence::{delimited, preceded},
};
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct BidLine<'a> {
    pub line: usize,
    pub name: &'a str,
    pub bids: Vec<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    Cost(Decimal),
    Rooms(Vec<&'a str>),
    Bids { name: &'a str, bids: Vec<Decimal> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BidSheet<'a> {
    pub cost: Decimal,
    pub rooms: Vec<&'a str>,
    pub participants: Vec<BidLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Missing `COST := ...` declaration")]
    MissingCost,
    #[error("Missing `ROOMS := ...` declaration")]
    MissingRooms,
    #[error("No participant bids were given")]
    NoParticipants,
    #[error("`COST` declared again at line {line}")]
    DuplicateCost { line: usize },
    #[error("`ROOMS` declared again at line {line}")]
    DuplicateRooms { line: usize },
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

fn sp(input: &str) -> IResult<&str, &str> {
    fn fullwidth_space(input: &str) -> IResult<&str, &str> {
        take_while1(|c: char| c == '\u{3000}')(input)
    }

    fn comment(input: &str) -> IResult<&str, &str> {
        delimited(tag("/*"), take_until("*/"), tag("*/")).parse(input)
    }

    recognize(many0(alt((space1, fullwidth_space, comment)))).parse(input)
}

fn line_comment(input: &str) -> IResult<&str, &str> {
    recognize((tag("//"), take_till(|c| c == '\n'))).parse(input)
}

fn amount(input: &str) -> IResult<&str, Decimal> {
    map_res(
        recognize((digit1, opt((char('.'), digit1)))),
        Decimal::from_str,
    )
    .parse(input)
}

fn assign_op(input: &str) -> IResult<&str, &str> {
    delimited(sp, tag(":="), sp).parse(input)
}

fn cost_decl(input: &str) -> IResult<&str, Statement<'_>> {
    preceded((tag_no_case("COST"), assign_op), amount)
        .map(Statement::Cost)
        .parse(input)
}

fn room_label(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != ',' && c != '/')
        .map(str::trim_end)
        .parse(input)
}

fn rooms_decl(input: &str) -> IResult<&str, Statement<'_>> {
    preceded(
        (tag_no_case("ROOMS"), assign_op),
        separated_list1((sp, char(','), sp), room_label),
    )
    .map(Statement::Rooms)
    .parse(input)
}

fn participant_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-')(input)
}

fn amount_list(input: &str) -> IResult<&str, Vec<Decimal>> {
    let (input, first) = amount(input)?;
    let (input, rest) = many0(preceded((sp, opt(char(',')), sp), amount)).parse(input)?;

    let mut bids = Vec::with_capacity(rest.len() + 1);
    bids.push(first);
    bids.extend(rest);
    Ok((input, bids))
}

fn bid_line(input: &str) -> IResult<&str, Statement<'_>> {
    (participant_name, sp, char(':'), sp, amount_list)
        .map(|(name, _, _, _, bids)| Statement::Bids { name, bids })
        .parse(input)
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((cost_decl, rooms_decl, bid_line)).parse(input)
}

fn line(input: &str) -> IResult<&str, Option<Statement<'_>>> {
    let (input, _) = sp(input)?;
    let (input, statement) = opt(statement).parse(input)?;
    let (input, _) = (sp, opt(line_comment), eof).parse(input)?;
    Ok((input, statement))
}

/// Parses a single line; blank and comment-only lines yield `None`.
pub fn parse_line(input: &str, line_number: usize) -> Result<Option<Statement<'_>>, ParseError> {
    match line(input) {
        Ok((_, statement)) => Ok(statement),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(ParseError::SyntaxError {
            line: line_number,
            detail: syntax_detail(err.input),
        }),
        Err(nom::Err::Incomplete(_)) => Err(ParseError::SyntaxError {
            line: line_number,
            detail: "incomplete input".to_string(),
        }),
    }
}

fn syntax_detail(rest: &str) -> String {
    let rest = rest.trim();
    if rest.is_empty() {
        return "unexpected end of line".to_string();
    }
    let snippet: String = rest.chars().take(24).collect();
    format!("unexpected input near '{snippet}'")
}

pub fn parse_bid_sheet(input: &str) -> Result<BidSheet<'_>, ParseError> {
    let mut cost = None;
    let mut rooms = None;
    let mut participants = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let Some(statement) = parse_line(raw, line)? else {
            continue;
        };

        match statement {
            Statement::Cost(value) => {
                if cost.replace(value).is_some() {
                    return Err(ParseError::DuplicateCost { line });
                }
            }
            Statement::Rooms(labels) => {
                if rooms.replace(labels).is_some() {
                    return Err(ParseError::DuplicateRooms { line });
                }
            }
            Statement::Bids { name, bids } => participants.push(BidLine { line, name, bids }),
        }
    }

    let cost = cost.ok_or(ParseError::MissingCost)?;
    let rooms = rooms.ok_or(ParseError::MissingRooms)?;
    if participants.is_empty() {
        return Err(ParseError::NoParticipants);
    }

    Ok(BidSheet {
        cost,
        rooms,
        participants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(values: &[i64]) -> Vec<Decimal> {
        values.iter().copied().map(Decimal::from).collect()
    }

    #[rstest]
    #[case::integer("COST := 3700", Decimal::from(3700))]
    #[case::decimal("COST := 1250.50", Decimal::new(125050, 2))]
    #[case::lowercase("cost:=100", Decimal::from(100))]
    #[case::trailing_comment("COST := 100 // monthly", Decimal::from(100))]
    fn test_cost_declaration(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_line(input, 1), Ok(Some(Statement::Cost(expected))));
    }

    #[rstest]
    #[case::simple("ROOMS := A, B, C", vec!["A", "B", "C"])]
    #[case::spaced_labels(
        "ROOMS := French tub, Queen + twin ,King1",
        vec!["French tub", "Queen + twin", "King1"]
    )]
    #[case::commented("ROOMS := Attic, Basement // two floors", vec!["Attic", "Basement"])]
    fn test_rooms_declaration(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_line(input, 1), Ok(Some(Statement::Rooms(expected))));
    }

    #[rstest]
    #[case::spaces("Ni: 928 728 730", "Ni", dec(&[928, 728, 730]))]
    #[case::commas("Nash : 743, 625,620", "Nash", dec(&[743, 625, 620]))]
    #[case::inline_comment("Alma: 10 /* low */ 90", "Alma", dec(&[10, 90]))]
    #[case::unicode_name("Zoë: 50 50", "Zoë", dec(&[50, 50]))]
    #[case::decimals("kopa-2: 0.5 99.5", "kopa-2", vec![Decimal::new(5, 1), Decimal::new(995, 1)])]
    fn test_bid_line(#[case] input: &str, #[case] name: &str, #[case] bids: Vec<Decimal>) {
        assert_eq!(
            parse_line(input, 1),
            Ok(Some(Statement::Bids { name, bids }))
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   \t")]
    #[case::line_comment("// way")]
    #[case::inline_only("/* nothing */")]
    fn test_blank_lines_are_ignored(#[case] input: &str) {
        assert_eq!(parse_line(input, 1), Ok(None));
    }

    #[rstest]
    #[case::missing_colon("Ni 928 728")]
    #[case::trailing_garbage("Ni: 10 20 abc")]
    #[case::negative_amount("Ni: -10 110")]
    #[case::double_dot("Ni: 1.2.3")]
    #[case::unterminated_comment("Ni: 10 /* 90")]
    #[case::empty_rooms("ROOMS :=")]
    fn test_syntax_errors(#[case] input: &str) {
        assert!(matches!(
            parse_line(input, 7),
            Err(ParseError::SyntaxError { line: 7, .. })
        ));
    }

    #[test]
    fn test_parse_bid_sheet() {
        let input = "\
COST := 100
ROOMS := Big, Small // bedrooms

// bids
Ana: 60 40
Ben: 55, 45
";
        let sheet = parse_bid_sheet(input).expect("sheet should parse");

        assert_eq!(sheet.cost, Decimal::from(100));
        assert_eq!(sheet.rooms, vec!["Big", "Small"]);
        assert_eq!(
            sheet.participants,
            vec![
                BidLine {
                    line: 5,
                    name: "Ana",
                    bids: dec(&[60, 40]),
                },
                BidLine {
                    line: 6,
                    name: "Ben",
                    bids: dec(&[55, 45]),
                },
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let sheet = parse_bid_sheet("COST := 10\r\nROOMS := A\r\nAna: 10\r\n")
            .expect("sheet should parse");
        assert_eq!(sheet.participants.len(), 1);
    }

    #[rstest]
    #[case::missing_cost("ROOMS := A\nAna: 10", ParseError::MissingCost)]
    #[case::missing_rooms("COST := 10\nAna: 10", ParseError::MissingRooms)]
    #[case::no_participants("COST := 10\nROOMS := A", ParseError::NoParticipants)]
    #[case::duplicate_cost(
        "COST := 10\nROOMS := A\nCOST := 20",
        ParseError::DuplicateCost { line: 3 }
    )]
    #[case::duplicate_rooms(
        "ROOMS := A\nCOST := 10\nROOMS := B",
        ParseError::DuplicateRooms { line: 3 }
    )]
    fn test_sheet_structure_errors(#[case] input: &str, #[case] expected: ParseError) {
        assert_eq!(parse_bid_sheet(input), Err(expected));
    }

    #[test]
    fn test_syntax_error_reports_line() {
        let result = parse_bid_sheet("COST := 10\nROOMS := A\nAna = 10");
        assert!(matches!(
            result,
            Err(ParseError::SyntaxError { line: 3, .. })
        ));
    }
}
