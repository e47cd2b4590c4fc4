use std::{borrow::Cow, fmt::Write};

const COLUMN_SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug)]
pub struct Column<'a> {
    header: &'a str,
    align: Align,
}

impl<'a> Column<'a> {
    pub fn left(header: &'a str) -> Self {
        Self {
            header,
            align: Align::Left,
        }
    }

    pub fn right(header: &'a str) -> Self {
        Self {
            header,
            align: Align::Right,
        }
    }
}

/// Plain-text table with a header, a dashed rule and `|`-separated cells.
///
/// Rows shorter than the header leave their trailing cells blank; extra
/// cells are dropped.
pub struct TextTable<'a> {
    columns: Vec<Column<'a>>,
    rows: Vec<Vec<Cow<'a, str>>>,
}

impl<'a> TextTable<'a> {
    pub fn new(columns: impl IntoIterator<Item = Column<'a>>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: impl IntoIterator<Item = Cow<'a, str>>) {
        let mut row: Vec<Cow<'a, str>> = cells.into_iter().take(self.columns.len()).collect();
        row.resize(self.columns.len(), Cow::Borrowed(""));
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .map(|row| display_width(&row[idx]))
                    .fold(display_width(column.header), usize::max)
            })
            .collect();

        let mut out = String::new();
        let headers: Vec<&str> = self.columns.iter().map(|column| column.header).collect();
        self.render_line(&mut out, &headers, &widths);

        let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
        let _ = writeln!(out, "{}", rule.join(RULE_SEPARATOR));

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(|cell| cell.as_ref()).collect();
            self.render_line(&mut out, &cells, &widths);
        }
        out
    }

    fn render_line(&self, out: &mut String, cells: &[&str], widths: &[usize]) {
        let line = self
            .columns
            .iter()
            .zip(cells)
            .zip(widths)
            .map(|((column, cell), &width)| {
                let padding = " ".repeat(width.saturating_sub(display_width(cell)));
                match column.align {
                    Align::Left => format!("{cell}{padding}"),
                    Align::Right => format!("{padding}{cell}"),
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

/// Terminal cell width; CJK and fullwidth characters take two cells.
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| match c {
            '\u{1100}'..='\u{115F}'
            | '\u{2E80}'..='\u{A4CF}'
            | '\u{AC00}'..='\u{D7A3}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF00}'..='\u{FF60}'
            | '\u{FFE0}'..='\u{FFE6}' => 2,
            _ => 1,
        })
        .sum()
}
