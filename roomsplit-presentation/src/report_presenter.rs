use crate::text_table::{Column, TextTable};
use roomsplit_application::SplitReport;
use roomsplit_domain::{Money, quantize_costs};
use std::borrow::Cow;

const CURRENCY: &str = "$";

pub struct RentSplitPresenter;

impl RentSplitPresenter {
    /// Renders the allocation table followed by a one-line summary.
    ///
    /// Costs are shown with `scale` decimal places and still add up to the
    /// total cost of the sheet.
    pub fn render(report: &SplitReport<'_>, scale: u32) -> String {
        let mut output = Self::build_allocation_table(report, scale);
        output.push('\n');
        output.push_str(&Self::summary_line(report, scale));
        output
    }

    fn build_allocation_table(report: &SplitReport<'_>, scale: u32) -> String {
        let exact: Vec<Money> = report.rows.iter().map(|row| row.cost).collect();
        let shown = quantize_costs(&exact, report.cost, scale);

        let mut table = TextTable::new([
            Column::left("Participant"),
            Column::left("Room"),
            Column::right("Cost"),
        ]);
        for (row, cost) in report.rows.iter().zip(shown) {
            table.push_row([
                Cow::Borrowed(row.participant),
                Cow::Borrowed(row.room),
                Cow::Owned(format_amount(cost, scale)),
            ]);
        }
        table.render()
    }

    fn summary_line(report: &SplitReport<'_>, scale: u32) -> String {
        let total = format_amount(report.cost, scale);
        let surplus = format_amount(report.surplus, scale);
        let rounds = match report.rounds {
            1 => Cow::Borrowed("1 compensation round"),
            n => Cow::Owned(format!("{n} compensation rounds")),
        };
        format!("Total {total}, surplus {surplus} shared after {rounds}")
    }
}

fn format_amount(amount: Money, scale: u32) -> String {
    if amount.is_negative() {
        format!("-{CURRENCY}{}", amount.abs().to_fixed_string(scale))
    } else {
        format!("{CURRENCY}{}", amount.to_fixed_string(scale))
    }
}
