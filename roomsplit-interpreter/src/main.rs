mod bootstrap;

use bootstrap::{AppConfig, init_logging};
use roomsplit_application::RentSplitProcessor;
use roomsplit_domain::RentSplitter;
use roomsplit_infrastructure::TextBidSheetParser;
use roomsplit_presentation::{RentSplitPresenter, format_sheet_error, format_split_error};
use std::{borrow::Cow, env, fs, process};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let Some(path) = env::args().nth(1) else {
        return Err("Usage: roomsplit <bids file>".into());
    };

    let config = AppConfig::from_env()?;
    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    let processor = RentSplitProcessor::new(&TextBidSheetParser, RentSplitter::new(config.split));

    let sheet = processor
        .parse_sheet(&source)
        .map_err(|err| format_sheet_error(&err))?;
    let report = processor.build_report(&sheet).map_err(|err| {
        tracing::error!(error = %err, path = %path, "Rent split failed");
        format_split_error(&err, &sheet)
    })?;

    println!("{}", RentSplitPresenter::render(&report, config.scale));
    Ok(())
}
