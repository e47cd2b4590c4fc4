#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod processor;

pub use error::{ProcessError, SheetError};
pub use model::{AllocationRow, ParticipantEntry, RentSheet, SplitReport};
pub use ports::BidSheetParser;
pub use processor::RentSplitProcessor;
