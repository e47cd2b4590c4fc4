#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod report_presenter;
pub mod text_table;

pub use error_presenter::{format_sheet_error, format_split_error};
pub use report_presenter::RentSplitPresenter;
