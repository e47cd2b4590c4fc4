use crate::{error::SheetError, model::RentSheet};

pub trait BidSheetParser: Send + Sync {
    fn parse<'a>(&self, content: &'a str) -> Result<RentSheet<'a>, SheetError<'a>>;
}
