pub mod catalog;
pub mod constants;
pub mod layout;
mod options;
mod plan;
mod product;
mod types;

pub use catalog::{BUSINESS_CARD_SHEETS, ISO_A_SERIES, PaperSize, SheetSize, sorted_by_area};
pub use options::*;
pub use plan::*;
pub use product::*;
pub use types::*;
