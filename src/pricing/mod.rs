pub mod catalog;
pub mod selection;

pub use catalog::{option_group, OptionGroup, PackageId, PriceTable};
pub use selection::Selection;
