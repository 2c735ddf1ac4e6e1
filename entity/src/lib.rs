mod album;
mod catalog;
mod indicator;
mod track;

pub use album::Album;
pub use catalog::{CatalogCoordinates, EntryType};
pub use indicator::{Indicator, IndicatorKind, Indicators};
pub use track::Track;
