pub mod error;
pub mod language;
pub mod layout;
pub mod source;
pub mod state;
pub mod tag;

pub use error::LoadError;
pub use language::InflectionAnalyzer;
pub use layout::{Cell, Grid, GridRow, Layout, ListEntry, VerbTable};
pub use source::{JsonFileSource, LemmaFile, LemmaSource};
pub use state::ViewFilters;
pub use tag::{DefaultTagParser, TagParser};
