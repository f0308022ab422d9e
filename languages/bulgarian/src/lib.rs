pub mod analyzer;
pub mod classifier;
pub mod features;
pub mod formatter;
pub mod grammar;
pub mod grid;
pub mod view;

pub use analyzer::BulgarianAnalyzer;
pub use classifier::{Analysis, WordFamily, analyze};
pub use features::{
    AdjectiveShape, Definiteness, Gender, GrammaticalFeatures, Mood, NounShape, Number, Person,
    PersonNumber, Tense, VerbForm,
};
pub use formatter::{format_tag, format_with_pronoun, pronoun_hint};
pub use grammar::{GRAMMAR_VERSION, Tag, Token};
pub use view::InflectionView;

#[cfg(test)]
mod tests;
