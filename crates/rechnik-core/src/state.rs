use rechnik_types::InflectionRecord;
use serde::{Deserialize, Serialize};

/// Visibility toggles for one rendering of a lemma's inflections.
///
/// Owned by the caller; layout code only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewFilters {
    /// Restrict the flat list and the noun/adjective grids to basic forms
    pub basic_only: bool,
    /// Show only the present block of the verb table, never the imperative
    pub present_only: bool,
}

impl ViewFilters {
    pub fn new(basic_only: bool, present_only: bool) -> Self {
        Self {
            basic_only,
            present_only,
        }
    }

    /// Both toggles off.
    pub fn everything() -> Self {
        Self::new(false, false)
    }

    pub fn toggle_basic_only(&mut self) {
        self.basic_only = !self.basic_only;
    }

    pub fn toggle_present_only(&mut self) {
        self.present_only = !self.present_only;
    }

    /// Whether the difficulty toggle lets this record through.
    pub fn admits(&self, record: &InflectionRecord) -> bool {
        !self.basic_only || record.is_basic()
    }
}

impl Default for ViewFilters {
    fn default() -> Self {
        Self::new(true, true)
    }
}
