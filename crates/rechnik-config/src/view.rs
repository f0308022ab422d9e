use rechnik_core::state::ViewFilters;
use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// Initial state of the inflection view toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    #[serde(default = "default_enabled")]
    pub basic_only: bool,
    #[serde(default = "default_enabled")]
    pub present_only: bool,
}

impl ViewConfig {
    pub fn filters(&self) -> ViewFilters {
        ViewFilters::new(self.basic_only, self.present_only)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            basic_only: default_enabled(),
            present_only: default_enabled(),
        }
    }
}
