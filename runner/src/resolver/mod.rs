pub mod context;
pub mod fallback;
pub mod fill;
pub mod label;
pub mod outcome;
pub mod selectors;

pub use context::RowContext;
pub use fallback::resolve_fallback;
pub use fill::fill_element;
pub use label::resolve_by_label;
pub use outcome::{FillMethod, Miss, Outcome, Resolution, SkipReason};
pub use selectors::FormSelectors;

use crate::config::Config;
use std::time::Duration;

/// Queries and read budgets shared by both resolvers.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub label_query: String,
    pub input_query: String,
    pub text_timeout: Duration,
    pub value_timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            label_query: FormSelectors::LABEL_LIKE.to_string(),
            input_query: FormSelectors::INPUT_CAPABLE.to_string(),
            text_timeout: Duration::from_millis(1000),
            value_timeout: Duration::from_millis(500),
        }
    }
}

impl ResolverSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            text_timeout: Duration::from_millis(config.text_timeout_ms),
            value_timeout: Duration::from_millis(config.value_timeout_ms),
            ..Self::default()
        }
    }
}
