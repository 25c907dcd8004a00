//! Session configuration from defaults and environment.

use roster_core::params::DEFAULT_ITEMS_PER_PAGE;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub items_per_page: usize,
    /// Start from the ten-employee seed roster.
    pub seed: bool,
}

impl Default for SessionConfig {
    fn default() -> Self { Self { items_per_page: DEFAULT_ITEMS_PER_PAGE, seed: true } }
}

impl SessionConfig {
    /// Defaults overridden by `ROSTER_PAGE_SIZE` and `ROSTER_SEED`.
    pub fn from_env() -> Self { Self::from_vars(|k| std::env::var(k).ok()) }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(raw) = var("ROSTER_PAGE_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => cfg.items_per_page = n,
                _ => warn!(value = %raw, "invalid ROSTER_PAGE_SIZE; expected positive integer"),
            }
        }
        if let Some(raw) = var("ROSTER_SEED") {
            cfg.seed = !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off");
        }
        cfg
    }
}
