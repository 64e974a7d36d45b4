use serde::{Deserialize, Serialize};

/// Day-count windows governing which treatment tier a returning customer may
/// book. Both boundaries are inclusive on the near side of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Days after a completed visit during which maintenance pricing applies.
    pub maintenance_window_days: i64,
    /// Days after a no-show during which the customer may not book at all.
    pub no_show_penalty_days: i64,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            maintenance_window_days: 30,
            no_show_penalty_days: 20,
        }
    }
}
