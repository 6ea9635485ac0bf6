//! Search configuration types.

use std::time::Duration;

/// Limits applied by [`Query`](crate::proof::Query) between solutions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop after this many solutions
    pub max_solutions: usize,
    /// Stop once this much time has passed since the query was built
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    pub fn with_max_solutions(mut self, max_solutions: usize) -> Self {
        self.max_solutions = max_solutions;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_solutions: 0, // 0 means no limit
            timeout: None,
        }
    }
}
