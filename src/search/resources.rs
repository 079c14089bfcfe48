//! Resource tracking for search routines.
//!
//! The full solution set must reside in memory at once and grows faster than
//! exponentially with the board size, so budgeted entry points thread a
//! tracker through the search and surface overruns as
//! [`crate::search::SearchError::LimitExceeded`] instead of exhausting
//! memory. Budgets are approximate but correlate strongly with runtime and
//! allocation size.

use crate::search::{SearchCounts, SearchError, SearchLimits};

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: SearchLimits,
    counts: SearchCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            counts: SearchCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> SearchCounts {
        self.counts
    }

    #[inline]
    pub fn bump_solutions(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(stage, "solutions", delta, self.limits.max_solutions, |c| {
            &mut c.solutions
        })
    }

    #[inline]
    pub fn bump_nodes(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(stage, "nodes", delta, self.limits.max_nodes, |c| {
            &mut c.nodes
        })
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut SearchCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }
}
