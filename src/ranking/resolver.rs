use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::config::MATCH_THRESHOLD;
use crate::core::PlayerId;
use crate::error::{Result, StatEngineError};
use crate::ranking::{IndelRanker, NameCandidate, RankedCandidate, Ranker};

/// Resolved player name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameMatch {
    pub player_id: PlayerId,
    pub name: String,
    /// Similarity 0-100
    pub score: f64,
}

/// Maps user-typed names onto a candidate pool.
///
/// Picks the highest-scoring candidate; equal scores go to the
/// lexicographically smallest name, then to the earliest pool entry.
/// Anything below [`MATCH_THRESHOLD`] is `NotFound`.
#[derive(Clone)]
pub struct NameResolver {
    ranker: Arc<dyn Ranker>,
}

impl NameResolver {
    pub fn new(ranker: Arc<dyn Ranker>) -> Self {
        Self { ranker }
    }

    pub fn ranker_name(&self) -> &str {
        self.ranker.name()
    }

    pub fn resolve(&self, input: &str, candidates: &[NameCandidate]) -> Result<NameMatch> {
        let not_found = || StatEngineError::NotFound {
            input: input.to_string(),
        };

        let ranked = self.ranker.rank(input, candidates)?;
        let best = ranked
            .iter()
            .filter(|r| r.index < candidates.len())
            .min_by(|a, b| preference(a, b, candidates))
            .ok_or_else(not_found)?;

        let candidate = &candidates[best.index];
        tracing::debug!(
            "Resolved '{}' -> '{}' ({:.1}, {})",
            input,
            candidate.name,
            best.score,
            self.ranker.name()
        );

        if best.score < MATCH_THRESHOLD {
            return Err(not_found());
        }

        Ok(NameMatch {
            player_id: candidate.player_id.clone(),
            name: candidate.name.clone(),
            score: best.score,
        })
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(Arc::new(IndelRanker::new()))
    }
}

/// `Less` means `a` is preferred
fn preference(a: &RankedCandidate, b: &RankedCandidate, candidates: &[NameCandidate]) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| candidates[a.index].name.cmp(&candidates[b.index].name))
        .then_with(|| a.index.cmp(&b.index))
}
