use rapidfuzz::distance::indel;

use crate::error::Result;
use crate::ranking::{NameCandidate, RankedCandidate, Ranker};

/// Rapidfuzz Indel ratio ranker (Levenshtein ratio without substitutions)
pub struct IndelRanker;

impl IndelRanker {
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive similarity of two names as a percentage (0-100)
    pub fn similarity(query: &str, name: &str) -> f64 {
        let query_lower = query.trim().to_lowercase();
        let name_lower = name.trim().to_lowercase();

        indel::normalized_similarity(query_lower.chars(), name_lower.chars()) * 100.0
    }
}

impl Default for IndelRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for IndelRanker {
    fn rank(&self, query: &str, candidates: &[NameCandidate]) -> Result<Vec<RankedCandidate>> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| {
                RankedCandidate::new(index, Self::similarity(query, &candidate.name))
            })
            .collect();

        // Sort by score descending, pool order kept on ties
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(ranked)
    }

    fn name(&self) -> &str {
        "indel"
    }
}
