use std::cmp::Reverse;

use crate::search::ScoredRecord;

/// Sorts by score, highest first. The sort is stable, so equal scores keep input order.
pub fn rank(results: &mut [ScoredRecord<'_>]) {
	results.sort_by_key(|result| Reverse(result.score));
}
