use std::collections::HashSet;

use tracing::warn;

use crate::error::TokenError;

/// Each requested token gets this many draws before giving up.
const ATTEMPTS_PER_TOKEN: usize = 32;
const MIN_ATTEMPTS: usize = 4096;

fn attempt_budget(requested: usize) -> usize {
    requested.saturating_mul(ATTEMPTS_PER_TOKEN).max(MIN_ATTEMPTS)
}

/// Draw from `next` until `requested` distinct values have been seen, keeping
/// first-seen order. Duplicates are dropped silently.
///
/// `capacity` is the number of distinct values `next` can possibly return.
/// Asking for more than that fails up front; otherwise the draw budget bounds
/// the loop.
pub fn collect_unique<F>(
    requested: usize,
    capacity: u128,
    mut next: F,
) -> Result<Vec<String>, TokenError>
where
    F: FnMut() -> String,
{
    if (requested as u128) > capacity {
        warn!(requested, capacity, "batch exceeds distinct token capacity");
        return Err(TokenError::InsufficientEntropy {
            requested,
            capacity,
        });
    }

    let budget = attempt_budget(requested);
    let mut seen = HashSet::with_capacity(requested);
    let mut tokens = Vec::with_capacity(requested);
    let mut attempts = 0;

    while tokens.len() < requested {
        if attempts == budget {
            warn!(requested, distinct = tokens.len(), attempts, "batch draw budget exhausted");
            return Err(TokenError::AttemptsExhausted {
                requested,
                distinct: tokens.len(),
                attempts,
            });
        }
        attempts += 1;

        let candidate = next();
        if seen.insert(candidate.clone()) {
            tokens.push(candidate);
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_absorbed() {
        let mut feed = ["a", "a", "b", "a", "c"].into_iter().map(String::from);
        let tokens = collect_unique(3, 3, || feed.next().unwrap()).unwrap();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_requested() {
        let tokens = collect_unique(0, 0, || unreachable!()).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_over_capacity_fails_up_front() {
        let mut calls = 0;
        let err = collect_unique(100, 52, || {
            calls += 1;
            String::new()
        })
        .unwrap_err();

        assert_eq!(
            err,
            TokenError::InsufficientEntropy {
                requested: 100,
                capacity: 52
            }
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_budget_stops_a_stuck_source() {
        // Claims plenty of capacity but only ever yields one value.
        let err = collect_unique(2, u128::MAX, || "same".to_string()).unwrap_err();
        assert_eq!(
            err,
            TokenError::AttemptsExhausted {
                requested: 2,
                distinct: 1,
                attempts: MIN_ATTEMPTS,
            }
        );
        assert!(err.is_insufficient_entropy());
    }

    #[test]
    fn test_budget_scales_with_request() {
        assert_eq!(attempt_budget(1), MIN_ATTEMPTS);
        assert_eq!(attempt_budget(1_000), 32_000);
        assert_eq!(attempt_budget(usize::MAX), usize::MAX);
    }
}
