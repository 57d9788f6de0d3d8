//! Explicit memoization for computed scores.
//!
//! The cache is keyed by the three true inputs of `compute_score` —
//! diagnostic identity, display name, pronoun register — not by incidental
//! object identity, so host-framework wrapper churn cannot cause spurious
//! invalidation. One slot is enough: the UI shows one diagnostic at a time,
//! and any key change must force a recompute on the next read anyway.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::models::{Diagnostic, PronounRegister};
use crate::scoring::aggregate::{compute_score, NarrativeProvider, Score};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoreKey {
    diagnostic_id: Uuid,
    display_name: String,
    register: PronounRegister,
}

/// Single-slot memo table for the aggregate score.
///
/// `get_or_compute` with an unchanged key returns the cached `Arc` (same
/// allocation, no recompute). Any change to any of the three key inputs
/// recomputes lazily on the next read and replaces the slot.
#[derive(Default)]
pub struct ScoreCache {
    slot: Option<(ScoreKey, Arc<Score>)>,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &mut self,
        diagnostic: &Diagnostic,
        display_name: &str,
        register: PronounRegister,
        narratives: &dyn NarrativeProvider,
    ) -> Arc<Score> {
        let key = ScoreKey {
            diagnostic_id: diagnostic.id,
            display_name: display_name.to_string(),
            register,
        };

        if let Some((cached_key, score)) = &self.slot {
            if *cached_key == key {
                return Arc::clone(score);
            }
        }

        debug!(diagnostic_id = %key.diagnostic_id, "score cache miss, recomputing");
        let score = Arc::new(compute_score(diagnostic, display_name, register, narratives));
        self.slot = Some((key, Arc::clone(&score)));
        score
    }

    /// Drops the cached slot. Needed only when a caller mutates a diagnostic
    /// in place instead of refetching it under a new id.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Diagnostic, OverallAssessment};
    use crate::scoring::aggregate::DefaultNarratives;

    fn diagnostic(percent: u32) -> Diagnostic {
        Diagnostic {
            id: Uuid::new_v4(),
            overall: Some(OverallAssessment {
                percent,
                title: None,
                short_title: None,
            }),
            components: vec![],
        }
    }

    #[test]
    fn test_unchanged_inputs_return_same_allocation() {
        let d = diagnostic(70);
        let mut cache = ScoreCache::new();
        let a = cache.get_or_compute(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        let b = cache.get_or_compute(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_diagnostic_change_forces_recompute() {
        let d1 = diagnostic(70);
        let d2 = diagnostic(30);
        let mut cache = ScoreCache::new();
        let a = cache.get_or_compute(&d1, "Ada", PronounRegister::Informal, &DefaultNarratives);
        let b = cache.get_or_compute(&d2, "Ada", PronounRegister::Informal, &DefaultNarratives);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(b.percent, 30);
    }

    #[test]
    fn test_display_name_change_forces_recompute() {
        let d = diagnostic(70);
        let mut cache = ScoreCache::new();
        let a = cache.get_or_compute(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        let b = cache.get_or_compute(&d, "Grace", PronounRegister::Informal, &DefaultNarratives);
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_register_change_forces_recompute() {
        let d = diagnostic(70);
        let mut cache = ScoreCache::new();
        let a = cache.get_or_compute(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        let b = cache.get_or_compute(&d, "Ada", PronounRegister::Formal, &DefaultNarratives);
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_invalidate_clears_slot() {
        let d = diagnostic(70);
        let mut cache = ScoreCache::new();
        let a = cache.get_or_compute(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        cache.invalidate();
        let b = cache.get_or_compute(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);
    }
}
