//! Score aggregation — maps a diagnostic's overall percent onto a narrative
//! bucket, color token, and title pair.
//!
//! The aggregator never averages components: they are independently weighted
//! upstream. Its job is strictly bucket/narrative selection from the given
//! percent, honoring the diagnostic's own overall assessment when present.

use serde::{Deserialize, Serialize};

use crate::models::{Diagnostic, DiagnosticComponent, PronounRegister};

// ────────────────────────────────────────────────────────────────────────────
// Buckets
// ────────────────────────────────────────────────────────────────────────────

/// The five narrative buckets. Boundaries are inclusive-low: a percent of
/// exactly 60 is `Good`, not `Fair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBucket {
    Dismal,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl ScoreBucket {
    /// Bucket for a percent in [0, 100]. Out-of-range input saturates into
    /// the nearest bucket rather than panicking.
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            0..=19 => ScoreBucket::Dismal,
            20..=39 => ScoreBucket::Weak,
            40..=59 => ScoreBucket::Fair,
            60..=79 => ScoreBucket::Good,
            _ => ScoreBucket::Excellent,
        }
    }

    /// Fixed color token for this bucket, consumed by the rendering layer.
    pub fn color_token(self) -> &'static str {
        match self {
            ScoreBucket::Dismal => "red",
            ScoreBucket::Weak => "orange",
            ScoreBucket::Fair => "yellow",
            ScoreBucket::Good => "light-green",
            ScoreBucket::Excellent => "green",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Narrative seam
// ────────────────────────────────────────────────────────────────────────────

/// Supplies the wording for bucket titles and the insufficient-data fallback.
///
/// The real application swaps in a localized provider; `DefaultNarratives`
/// ships as the stock English implementation so the engine is usable (and
/// testable) standalone.
pub trait NarrativeProvider {
    fn bucket_title(&self, bucket: ScoreBucket, display_name: &str, register: PronounRegister)
        -> String;
    fn bucket_short_title(&self, bucket: ScoreBucket) -> String;
    fn insufficient_data_title(&self, register: PronounRegister) -> String;
}

/// Stock narrative wording.
pub struct DefaultNarratives;

impl NarrativeProvider for DefaultNarratives {
    fn bucket_title(
        &self,
        bucket: ScoreBucket,
        display_name: &str,
        register: PronounRegister,
    ) -> String {
        let (informal, formal) = match bucket {
            ScoreBucket::Dismal => (
                "your search needs a reset",
                "the search calls for a fresh start",
            ),
            ScoreBucket::Weak => ("your search is struggling", "the search is on fragile ground"),
            ScoreBucket::Fair => ("your search is taking shape", "the search is taking shape"),
            ScoreBucket::Good => ("your search is on track", "the search is on track"),
            ScoreBucket::Excellent => (
                "your search is in great shape",
                "the search is in great shape",
            ),
        };
        let phrase = match register {
            PronounRegister::Informal => informal,
            PronounRegister::Formal => formal,
        };
        format!("{display_name}, {phrase}")
    }

    fn bucket_short_title(&self, bucket: ScoreBucket) -> String {
        match bucket {
            ScoreBucket::Dismal => "Needs a reset",
            ScoreBucket::Weak => "Struggling",
            ScoreBucket::Fair => "Taking shape",
            ScoreBucket::Good => "On track",
            ScoreBucket::Excellent => "In great shape",
        }
        .to_string()
    }

    fn insufficient_data_title(&self, register: PronounRegister) -> String {
        match register {
            PronounRegister::Informal => {
                "We don't know enough about your search yet".to_string()
            }
            PronounRegister::Formal => {
                "We don't know enough about the search yet".to_string()
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Score computation
// ────────────────────────────────────────────────────────────────────────────

/// Aggregate view of one diagnostic: overall percent, color token, narrative
/// titles, and the ordered component sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    pub percent: u32,
    pub color: &'static str,
    pub title: String,
    pub short_title: String,
    pub components: Vec<DiagnosticComponent>,
}

/// Computes the aggregate `Score` for a diagnostic.
///
/// The diagnostic's own overall assessment is authoritative when present;
/// its percent is clamped to [0, 100] and missing title fields fall back to
/// the bucket narratives. With no overall and no components, the percent is
/// 0 and the insufficient-data narrative is used.
pub fn compute_score(
    diagnostic: &Diagnostic,
    display_name: &str,
    register: PronounRegister,
    narratives: &dyn NarrativeProvider,
) -> Score {
    let insufficient = diagnostic.overall.is_none() && diagnostic.components.is_empty();

    let percent = diagnostic
        .overall
        .as_ref()
        .map(|o| o.percent.min(100))
        .unwrap_or(0);
    let bucket = ScoreBucket::from_percent(percent);

    let title = diagnostic
        .overall
        .as_ref()
        .and_then(|o| o.title.clone())
        .unwrap_or_else(|| {
            if insufficient {
                narratives.insufficient_data_title(register)
            } else {
                narratives.bucket_title(bucket, display_name, register)
            }
        });

    let short_title = diagnostic
        .overall
        .as_ref()
        .and_then(|o| o.short_title.clone())
        .unwrap_or_else(|| narratives.bucket_short_title(bucket));

    Score {
        percent,
        color: bucket.color_token(),
        title,
        short_title,
        components: diagnostic.components.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OverallAssessment, TitleVariants};
    use uuid::Uuid;

    fn component(topic: &str, percent: u32) -> DiagnosticComponent {
        DiagnosticComponent {
            topic: topic.to_string(),
            percent,
            is_defined: true,
            is_enticing: false,
            text: String::new(),
            title: TitleVariants {
                informal: topic.to_string(),
                formal: topic.to_string(),
            },
        }
    }

    fn diagnostic(overall: Option<OverallAssessment>, components: Vec<DiagnosticComponent>) -> Diagnostic {
        Diagnostic {
            id: Uuid::new_v4(),
            overall,
            components,
        }
    }

    #[test]
    fn test_bucket_boundaries_are_inclusive_low() {
        assert_eq!(ScoreBucket::from_percent(0), ScoreBucket::Dismal);
        assert_eq!(ScoreBucket::from_percent(19), ScoreBucket::Dismal);
        assert_eq!(ScoreBucket::from_percent(20), ScoreBucket::Weak);
        assert_eq!(ScoreBucket::from_percent(40), ScoreBucket::Fair);
        assert_eq!(ScoreBucket::from_percent(60), ScoreBucket::Good);
        assert_eq!(ScoreBucket::from_percent(79), ScoreBucket::Good);
        assert_eq!(ScoreBucket::from_percent(80), ScoreBucket::Excellent);
        assert_eq!(ScoreBucket::from_percent(100), ScoreBucket::Excellent);
    }

    #[test]
    fn test_exactly_60_is_good_not_fair() {
        let d = diagnostic(
            Some(OverallAssessment {
                percent: 60,
                title: None,
                short_title: None,
            }),
            vec![component("market", 60)],
        );
        let score = compute_score(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        assert_eq!(score.color, "light-green");
        assert_eq!(score.short_title, "On track");
    }

    #[test]
    fn test_color_tokens_one_per_bucket() {
        assert_eq!(ScoreBucket::Dismal.color_token(), "red");
        assert_eq!(ScoreBucket::Weak.color_token(), "orange");
        assert_eq!(ScoreBucket::Fair.color_token(), "yellow");
        assert_eq!(ScoreBucket::Good.color_token(), "light-green");
        assert_eq!(ScoreBucket::Excellent.color_token(), "green");
    }

    #[test]
    fn test_overall_assessment_is_authoritative() {
        let d = diagnostic(
            Some(OverallAssessment {
                percent: 85,
                title: Some("Custom title".to_string()),
                short_title: Some("Custom".to_string()),
            }),
            vec![component("market", 10)],
        );
        let score = compute_score(&d, "Ada", PronounRegister::Formal, &DefaultNarratives);
        assert_eq!(score.percent, 85);
        assert_eq!(score.title, "Custom title");
        assert_eq!(score.short_title, "Custom");
    }

    #[test]
    fn test_overall_percent_clamped_to_100() {
        let d = diagnostic(
            Some(OverallAssessment {
                percent: 250,
                title: None,
                short_title: None,
            }),
            vec![],
        );
        let score = compute_score(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        assert_eq!(score.percent, 100);
        assert_eq!(score.color, "green");
    }

    #[test]
    fn test_empty_diagnostic_uses_insufficient_data_narrative() {
        let d = diagnostic(None, vec![]);
        let score = compute_score(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        assert_eq!(score.percent, 0);
        assert!(score.title.contains("don't know enough"));
    }

    #[test]
    fn test_register_switches_title_phrasing() {
        let d = diagnostic(
            Some(OverallAssessment {
                percent: 70,
                title: None,
                short_title: None,
            }),
            vec![component("market", 70)],
        );
        let informal = compute_score(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        let formal = compute_score(&d, "Ada", PronounRegister::Formal, &DefaultNarratives);
        assert_ne!(informal.title, formal.title);
        assert!(informal.title.contains("your search"));
    }

    #[test]
    fn test_components_pass_through_in_order() {
        let d = diagnostic(
            Some(OverallAssessment {
                percent: 50,
                title: None,
                short_title: None,
            }),
            vec![component("market", 40), component("profile", 60)],
        );
        let score = compute_score(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        assert_eq!(score.components[0].topic, "market");
        assert_eq!(score.components[1].topic, "profile");
    }

    #[test]
    fn test_idempotent_structural_equality() {
        let d = diagnostic(
            Some(OverallAssessment {
                percent: 42,
                title: None,
                short_title: None,
            }),
            vec![component("market", 42)],
        );
        let a = compute_score(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        let b = compute_score(&d, "Ada", PronounRegister::Informal, &DefaultNarratives);
        assert_eq!(a, b);
    }
}
