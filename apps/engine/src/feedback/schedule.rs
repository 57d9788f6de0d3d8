//! Feedback scheduling — the pure decision of when (if ever) to surface the
//! feedback prompt.
//!
//! This returns an absolute target instant, never a relative delay, so a
//! caller arming a timer against a stale "now" still fires at the right
//! moment. Arming and cancelling the timer is the mechanism's job
//! (`feedback::timer`), kept out of here so the decision stays unit-testable
//! without a clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::FeedbackAnswer;

/// Everything the decision needs, already materialized by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackContext {
    /// Present once the user answered; `score != 0` means answered.
    pub feedback: Option<FeedbackAnswer>,
    /// When the diagnostic was first shown to the user.
    pub diagnostic_shown_at: Option<DateTime<Utc>>,
    /// Most recent advice-read timestamp, if any.
    pub advice_read_at: Option<DateTime<Utc>>,
    /// Most recent submetric-expand timestamp, if any.
    pub submetric_expanded_at: Option<DateTime<Utc>>,
    /// When the user opened the strategy list, if they did.
    pub strategies_viewed_at: Option<DateTime<Utc>>,
    /// Start timestamps of every started strategy.
    pub strategy_started_ats: Vec<DateTime<Utc>>,
}

/// Prompt delays. Product-tunable; the defaults are the observed values.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackDelays {
    /// After the diagnostic is shown, when the user does nothing else.
    pub passive: Duration,
    /// After the most recent strategy start.
    pub after_start: Duration,
    /// After the diagnostic is shown, when the user browsed strategies but
    /// started none.
    pub browsing: Duration,
}

impl Default for FeedbackDelays {
    fn default() -> Self {
        Self {
            passive: Duration::seconds(13),
            after_start: Duration::seconds(20),
            browsing: Duration::seconds(60),
        }
    }
}

fn feedback_given(context: &FeedbackContext) -> bool {
    matches!(&context.feedback, Some(answer) if answer.score != 0)
}

/// When to surface the feedback prompt, or `None` for "never".
///
/// Decision ladder, first match wins:
/// 1. feedback already given — never re-prompt;
/// 2. engaged with content (advice read or submetric expanded) — prompt at
///    the latest engagement instant, i.e. immediately;
/// 3. at least one strategy started — latest start + `after_start`;
/// 4. strategies browsed but none started — shown + `browsing`;
/// 5. diagnostic shown only — shown + `passive`;
/// 6. nothing shown yet — never.
///
/// Total function: identical contexts yield structurally equal results, so
/// callers may re-invoke on every re-render and re-arm only when the value
/// changes.
pub fn get_show_date(context: &FeedbackContext, delays: &FeedbackDelays) -> Option<DateTime<Utc>> {
    if feedback_given(context) {
        return None;
    }

    let engagement = match (context.advice_read_at, context.submetric_expanded_at) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };
    if let Some(engaged_at) = engagement {
        return Some(engaged_at);
    }

    if let Some(latest_start) = context.strategy_started_ats.iter().max() {
        return Some(*latest_start + delays.after_start);
    }

    let shown_at = context.diagnostic_shown_at?;
    if context.strategies_viewed_at.is_some() {
        Some(shown_at + delays.browsing)
    } else {
        Some(shown_at + delays.passive)
    }
}
