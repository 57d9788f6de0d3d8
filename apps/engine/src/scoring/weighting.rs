//! Component weighting — normalizes raw per-topic signals into
//! `DiagnosticComponent`s.
//!
//! This is a boundary, not an algorithm: upstream already weighted the
//! signals. The job here is clamping, rounding, and degrading malformed
//! input to "undefined" instead of failing a user-facing view.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{DiagnosticComponent, TitleVariants};

/// Raw signal for one topic, as delivered by the upstream diagnostic
/// computation. `value` is `None` when there was not enough data to score
/// the topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTopicSignal {
    pub topic: String,
    pub value: Option<f64>,
    pub is_enticing: bool,
    pub text: String,
    pub title: TitleVariants,
}

/// Produces a `DiagnosticComponent` from a raw topic signal.
///
/// `percent` is the raw value rounded to the nearest integer and clamped to
/// [0, 100]. A missing or non-finite value yields `is_defined = false` with
/// the display sentinel 0.
pub fn weigh_component(signal: &RawTopicSignal) -> DiagnosticComponent {
    let (percent, is_defined) = match signal.value {
        Some(v) if v.is_finite() => (v.round().clamp(0.0, 100.0) as u32, true),
        Some(v) => {
            warn!(topic = %signal.topic, value = v, "non-finite topic signal, treating as undefined");
            (0, false)
        }
        None => (0, false),
    };

    DiagnosticComponent {
        topic: signal.topic.clone(),
        percent,
        is_defined,
        is_enticing: signal.is_enticing,
        text: signal.text.clone(),
        title: signal.title.clone(),
    }
}

/// Weighs a batch of topic signals, preserving input order.
pub fn weigh_components(signals: &[RawTopicSignal]) -> Vec<DiagnosticComponent> {
    signals.iter().map(weigh_component).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(topic: &str, value: Option<f64>) -> RawTopicSignal {
        RawTopicSignal {
            topic: topic.to_string(),
            value,
            is_enticing: false,
            text: "narrative".to_string(),
            title: TitleVariants {
                informal: "your market".to_string(),
                formal: "the market".to_string(),
            },
        }
    }

    #[test]
    fn test_rounds_to_nearest_integer() {
        assert_eq!(weigh_component(&signal("market", Some(72.6))).percent, 73);
        assert_eq!(weigh_component(&signal("market", Some(72.4))).percent, 72);
    }

    #[test]
    fn test_clamps_above_100() {
        let c = weigh_component(&signal("market", Some(140.0)));
        assert_eq!(c.percent, 100);
        assert!(c.is_defined);
    }

    #[test]
    fn test_clamps_below_zero() {
        let c = weigh_component(&signal("market", Some(-3.0)));
        assert_eq!(c.percent, 0);
        assert!(c.is_defined);
    }

    #[test]
    fn test_missing_value_is_undefined_with_sentinel_zero() {
        let c = weigh_component(&signal("profile", None));
        assert!(!c.is_defined);
        assert_eq!(c.percent, 0);
    }

    #[test]
    fn test_nan_degrades_to_undefined() {
        let c = weigh_component(&signal("profile", Some(f64::NAN)));
        assert!(!c.is_defined);
        assert_eq!(c.percent, 0);
    }

    #[test]
    fn test_infinite_degrades_to_undefined() {
        let c = weigh_component(&signal("profile", Some(f64::INFINITY)));
        assert!(!c.is_defined);
        assert_eq!(c.percent, 0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let out = weigh_components(&[signal("a", Some(10.0)), signal("b", Some(20.0))]);
        assert_eq!(out[0].topic, "a");
        assert_eq!(out[1].topic, "b");
    }

    #[test]
    fn test_pass_through_flags() {
        let mut s = signal("market", Some(50.0));
        s.is_enticing = true;
        let c = weigh_component(&s);
        assert!(c.is_enticing);
        assert_eq!(c.text, "narrative");
    }
}
