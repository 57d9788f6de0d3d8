//! Ingestion boundary — tolerant decoding of remote-API payloads.
//!
//! The remote collaborator's JSON is not trusted: out-of-range percents are
//! clamped, malformed component entries degrade to undefined instead of
//! aborting the diagnostic, and invalid timestamps are dropped. Only a
//! payload with no usable identity fails, and that is the one place in the
//! engine an error value exists.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::errors::EngineError;
use crate::models::{
    Diagnostic, DiagnosticComponent, OverallAssessment, TitleVariants, WorkingStrategy,
};

/// Decodes a diagnostic payload. Fails only when the payload carries no id;
/// every malformed sub-field degrades in place.
pub fn parse_diagnostic(payload: &Value) -> Result<Diagnostic, EngineError> {
    let id = payload
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or(EngineError::MissingField("id"))?;

    let overall = payload.get("overall").and_then(parse_overall);

    let components = payload
        .get("components")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_component).collect())
        .unwrap_or_default();

    Ok(Diagnostic {
        id,
        overall,
        components,
    })
}

fn parse_overall(value: &Value) -> Option<OverallAssessment> {
    let percent = parse_percent(value.get("percent")?)?;
    Some(OverallAssessment {
        percent,
        title: value.get("title").and_then(Value::as_str).map(String::from),
        short_title: value
            .get("shortTitle")
            .and_then(Value::as_str)
            .map(String::from),
    })
}

fn parse_component(value: &Value) -> Option<DiagnosticComponent> {
    let topic = match value.get("topic").and_then(Value::as_str) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => {
            warn!("diagnostic component without topic, skipping");
            return None;
        }
    };

    // A missing or malformed percent degrades this component to undefined,
    // never the whole diagnostic.
    let (percent, is_defined) = match value.get("percent").and_then(parse_percent) {
        Some(p) if value.get("isDefined").and_then(Value::as_bool) != Some(false) => (p, true),
        Some(_) => (0, false),
        None => {
            warn!(topic = %topic, "component percent malformed, treating as undefined");
            (0, false)
        }
    };

    Some(DiagnosticComponent {
        topic,
        percent,
        is_defined,
        is_enticing: value
            .get("isEnticing")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        text: value
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        title: parse_title(value.get("title")),
    })
}

fn parse_title(value: Option<&Value>) -> TitleVariants {
    let get = |key: &str| {
        value
            .and_then(|v| v.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    TitleVariants {
        informal: get("informal"),
        formal: get("formal"),
    }
}

fn parse_percent(value: &Value) -> Option<u32> {
    let raw = value.as_f64()?;
    Some(raw.round().clamp(0.0, 100.0) as u32)
}

/// Decodes a working-strategy payload. Invalid timestamps are dropped with a
/// warning; non-boolean reached-goal entries are ignored.
pub fn parse_working_strategy(payload: &Value) -> Result<WorkingStrategy, EngineError> {
    let strategy_id = payload
        .get("strategyId")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(EngineError::MissingField("strategyId"))?
        .to_string();

    let reached_goals: HashMap<String, bool> = payload
        .get("reachedGoals")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_bool().map(|b| (k.clone(), b)))
                .collect()
        })
        .unwrap_or_default();

    Ok(WorkingStrategy {
        strategy_id,
        started_at: parse_timestamp(payload.get("startedAt"), "startedAt"),
        last_modified_at: parse_timestamp(payload.get("lastModifiedAt"), "lastModifiedAt"),
        reached_goals,
    })
}

/// Accepts RFC 3339 strings or epoch milliseconds, the two shapes the remote
/// API has been seen emitting. Negative epochs are malformed and dropped.
fn parse_timestamp(value: Option<&Value>, field: &str) -> Option<DateTime<Utc>> {
    let value = value?;
    if value.is_null() {
        return None;
    }

    if let Some(s) = value.as_str() {
        return match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(_) => {
                warn!(field, raw = %s, "unparseable timestamp, dropping");
                None
            }
        };
    }

    if let Some(millis) = value.as_i64() {
        if millis < 0 {
            warn!(field, millis, "negative epoch timestamp, dropping");
            return None;
        }
        return Utc.timestamp_millis_opt(millis).single();
    }

    warn!(field, "timestamp has unexpected type, dropping");
    None
}
