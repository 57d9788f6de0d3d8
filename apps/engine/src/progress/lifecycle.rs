//! Strategy lifecycle — the not-started / started / complete state machine,
//! persistence intents for user actions, and display-bucket classification.
//!
//! Completion is always derived (started + progress == 100), never a stored
//! flag, so un-marking a goal moves a strategy back from complete to started
//! with no special casing. Mutating operations return `PersistIntent`s for
//! the persistence collaborator to apply; the engine never writes remotely.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Goal, ProjectState, Strategy, StrategyCompletion, WorkingStrategy};
use crate::progress::goals::get_progress;

// ────────────────────────────────────────────────────────────────────────────
// Derived state
// ────────────────────────────────────────────────────────────────────────────

/// Lifecycle state of one strategy, derived from its working record and goal
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyState {
    NotStarted,
    Started,
    Complete,
}

/// Derives the lifecycle state: not started without a `started_at`, complete
/// at 100% progress, started otherwise.
pub fn strategy_state(working: Option<&WorkingStrategy>, catalog: &[Goal]) -> StrategyState {
    match working {
        Some(ws) if ws.started_at.is_some() => {
            if get_progress(catalog, &ws.reached_goals) == 100 {
                StrategyState::Complete
            } else {
                StrategyState::Started
            }
        }
        _ => StrategyState::NotStarted,
    }
}

/// Completion view of one strategy against the project's working records.
pub fn get_strategy_completion(project: &ProjectState, strategy: &Strategy) -> StrategyCompletion {
    let working = project.working_strategy(&strategy.strategy_id);
    completion_of(working, &strategy.goals)
}

/// By-id variant over a strategy slice. An unknown id reads as not started.
pub fn get_strategy_completion_by_id(
    project: &ProjectState,
    strategies: &[Strategy],
    strategy_id: &str,
) -> StrategyCompletion {
    match strategies.iter().find(|s| s.strategy_id == strategy_id) {
        Some(strategy) => get_strategy_completion(project, strategy),
        None => completion_of(None, &[]),
    }
}

fn completion_of(working: Option<&WorkingStrategy>, catalog: &[Goal]) -> StrategyCompletion {
    let is_started = working.map(|ws| ws.started_at.is_some()).unwrap_or(false);
    // Progress is 0 until the strategy is started, whatever the stored map says.
    let progress = match working {
        Some(ws) if is_started => get_progress(catalog, &ws.reached_goals),
        _ => 0,
    };
    StrategyCompletion {
        is_started,
        is_complete: is_started && progress == 100,
        progress,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence intents
// ────────────────────────────────────────────────────────────────────────────

/// What the persistence collaborator should do with a working record. The
/// engine computes the new value; applying and acking it is the host's job
/// (optimistic local update, no await on the remote write).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersistIntent {
    Upsert(WorkingStrategy),
    Remove { strategy_id: String },
}

/// Explicit start. Idempotent: a strategy that is already started keeps its
/// original `started_at` and goal state.
pub fn start_strategy(
    existing: Option<&WorkingStrategy>,
    strategy_id: &str,
    now: DateTime<Utc>,
) -> PersistIntent {
    let mut ws = existing
        .cloned()
        .unwrap_or_else(|| WorkingStrategy::new(strategy_id));
    if ws.started_at.is_none() {
        ws.started_at = Some(now);
        ws.last_modified_at = Some(now);
    }
    PersistIntent::Upsert(ws)
}

/// Merges a goal-selection submission into the working record
/// (last-write-wins per goal id) and stamps `last_modified_at`.
///
/// Submitting goals on a strategy that has no `started_at` auto-starts it —
/// the first checkbox is the opt-in. This is the single place that rule
/// lives; callers never special-case it.
pub fn submit_goals(
    existing: Option<&WorkingStrategy>,
    strategy_id: &str,
    selections: &HashMap<String, bool>,
    now: DateTime<Utc>,
) -> PersistIntent {
    let mut ws = existing
        .cloned()
        .unwrap_or_else(|| WorkingStrategy::new(strategy_id));

    if ws.started_at.is_none() {
        debug!(strategy_id, "goal submission on unstarted strategy, auto-starting");
        ws.started_at = Some(now);
    }

    for (goal_id, reached) in selections {
        ws.reached_goals.insert(goal_id.clone(), *reached);
    }
    ws.last_modified_at = Some(now);

    PersistIntent::Upsert(ws)
}

/// Stop intent: removes the working record, returning the strategy to
/// not-started. The confirm gate (propose, then confirm) is the caller's
/// concern.
pub fn stop_strategy(strategy_id: &str) -> PersistIntent {
    PersistIntent::Remove {
        strategy_id: strategy_id.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

/// Display buckets for a strategy list, in the order the UI stacks them.
/// Each bucket preserves the input list's relative order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyBuckets<'a> {
    pub started: Vec<&'a Strategy>,
    pub main: Vec<&'a Strategy>,
    pub other: Vec<&'a Strategy>,
    pub complete: Vec<&'a Strategy>,
}

/// Stable partition of a strategy list into display buckets.
///
/// Priority per strategy: complete, then started, then other (secondary),
/// then main. A strategy with an empty id cannot be tracked and is excluded
/// rather than crashing the view. Recompute whenever the working-strategy
/// set changes; nothing is cached here.
pub fn classify_strategies<'a>(
    project: &ProjectState,
    strategies: &'a [Strategy],
) -> StrategyBuckets<'a> {
    let mut buckets = StrategyBuckets {
        started: Vec::new(),
        main: Vec::new(),
        other: Vec::new(),
        complete: Vec::new(),
    };

    for strategy in strategies {
        if strategy.strategy_id.is_empty() {
            warn!(title = %strategy.title, "strategy without id excluded from classification");
            continue;
        }

        let completion = get_strategy_completion(project, strategy);
        if completion.is_complete {
            buckets.complete.push(strategy);
        } else if completion.is_started {
            buckets.started.push(strategy);
        } else if strategy.is_secondary {
            buckets.other.push(strategy);
        } else {
            buckets.main.push(strategy);
        }
    }

    buckets
}
