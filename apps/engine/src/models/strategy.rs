use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One checklist item in a strategy's goal catalog.
///
/// Catalogs are derived upstream from the strategy id plus the active locale;
/// the engine treats them as opaque ordered sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub goal_id: String,
    pub content: String,
    pub step_title: String,
}

/// Reference from a strategy to one actionable piece of advice.
/// An advice entry may be referenced by several strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRef {
    pub advice_id: String,
    pub teaser: Option<String>,
}

/// A recommended multi-step plan.
///
/// `strategy_id` is the sole identity key for lifecycle tracking; an empty id
/// marks a catalog entry the upstream could not resolve. `score` is the
/// expected percent impact, display-only — it is never aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub strategy_id: String,
    pub title: String,
    pub is_principal: bool,
    pub is_secondary: bool,
    pub score: u32,
    pub pieces_of_advice: Vec<AdviceRef>,
    pub goals: Vec<Goal>,
}

/// Per-user mutable progress record for one strategy.
///
/// `started_at` absent means not started, and implies `reached_goals` is
/// empty — goal submissions on an unstarted strategy auto-start it (see
/// `progress::lifecycle::submit_goals`) rather than violating this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingStrategy {
    pub strategy_id: String,
    pub started_at: Option<DateTime<Utc>>,
    pub last_modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reached_goals: HashMap<String, bool>,
}

impl WorkingStrategy {
    /// An empty, unstarted record for the given strategy.
    pub fn new(strategy_id: impl Into<String>) -> Self {
        Self {
            strategy_id: strategy_id.into(),
            started_at: None,
            last_modified_at: None,
            reached_goals: HashMap::new(),
        }
    }
}

/// A submitted feedback answer. `score == 0` means "not answered yet" —
/// upstream stores 0 until the user actually rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAnswer {
    pub score: u32,
    pub comment: Option<String>,
}

/// Snapshot of the per-user project state, handed in by the persistence
/// collaborator. The engine computes derived values from it and returns
/// intents; it never writes it back itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectState {
    pub id: Uuid,
    #[serde(default)]
    pub working_strategies: Vec<WorkingStrategy>,
    pub feedback: Option<FeedbackAnswer>,
}

impl ProjectState {
    /// Looks up the working record for a strategy, if the user ever touched it.
    pub fn working_strategy(&self, strategy_id: &str) -> Option<&WorkingStrategy> {
        self.working_strategies
            .iter()
            .find(|ws| ws.strategy_id == strategy_id)
    }
}

/// Derived completion view of one strategy. Never stored.
///
/// Invariants: `is_complete` implies `is_started`; `progress` is 0 when not
/// started and non-decreasing as goals are reached for a fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyCompletion {
    pub is_started: bool,
    pub is_complete: bool,
    pub progress: u32,
}
