//! Diagnostic scoring & strategy progress engine.
//!
//! Pure library consumed by the UI layer and a persistence collaborator:
//! it turns weighted diagnostic components into an overall score with a
//! narrative, tracks per-user strategy progress through an explicit
//! not-started → started → complete lifecycle, and decides when to surface
//! the feedback prompt. All inputs arrive materialized; the engine never
//! performs a remote read or write — mutations come back as
//! [`progress::PersistIntent`] values for the host to apply.

pub mod errors;
pub mod feedback;
pub mod ingest;
pub mod models;
pub mod progress;
pub mod scoring;

pub use errors::EngineError;
pub use feedback::{get_show_date, FeedbackContext, FeedbackDelays, FeedbackTimer};
pub use models::{
    AdviceRef, Diagnostic, DiagnosticComponent, FeedbackAnswer, Goal, OverallAssessment,
    ProjectState, PronounRegister, Strategy, StrategyCompletion, TitleVariants, WorkingStrategy,
};
pub use progress::{
    classify_strategies, get_progress, get_strategy_completion, get_strategy_completion_by_id,
    start_strategy, stop_strategy, strategy_state, submit_goals, PersistIntent, StrategyBuckets,
    StrategyState,
};
pub use scoring::{
    compute_score, weigh_component, weigh_components, DefaultNarratives, NarrativeProvider,
    RawTopicSignal, Score, ScoreBucket, ScoreCache,
};
