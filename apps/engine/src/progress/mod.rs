pub mod goals;
pub mod lifecycle;

pub use goals::get_progress;
pub use lifecycle::{
    classify_strategies, get_strategy_completion, get_strategy_completion_by_id, start_strategy,
    stop_strategy, strategy_state, submit_goals, PersistIntent, StrategyBuckets, StrategyState,
};
