pub mod aggregate;
pub mod cache;
pub mod weighting;

pub use aggregate::{compute_score, DefaultNarratives, NarrativeProvider, Score, ScoreBucket};
pub use cache::ScoreCache;
pub use weighting::{weigh_component, weigh_components, RawTopicSignal};
