pub mod diagnostic;
pub mod strategy;

pub use diagnostic::{
    Diagnostic, DiagnosticComponent, OverallAssessment, PronounRegister, TitleVariants,
};
pub use strategy::{
    AdviceRef, FeedbackAnswer, Goal, ProjectState, Strategy, StrategyCompletion, WorkingStrategy,
};
