use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pronoun register used when picking between the two phrasings of a
/// narrative title. Selection logic (who gets which register) lives upstream;
/// the engine only routes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PronounRegister {
    Informal,
    Formal,
}

/// A narrative title in both pronoun registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleVariants {
    pub informal: String,
    pub formal: String,
}

impl TitleVariants {
    pub fn select(&self, register: PronounRegister) -> &str {
        match register {
            PronounRegister::Informal => &self.informal,
            PronounRegister::Formal => &self.formal,
        }
    }
}

/// One facet of the user's situation (e.g. "market tension",
/// "profile definition").
///
/// `percent` is always in [0, 100]. When `is_defined` is false there was not
/// enough upstream data to score the topic: `percent` holds the display
/// sentinel 0 and must never be used for ordering comparisons.
/// `is_enticing` is a pass-through flag for the rendering layer (auto-expand).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticComponent {
    pub topic: String,
    pub percent: u32,
    pub is_defined: bool,
    pub is_enticing: bool,
    pub text: String,
    pub title: TitleVariants,
}

/// The diagnostic's own overall assessment, when the upstream computation
/// provides one. Authoritative over anything derived locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    pub percent: u32,
    pub title: Option<String>,
    pub short_title: Option<String>,
}

/// A computed assessment of the user's job-search situation.
///
/// Produced wholesale by the remote collaborator; a content change arrives as
/// a new `id`. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub id: Uuid,
    pub overall: Option<OverallAssessment>,
    pub components: Vec<DiagnosticComponent>,
}
