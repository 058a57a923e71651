pub mod engine;
pub mod gemini;
pub mod rules;

use std::path::PathBuf;

use cysafe_common::error::{CysafeError, CysafeResult};

pub use engine::{evaluate, RuleMatch, Verdict, VerdictLabel};
pub use gemini::GeminiClassifier;
pub use rules::{load, Rule, RuleAction};

/// Pattern-table variant: re-reads the rule file on every call, so edits
/// to the table take effect without a restart and concurrent requests
/// never see stale rules.
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    path: PathBuf,
}

impl PatternClassifier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn classify(&self, url: &str) -> CysafeResult<Verdict> {
        if url.trim().is_empty() {
            return Err(CysafeError::EmptyInput("no URL provided".to_string()));
        }
        let rules = rules::load(&self.path)?;
        engine::evaluate(&rules, url)
    }
}

/// The two link-checker variants behind one seam, so request handling is
/// agnostic to which backend is configured.
#[derive(Clone)]
pub enum Classifier {
    Patterns(PatternClassifier),
    Gemini(GeminiClassifier),
}

impl Classifier {
    pub async fn classify(&self, url: &str) -> CysafeResult<Verdict> {
        match self {
            Self::Patterns(patterns) => patterns.classify(url),
            Self::Gemini(gemini) => gemini.classify(url).await,
        }
    }
}
