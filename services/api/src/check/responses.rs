use cysafe_classifier::{RuleMatch, Verdict, VerdictLabel};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckLinkResponse {
    pub label: VerdictLabel,
    pub summary: String,
    pub matches: Vec<String>,
}

impl From<Verdict> for CheckLinkResponse {
    fn from(verdict: Verdict) -> Self {
        Self {
            label: verdict.label,
            summary: verdict.summary,
            matches: verdict.matches.iter().map(RuleMatch::bullet).collect(),
        }
    }
}
