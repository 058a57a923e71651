use regex::RegexBuilder;
use serde::Serialize;

use cysafe_common::error::{CysafeError, CysafeResult};

use crate::rules::{Rule, RuleAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictLabel {
    LikelySafe,
    Suspicious,
    LikelyMalicious,
}

impl VerdictLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikelySafe => "likely_safe",
            Self::Suspicious => "suspicious",
            Self::LikelyMalicious => "likely_malicious",
        }
    }
}

/// One matched rule, in rule-file encounter order.
#[derive(Debug, Clone, Serialize)]
pub struct RuleMatch {
    pub category: String,
    pub action: RuleAction,
}

impl RuleMatch {
    pub fn bullet(&self) -> String {
        format!("Matched {} (Action: {})", self.category, self.action)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub label: VerdictLabel,
    pub summary: String,
    pub matches: Vec<RuleMatch>,
}

const SAFE_SUMMARY: &str = "Likely safe: no known scam patterns matched this link.";
const SUSPICIOUS_SUMMARY: &str =
    "Suspicious: this link matched one or more risky patterns. Treat it with caution.";
const MALICIOUS_SUMMARY: &str =
    "Likely malicious: this link matched known scam patterns. Do not visit it.";

/// Evaluate a candidate URL against the full rule table.
///
/// Every rule is checked (no short-circuit) so the verdict can report each
/// matched category; severity is then a max reduction over the matched
/// set, with a single malicious hit outranking any number of weaker ones.
/// A pattern that fails to compile disables only its own rule.
pub fn evaluate(rules: &[Rule], url: &str) -> CysafeResult<Verdict> {
    if url.trim().is_empty() {
        return Err(CysafeError::EmptyInput("no URL provided".to_string()));
    }

    let mut matches = Vec::new();
    for rule in rules {
        let regex = match RegexBuilder::new(&rule.pattern)
            .case_insensitive(true)
            .build()
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(category = %rule.category, error = %e, "skipping rule with invalid pattern");
                continue;
            }
        };

        if regex.is_match(url) {
            matches.push(RuleMatch {
                category: rule.category.clone(),
                action: rule.action,
            });
        }
    }

    let label = if matches.iter().any(|m| m.action == RuleAction::Malicious) {
        VerdictLabel::LikelyMalicious
    } else if !matches.is_empty() {
        VerdictLabel::Suspicious
    } else {
        VerdictLabel::LikelySafe
    };

    let mut summary = match label {
        VerdictLabel::LikelySafe => SAFE_SUMMARY,
        VerdictLabel::Suspicious => SUSPICIOUS_SUMMARY,
        VerdictLabel::LikelyMalicious => MALICIOUS_SUMMARY,
    }
    .to_string();

    if !matches.is_empty() {
        summary.push('\n');
        for m in &matches {
            summary.push_str("\n- ");
            summary.push_str(&m.bullet());
        }
    }

    Ok(Verdict {
        label,
        summary,
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(category: &str, pattern: &str, action: RuleAction) -> Rule {
        Rule {
            category: category.to_string(),
            pattern: pattern.to_string(),
            action,
        }
    }

    fn sample_rules() -> Vec<Rule> {
        vec![
            rule("Typosquat", "paypa1", RuleAction::Malicious),
            rule("Shortener", r"bit\.ly", RuleAction::Suspicious),
        ]
    }

    #[test]
    fn t01_no_match_is_likely_safe() {
        let verdict = evaluate(&sample_rules(), "http://example.com").expect("verdict");
        assert_eq!(verdict.label, VerdictLabel::LikelySafe);
        assert!(verdict.matches.is_empty());
        assert_eq!(verdict.summary, SAFE_SUMMARY);
    }

    #[test]
    fn t02_malicious_rule_wins() {
        let verdict = evaluate(&sample_rules(), "http://paypa1.com/login").expect("verdict");
        assert_eq!(verdict.label, VerdictLabel::LikelyMalicious);
        assert_eq!(verdict.matches.len(), 1);
        assert_eq!(
            verdict.matches[0].bullet(),
            "Matched Typosquat (Action: Malicious)"
        );
    }

    #[test]
    fn t03_non_malicious_match_is_suspicious() {
        let verdict = evaluate(&sample_rules(), "http://bit.ly/xyz").expect("verdict");
        assert_eq!(verdict.label, VerdictLabel::Suspicious);
        assert_eq!(verdict.matches.len(), 1);
        assert_eq!(verdict.matches[0].category, "Shortener");
    }

    #[test]
    fn t04_malicious_outranks_any_number_of_suspicious_hits() {
        let rules = vec![
            rule("A", "scam", RuleAction::Suspicious),
            rule("B", "scam", RuleAction::Unknown),
            rule("C", "scam", RuleAction::Malicious),
            rule("D", "scam", RuleAction::Suspicious),
        ];
        let verdict = evaluate(&rules, "http://scam.example").expect("verdict");
        assert_eq!(verdict.label, VerdictLabel::LikelyMalicious);
        assert_eq!(verdict.matches.len(), 4);
    }

    #[test]
    fn t05_matches_preserve_rule_order() {
        let rules = vec![
            rule("First", "link", RuleAction::Suspicious),
            rule("Second", "example", RuleAction::Suspicious),
            rule("Third", "link", RuleAction::Suspicious),
        ];
        let verdict = evaluate(&rules, "http://link.example").expect("verdict");
        let categories: Vec<&str> = verdict
            .matches
            .iter()
            .map(|m| m.category.as_str())
            .collect();
        assert_eq!(categories, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn t06_matching_is_case_insensitive() {
        let verdict = evaluate(&sample_rules(), "http://PAYPA1.COM").expect("verdict");
        assert_eq!(verdict.label, VerdictLabel::LikelyMalicious);
    }

    #[test]
    fn t07_invalid_pattern_disables_only_itself() {
        let rules = vec![
            rule("Broken", "(unclosed", RuleAction::Malicious),
            rule("Shortener", r"bit\.ly", RuleAction::Suspicious),
        ];
        let verdict = evaluate(&rules, "http://bit.ly/abc").expect("verdict");
        assert_eq!(verdict.label, VerdictLabel::Suspicious);
        assert_eq!(verdict.matches.len(), 1);
        assert_eq!(verdict.matches[0].category, "Shortener");
    }

    #[test]
    fn t08_blank_url_is_empty_input() {
        for url in ["", "   ", "\t\n"] {
            let err = evaluate(&sample_rules(), url).unwrap_err();
            assert!(matches!(err, CysafeError::EmptyInput(_)), "url={url:?}");
        }
    }

    #[test]
    fn t09_evaluation_is_idempotent() {
        let rules = sample_rules();
        let first = evaluate(&rules, "http://bit.ly/xyz").expect("verdict");
        let second = evaluate(&rules, "http://bit.ly/xyz").expect("verdict");
        assert_eq!(first.label, second.label);
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.matches.len(), second.matches.len());
    }

    #[test]
    fn t10_summary_lists_matched_bullets() {
        let rules = vec![
            rule("Shortener", r"bit\.ly", RuleAction::Suspicious),
            rule("Urgency Bait", "xyz", RuleAction::Unknown),
        ];
        let verdict = evaluate(&rules, "http://bit.ly/xyz").expect("verdict");
        assert!(verdict.summary.starts_with(SUSPICIOUS_SUMMARY));
        assert!(verdict
            .summary
            .contains("- Matched Shortener (Action: Suspicious)"));
        assert!(verdict
            .summary
            .contains("- Matched Urgency Bait (Action: Unknown)"));
    }

    #[test]
    fn t11_empty_rule_table_is_likely_safe() {
        let verdict = evaluate(&[], "http://anything.example").expect("verdict");
        assert_eq!(verdict.label, VerdictLabel::LikelySafe);
        assert!(verdict.matches.is_empty());
    }
}
