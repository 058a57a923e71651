use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use cysafe_common::error::{CysafeError, CysafeResult};

/// Severity a rule assigns to a match. Only `Malicious` has special
/// meaning during verdict aggregation; every other value is a
/// non-malicious match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleAction {
    Malicious,
    Suspicious,
    Unknown,
}

impl RuleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Malicious => "Malicious",
            Self::Suspicious => "Suspicious",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse the third CSV field. Empty defaults to `Suspicious`; the
    /// literal token "malicious" is matched case-insensitively.
    fn from_field(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("suspicious") {
            Self::Suspicious
        } else if trimmed.eq_ignore_ascii_case("malicious") {
            Self::Malicious
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classification rule, immutable once loaded. The pattern is kept
/// as text; it is compiled (case-insensitively) at evaluation time so a
/// bad pattern disables only itself.
#[derive(Debug, Clone)]
pub struct Rule {
    pub category: String,
    pub pattern: String,
    pub action: RuleAction,
}

/// Load the ordered rule table from a CSV file.
///
/// The first record is a header and is skipped; data rows map
/// positionally to `(category, pattern, action)`. Rows with fewer than
/// three fields are skipped with a debug log, never fatal. An unopenable
/// file is a hard `SourceUnavailable` error.
pub fn load(path: &Path) -> CysafeResult<Vec<Rule>> {
    let file = File::open(path)
        .map_err(|e| CysafeError::SourceUnavailable(format!("{}: {e}", path.display())))?;
    load_from_reader(file)
}

pub fn load_from_reader<R: Read>(input: R) -> CysafeResult<Vec<Rule>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut rules = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        // Data rows start after the header, so the file row is idx + 2.
        let row = idx + 2;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(row, error = %e, "skipping unreadable pattern row");
                continue;
            }
        };
        if record.len() < 3 {
            tracing::debug!(row, fields = record.len(), "skipping short pattern row");
            continue;
        }

        rules.push(Rule {
            category: record[0].trim().to_string(),
            pattern: record[1].trim().to_string(),
            action: RuleAction::from_field(&record[2]),
        });
    }

    Ok(rules)
}
