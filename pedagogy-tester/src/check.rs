use pedagogy_core::Strategy;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Position of the record in the catalog array.
    pub index: usize,
    pub id: String,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckSummary {
    pub strategies: usize,
    pub errors: usize,
    pub warnings: usize,
    pub findings: Vec<Finding>,
}

impl CheckSummary {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.errors == 0
    }
}

/// Validate every record of a parsed catalog.
#[must_use]
pub fn check_catalog(strategies: &[Strategy]) -> CheckSummary {
    let mut findings = Vec::new();
    let mut first_seen: BTreeMap<&str, usize> = BTreeMap::new();

    for (index, s) in strategies.iter().enumerate() {
        let mut push = |severity, message: String| {
            findings.push(Finding {
                index,
                id: s.id.clone(),
                severity,
                message,
            });
        };

        if s.id.trim().is_empty() {
            push(Severity::Error, "id is empty".to_string());
        } else if let Some(first) = first_seen.get(s.id.as_str()) {
            push(
                Severity::Error,
                format!("duplicate id (first used at index {first})"),
            );
        } else {
            first_seen.insert(&s.id, index);
        }
        if s.title.trim().is_empty() {
            push(Severity::Error, "title is empty".to_string());
        }
        if s.phase.trim().is_empty() {
            push(Severity::Error, "phase is empty".to_string());
        }

        if s.body().is_empty() {
            push(
                Severity::Warning,
                "no description or instructions".to_string(),
            );
        }
        if s.commands.is_empty() {
            push(Severity::Warning, "no command words".to_string());
        }
        if let Some(raw) = s.youtube.as_deref().map(str::trim).filter(|v| !v.is_empty())
            && let Err(err) = Url::parse(raw)
        {
            push(Severity::Warning, format!("youtube is not a URL ({err})"));
        }
        if s.search_query.as_deref().is_some_and(|q| q.trim().is_empty()) {
            push(Severity::Warning, "searchQuery is empty".to_string());
        }
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    CheckSummary {
        strategies: strategies.len(),
        errors,
        warnings: findings.len() - errors,
        findings,
    }
}
