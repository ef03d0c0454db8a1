//! Built-in rewrite rules

use regex::Regex;
use std::sync::LazyLock;

use super::{RewriteRule, Step};
use crate::types::{DependencyBump, Transformed};

/// Appended to lines cut by [`SoftTruncate`]
pub const ELLIPSIS: &str = "...";

static INIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^init\.?$").expect("Invalid regex"));

static VERSION_CHORE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(chore|bump):\s+").expect("Invalid regex"));

static BUMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^bump\s+(?P<package>[\w@/-]+)\s+from\s+[\w.+-]+\s+to\s+(?P<version>[\w.+-]+)",
    )
    .expect("Invalid regex")
});

/// Verbose filler, removed wherever it occurs
static FILLER_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\s*\.\s*This\s+change\s+ensures?\s+[^.]*\.?",
        r"\s*\.\s*This\s+update\s+[^.]*\.?",
        r"\s*,\s*ensuring\s+[^.]*\.?",
        r"\s*,\s*enhancing\s+[^.]*\.?",
        r"\s*,\s*improving\s+[^.]*\.?",
        r"\s*,\s*promoting\s+[^.]*\.?",
        r"\s*,\s*maintaining\s+[^.]*\.?",
        r"\s*,\s*establishing\s+[^.]*\.?",
        r"\s+for\s+improved\s+[^.]*\.?",
        r"\s+for\s+better\s+[^.]*\.?",
        r"\s+for\s+enhanced\s+[^.]*\.?",
        r"\s+for\s+consistent\s+[^.]*\.?",
        r"\s+to\s+ensure\s+[^.]*\.?",
        r"\s+to\s+improve\s+[^.]*\.?",
        r"\s+to\s+enhance\s+[^.]*\.?",
        r"\s+addressing\s+[^.]*\.?",
        r"\s+enhancing\s+[^.]*\.?",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){}", p)).expect("Invalid regex"))
    .collect()
});

static SENTENCE_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("Invalid regex"));

static TRAILING_CLAUSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.\s+This\s+\w+\s+(includes?|provides?|adds?|ensures?)\s+.*$")
        .expect("Invalid regex")
});

static ADD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^add\s+").expect("Invalid regex"));
static ADD_TARGET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(to|for)\s+.*$").expect("Invalid regex"));
static UPDATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^update\s+").expect("Invalid regex"));
static UPDATE_FILE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<file>\S+\.\w+)\s+(to|with)\s+").expect("Invalid regex")
});
static ENHANCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^enhance\s+").expect("Invalid regex"));

/// Drops empty descriptions and bare `init` commits
pub struct SkipInit;

impl RewriteRule for SkipInit {
    fn name(&self) -> &'static str {
        "skip-init"
    }

    fn apply(&self, text: String) -> Step {
        let trimmed = text.trim();
        if trimmed.is_empty() || INIT_REGEX.is_match(trimmed) {
            Step::Done(Transformed::Discard)
        } else {
            Step::Continue(text)
        }
    }
}

/// Drops `chore:`/`bump:` descriptions that only move the version
pub struct SkipVersionChore;

impl RewriteRule for SkipVersionChore {
    fn name(&self) -> &'static str {
        "skip-version-chore"
    }

    fn apply(&self, text: String) -> Step {
        if VERSION_CHORE_REGEX.is_match(&text) && text.to_lowercase().contains("version") {
            Step::Done(Transformed::Discard)
        } else {
            Step::Continue(text)
        }
    }
}

/// Recognizes `bump <package> from <old> to <new>`
pub struct DetectDependencyBump;

impl RewriteRule for DetectDependencyBump {
    fn name(&self) -> &'static str {
        "dependency-bump"
    }

    fn apply(&self, text: String) -> Step {
        match BUMP_REGEX.captures(&text) {
            Some(caps) => Step::Done(Transformed::DependencyBump(DependencyBump::new(
                &caps["package"],
                &caps["version"],
            ))),
            None => Step::Continue(text),
        }
    }
}

/// Removes verbose filler phrases
pub struct StripFiller;

impl RewriteRule for StripFiller {
    fn name(&self) -> &'static str {
        "strip-filler"
    }

    fn apply(&self, text: String) -> Step {
        let stripped = FILLER_REGEXES
            .iter()
            .fold(text, |acc, re| re.replace_all(&acc, "").into_owned());
        Step::Continue(stripped)
    }
}

/// Keeps the first sentence only
pub struct FirstSentence;

impl RewriteRule for FirstSentence {
    fn name(&self) -> &'static str {
        "first-sentence"
    }

    fn apply(&self, text: String) -> Step {
        let first = SENTENCE_END_REGEX
            .split(&text)
            .next()
            .unwrap_or_default()
            .trim();

        if first.is_empty() {
            Step::Done(Transformed::Discard)
        } else {
            Step::Continue(first.to_string())
        }
    }
}

/// Removes a trailing `. This <thing> includes ...` clause
pub struct StripTrailingClause;

impl RewriteRule for StripTrailingClause {
    fn name(&self) -> &'static str {
        "strip-trailing-clause"
    }

    fn apply(&self, text: String) -> Step {
        Step::Continue(TRAILING_CLAUSE_REGEX.replace(&text, "").into_owned())
    }
}

/// Shortens `add`, `update` and `enhance` descriptions
pub struct SimplifyVerb;

impl RewriteRule for SimplifyVerb {
    fn name(&self) -> &'static str {
        "simplify-verb"
    }

    fn apply(&self, text: String) -> Step {
        let simplified = if ADD_REGEX.is_match(&text) {
            let rest = ADD_REGEX.replace(&text, "");
            format!("Add {}", ADD_TARGET_REGEX.replace(&rest, ""))
        } else if UPDATE_REGEX.is_match(&text) {
            let rest = UPDATE_REGEX.replace(&text, "");
            format!("Update {}", UPDATE_FILE_REGEX.replace(&rest, "${file}: "))
        } else if ENHANCE_REGEX.is_match(&text) {
            format!("Improve {}", ENHANCE_REGEX.replace(&text, ""))
        } else {
            text
        };
        Step::Continue(simplified)
    }
}

/// Cuts lines longer than the soft limit, preferring a word break
pub struct SoftTruncate {
    max_line_length: usize,
    min_break_point: usize,
}

impl SoftTruncate {
    /// Create a truncation rule.
    ///
    /// Lines longer than `max_line_length` characters are cut at the last
    /// space inside the limit when it lies past `min_break_point`, and
    /// hard-cut otherwise.
    pub fn new(max_line_length: usize, min_break_point: usize) -> Self {
        Self {
            max_line_length,
            min_break_point,
        }
    }
}

impl RewriteRule for SoftTruncate {
    fn name(&self) -> &'static str {
        "soft-truncate"
    }

    fn apply(&self, text: String) -> Step {
        if text.chars().count() <= self.max_line_length {
            return Step::Continue(text);
        }

        let head: String = text.chars().take(self.max_line_length).collect();
        let word_break = head
            .rfind(' ')
            .map(|idx| (idx, head[..idx].chars().count()))
            .filter(|&(_, chars)| chars > self.min_break_point);

        let truncated = match word_break {
            Some((idx, _)) => format!("{}{}", &head[..idx], ELLIPSIS),
            None => {
                let keep = self.max_line_length.saturating_sub(ELLIPSIS.len());
                format!("{}{}", text.chars().take(keep).collect::<String>(), ELLIPSIS)
            }
        };
        Step::Continue(truncated)
    }
}

/// Uppercases the first character
pub struct Capitalize;

impl RewriteRule for Capitalize {
    fn name(&self) -> &'static str {
        "capitalize"
    }

    fn apply(&self, text: String) -> Step {
        let mut chars = text.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => text,
        };
        Step::Continue(capitalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cont(s: &str) -> Step {
        Step::Continue(s.to_string())
    }

    fn apply<R: RewriteRule>(rule: R, text: &str) -> Step {
        rule.apply(text.to_string())
    }

    #[test]
    fn test_skip_init() {
        assert_eq!(apply(SkipInit, "init"), Step::Done(Transformed::Discard));
        assert_eq!(apply(SkipInit, "INIT."), Step::Done(Transformed::Discard));
        assert_eq!(apply(SkipInit, ""), Step::Done(Transformed::Discard));
        assert_eq!(apply(SkipInit, "initial layout"), cont("initial layout"));
        assert_eq!(apply(SkipInit, "init.."), cont("init.."));
    }

    #[test]
    fn test_skip_version_chore() {
        assert_eq!(
            apply(SkipVersionChore, "bump: Version 2.0.0"),
            Step::Done(Transformed::Discard)
        );
        assert_eq!(
            apply(SkipVersionChore, "chore: tidy imports"),
            cont("chore: tidy imports")
        );
        assert_eq!(
            apply(SkipVersionChore, "bump version to 2.0.0"),
            cont("bump version to 2.0.0")
        );
    }

    #[test]
    fn test_dependency_bump() {
        assert_eq!(
            apply(DetectDependencyBump, "Bump lodash from 4.17.20 to 4.17.21"),
            Step::Done(Transformed::DependencyBump(DependencyBump::new(
                "lodash", "4.17.21"
            )))
        );
        assert_eq!(
            apply(DetectDependencyBump, "BUMP actions/checkout from 3 to 4"),
            Step::Done(Transformed::DependencyBump(DependencyBump::new(
                "actions/checkout",
                "4"
            )))
        );
        assert_eq!(
            apply(DetectDependencyBump, "bump lodash to 4.17.21"),
            cont("bump lodash to 4.17.21")
        );
    }

    #[test]
    fn test_strip_filler() {
        assert_eq!(
            apply(StripFiller, "Cache parsed templates to improve render time"),
            cont("Cache parsed templates")
        );
        assert_eq!(
            apply(StripFiller, "Rename fields, promoting clarity. Done"),
            cont("Rename fields Done")
        );
        assert_eq!(
            apply(StripFiller, "Move helpers FOR BETTER structure"),
            cont("Move helpers")
        );
        assert_eq!(
            apply(StripFiller, "Refactor login. This change ensures safety."),
            cont("Refactor login")
        );
    }

    #[test]
    fn test_first_sentence() {
        assert_eq!(apply(FirstSentence, "Fix a bug. Also b."), cont("Fix a bug"));
        assert_eq!(apply(FirstSentence, "Really? Yes"), cont("Really"));
        assert_eq!(apply(FirstSentence, "Handle v1.2 configs"), cont("Handle v1.2 configs"));
        assert_eq!(apply(FirstSentence, "Trailing period."), cont("Trailing period."));
        assert_eq!(apply(FirstSentence, ". leftover"), Step::Done(Transformed::Discard));
    }

    #[test]
    fn test_strip_trailing_clause() {
        assert_eq!(
            apply(
                StripTrailingClause,
                "Add issue template. This template includes a checklist"
            ),
            cont("Add issue template")
        );
        assert_eq!(
            apply(StripTrailingClause, "Add issue template"),
            cont("Add issue template")
        );
    }

    #[test]
    fn test_simplify_add() {
        assert_eq!(
            apply(SimplifyVerb, "add export button to toolbar"),
            cont("Add export button")
        );
        assert_eq!(
            apply(SimplifyVerb, "Add support for webhooks"),
            cont("Add support")
        );
        assert_eq!(apply(SimplifyVerb, "Add dark mode support"), cont("Add dark mode support"));
    }

    #[test]
    fn test_simplify_update() {
        assert_eq!(
            apply(SimplifyVerb, "update package.json to use workspaces"),
            cont("Update package.json: use workspaces")
        );
        assert_eq!(
            apply(SimplifyVerb, "Update onboarding copy"),
            cont("Update onboarding copy")
        );
    }

    #[test]
    fn test_simplify_enhance() {
        assert_eq!(apply(SimplifyVerb, "Enhance logging"), cont("Improve logging"));
        assert_eq!(apply(SimplifyVerb, "enhanced logging"), cont("enhanced logging"));
    }

    #[test]
    fn test_truncate_at_word_break() {
        let text = format!("{} {}", "a".repeat(45), "b".repeat(35));
        assert_eq!(text.chars().count(), 81);

        let expected = format!("{}...", "a".repeat(45));
        assert_eq!(apply(SoftTruncate::new(80, 40), &text), Step::Continue(expected));
    }

    #[test]
    fn test_truncate_hard_cut_without_late_space() {
        let text = format!("{} {}", "a".repeat(30), "b".repeat(50));
        assert_eq!(text.chars().count(), 81);

        let expected = format!("{}...", &text[..77]);
        assert_eq!(apply(SoftTruncate::new(80, 40), &text), Step::Continue(expected));

        let no_space = "c".repeat(81);
        assert_eq!(
            apply(SoftTruncate::new(80, 40), &no_space),
            Step::Continue(format!("{}...", "c".repeat(77)))
        );
    }

    #[test]
    fn test_truncate_leaves_short_lines() {
        let text = "d".repeat(80);
        assert_eq!(apply(SoftTruncate::new(80, 40), &text), Step::Continue(text.clone()));
    }

    #[test]
    fn test_truncate_counts_characters() {
        let text = "é".repeat(81);
        match apply(SoftTruncate::new(80, 40), &text) {
            Step::Continue(out) => assert_eq!(out, format!("{}...", "é".repeat(77))),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(apply(Capitalize, "fix it"), cont("Fix it"));
        assert_eq!(apply(Capitalize, "x"), cont("X"));
        assert_eq!(apply(Capitalize, "éclair"), cont("Éclair"));
        assert_eq!(apply(Capitalize, ""), cont(""));
    }
}
