//! Rewriting commit descriptions into changelog lines
//!
//! A description passes through an ordered list of rules. Each rule either
//! hands rewritten text to the next rule or finishes the transformation
//! with a final [`Transformed`] value.

mod rules;

pub use rules::*;

use cutlog_core::config::ChangelogConfig;
use tracing::trace;

use crate::types::Transformed;

/// Result of applying one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Continue with the rewritten text
    Continue(String),
    /// Stop; no further rules run
    Done(Transformed),
}

/// A single rewrite rule
pub trait RewriteRule: Send + Sync {
    /// Short rule name, used in logs
    fn name(&self) -> &'static str;

    /// Apply the rule to the current text
    fn apply(&self, text: String) -> Step;
}

/// Runs descriptions through the rewrite rules in order
pub struct DescriptionTransformer {
    rules: Vec<Box<dyn RewriteRule>>,
}

impl DescriptionTransformer {
    /// Create a transformer with the built-in rules
    pub fn new(config: &ChangelogConfig) -> Self {
        Self {
            rules: vec![
                Box::new(SkipInit),
                Box::new(SkipVersionChore),
                Box::new(DetectDependencyBump),
                Box::new(StripFiller),
                Box::new(FirstSentence),
                Box::new(StripTrailingClause),
                Box::new(SimplifyVerb),
                Box::new(SoftTruncate::new(
                    config.max_line_length,
                    config.min_break_point,
                )),
                Box::new(Capitalize),
            ],
        }
    }

    /// Create a transformer with no rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule after the existing ones
    pub fn with_rule<R: RewriteRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the rules, in application order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Transform a raw commit description
    pub fn transform(&self, description: &str) -> Transformed {
        let mut text = description.trim().to_string();

        for rule in &self.rules {
            match rule.apply(text) {
                Step::Continue(next) => text = next,
                Step::Done(result) => {
                    trace!(rule = rule.name(), description, "rule finished transformation");
                    return result;
                }
            }
        }

        Transformed::Text(text)
    }
}

impl Default for DescriptionTransformer {
    fn default() -> Self {
        Self::new(&ChangelogConfig::default())
    }
}
