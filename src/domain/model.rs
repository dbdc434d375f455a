use crate::utils::error::{ReplaceError, Result};
use crate::utils::validation::{validate_non_empty_old, validate_pair_count};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashMap;

/// One literal `old` → `new` substitution.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pub old: String,
    pub new: String,
    matcher: AhoCorasick,
}

impl ReplacementRule {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Result<Self> {
        let old = old.into();
        if old.is_empty() {
            return Err(ReplaceError::ValidationError {
                message: "old strings to replace must be non-empty".to_string(),
            });
        }

        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build([old.as_bytes()])?;

        Ok(Self {
            old,
            new: new.into(),
            matcher,
        })
    }

    /// Replaces every non-overlapping occurrence of `old`, scanning left to right.
    /// Returns `None` when the line is left unchanged.
    pub fn apply(&self, line: &[u8]) -> Option<Vec<u8>> {
        let first = self.matcher.find(line)?;

        let mut replaced = line[..first.start()].to_vec();
        replaced.extend(
            self.matcher
                .replace_all_bytes(&line[first.start()..], &[self.new.as_bytes()]),
        );
        if replaced == line {
            // old == new
            return None;
        }
        Some(replaced)
    }
}

/// Ordered rules for one run. Order is the order of application.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ReplacementRule>,
}

impl RuleSet {
    /// Builds rules from a flattened `old1 new1 old2 new2 ...` list.
    pub fn from_pairs<S: AsRef<str>>(values: &[S]) -> Result<Self> {
        validate_pair_count("replacements", values)?;
        validate_non_empty_old(values)?;

        let rules = values
            .chunks_exact(2)
            .map(|pair| ReplacementRule::new(pair[0].as_ref(), pair[1].as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Lines changed per `old` string. Rules sharing an `old` share a counter.
#[derive(Debug, Clone, Default)]
pub struct ReplacementCounter {
    counts: HashMap<String, u64>,
}

impl ReplacementCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, old: &str) {
        *self.counts.entry(old.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, old: &str) -> u64 {
        self.counts.get(old).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub lines_processed: u64,
    pub counter: ReplacementCounter,
    pub rules: RuleSet,
}

impl RunSummary {
    /// Counter values in declared rule order, duplicates repeated.
    pub fn rule_counts(&self) -> Vec<(&ReplacementRule, u64)> {
        self.rules
            .rules()
            .iter()
            .map(|rule| (rule, self.counter.get(&rule.old)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_replaces_all_occurrences() {
        let rule = ReplacementRule::new("a", "x").unwrap();
        assert_eq!(rule.apply(b"banana").unwrap(), b"bxnxnx");
        assert!(rule.apply(b"cherry").is_none());
    }

    #[test]
    fn test_rule_non_overlapping_scan() {
        let rule = ReplacementRule::new("aa", "a").unwrap();
        assert_eq!(rule.apply(b"aaaa").unwrap(), b"aa");
        assert_eq!(rule.apply(b"aaa").unwrap(), b"aa");
    }

    #[test]
    fn test_rule_identity_replacement_is_unchanged() {
        let rule = ReplacementRule::new("a", "a").unwrap();
        assert!(rule.apply(b"aaa").is_none());
    }

    #[test]
    fn test_rule_can_delete() {
        let rule = ReplacementRule::new(", ", "").unwrap();
        assert_eq!(rule.apply(b"a, b, c").unwrap(), b"abc");
    }

    #[test]
    fn test_rule_rejects_empty_old() {
        let err = ReplacementRule::new("", "x").unwrap_err();
        assert!(matches!(err, ReplaceError::ValidationError { .. }));
    }

    #[test]
    fn test_rule_replaces_from_first_match_on() {
        let rule = ReplacementRule::new("cd", "-").unwrap();
        assert_eq!(rule.apply(b"abcdecd").unwrap(), b"ab-e-");
    }

    #[test]
    fn test_rule_set_rejects_unpaired_values() {
        let err = RuleSet::from_pairs(&["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, ReplaceError::UsageError { .. }));

        let err = RuleSet::from_pairs::<&str>(&[]).unwrap_err();
        assert!(matches!(err, ReplaceError::UsageError { .. }));
    }

    #[test]
    fn test_rule_set_rejects_empty_old() {
        let err = RuleSet::from_pairs(&["", "x", "a", "b"]).unwrap_err();
        assert!(matches!(err, ReplaceError::ValidationError { .. }));
    }

    #[test]
    fn test_rule_set_keeps_declared_order() {
        let rules = RuleSet::from_pairs(&["x", "y", "a", "b", "x", "z"]).unwrap();
        let pairs: Vec<_> = rules
            .rules()
            .iter()
            .map(|r| (r.old.as_str(), r.new.as_str()))
            .collect();
        assert_eq!(pairs, vec![("x", "y"), ("a", "b"), ("x", "z")]);
    }

    #[test]
    fn test_counter_shared_by_old() {
        let rules = RuleSet::from_pairs(&["x", "y", "x", "z"]).unwrap();
        let mut counter = ReplacementCounter::new();
        counter.increment("x");
        counter.increment("x");

        let summary = RunSummary {
            lines_processed: 2,
            counter,
            rules,
        };
        let counts: Vec<_> = summary
            .rule_counts()
            .into_iter()
            .map(|(rule, count)| (rule.new.clone(), count))
            .collect();
        assert_eq!(counts, vec![("y".to_string(), 2), ("z".to_string(), 2)]);
    }
}
