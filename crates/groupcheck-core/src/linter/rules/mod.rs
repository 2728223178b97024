//! Lint rule implementations and registry.

use super::rule::LintRule;

pub mod gb_001;

/// Returns all available lint rules.
pub fn all_rules() -> Vec<Box<dyn LintRule>> {
    vec![Box::new(gb_001::GroupByPosition)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rule_metadata_is_complete_and_unique() {
        let rules = all_rules();
        let mut codes = HashSet::new();
        for rule in &rules {
            assert!(rule.code().starts_with("LINT_"), "bad code {}", rule.code());
            assert!(!rule.name().is_empty());
            assert!(!rule.description().is_empty());
            assert!(codes.insert(rule.code()), "duplicate code {}", rule.code());
        }
    }
}
