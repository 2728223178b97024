//! Configuration for the SQL linter.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration for the SQL linter.
///
/// Controls which lint rules are enabled/disabled. By default, all rules are enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    /// Master toggle for linting (default: true).
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// List of rule codes to disable (e.g., ["LINT_GB_001"] or ["GB01"]).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_rules: Vec<String>,

    /// Honour `-- noqa` comments (default: true).
    #[serde(default = "default_true")]
    pub respect_noqa: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            disabled_rules: Vec::new(),
            respect_noqa: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl LintConfig {
    /// Returns true if a specific rule is enabled.
    pub fn is_rule_enabled(&self, code: &str) -> bool {
        if !self.enabled {
            return false;
        }
        let canonical = normalized_rule_code(code);
        !self
            .disabled_rules
            .iter()
            .any(|rule| normalized_rule_code(rule) == canonical)
    }
}

fn normalized_rule_code(raw: &str) -> String {
    canonicalize_rule_code(raw).unwrap_or_else(|| raw.trim().to_ascii_uppercase())
}

/// Normalizes a rule reference to its `LINT_XX_NNN` form.
///
/// Accepts the full code (`LINT_GB_001`), the short alias (`GB01`) and
/// underscore variants (`GB_001`), in any case.
pub fn canonicalize_rule_code(raw: &str) -> Option<String> {
    let upper = raw.trim().to_ascii_uppercase();
    let body = upper.strip_prefix("LINT_").unwrap_or(upper.as_str()).replace('_', "");
    let split_at = body.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = body.split_at(split_at);

    if letters.len() != 2
        || !letters.chars().all(|c| c.is_ascii_alphabetic())
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let number: u32 = digits.parse().ok()?;
    Some(format!("LINT_{letters}_{number:03}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_enables_all() {
        let config = LintConfig::default();
        assert!(config.enabled);
        assert!(config.respect_noqa);
        assert!(config.is_rule_enabled("LINT_GB_001"));
    }

    #[test]
    fn test_disabled_rule() {
        let config = LintConfig {
            disabled_rules: vec!["LINT_GB_001".to_string()],
            ..LintConfig::default()
        };
        assert!(!config.is_rule_enabled("LINT_GB_001"));
        assert!(config.is_rule_enabled("LINT_GB_002"));
    }

    #[test]
    fn test_disabled_rule_by_alias() {
        let config = LintConfig {
            disabled_rules: vec!["gb01".to_string()],
            ..LintConfig::default()
        };
        assert!(!config.is_rule_enabled("LINT_GB_001"));
    }

    #[test]
    fn test_master_toggle_off() {
        let config = LintConfig {
            enabled: false,
            ..LintConfig::default()
        };
        assert!(!config.is_rule_enabled("LINT_GB_001"));
    }

    #[test]
    fn test_deserialization_defaults() {
        let json = "{}";
        let config: LintConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_deserialization_camel_case() {
        let json = r#"{"enabled": true, "disabledRules": ["GB01"], "respectNoqa": false}"#;
        let config: LintConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.disabled_rules, vec!["GB01".to_string()]);
        assert!(!config.respect_noqa);
    }

    #[test]
    fn test_canonicalize_rule_code() {
        assert_eq!(canonicalize_rule_code("LINT_GB_001").as_deref(), Some("LINT_GB_001"));
        assert_eq!(canonicalize_rule_code("gb01").as_deref(), Some("LINT_GB_001"));
        assert_eq!(canonicalize_rule_code(" GB_001 ").as_deref(), Some("LINT_GB_001"));
        assert_eq!(canonicalize_rule_code("GB"), None);
        assert_eq!(canonicalize_rule_code("ambiguous.join"), None);
        assert_eq!(canonicalize_rule_code("G01"), None);
    }
}
