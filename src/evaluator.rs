//! Password policy evaluator - main validation and scoring logic.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::PolicyConfig;
use crate::rules::{has_digit, has_lowercase, has_uppercase, length_in_bounds, pattern_warnings};
use crate::types::{RuleId, ValidationResult};

/// Points contributed by each satisfied check.
pub const RULE_POINTS: u8 = 20;

/// Evaluates a password against a policy.
///
/// Pure and total: every input string yields a well-formed result, and
/// identical inputs yield identical results. Failed rules are reported in
/// canonical order (length, uppercase, lowercase, numbers, special).
///
/// A character class that is present always earns its points, even when the
/// corresponding rule toggle is disabled: the toggle gates validity only,
/// not the score bonus. Strength can therefore exceed what validity alone
/// requires.
///
/// # Example
///
/// ```rust
/// use pwd_policy::{evaluate_password, PolicyConfig, StrengthLabel};
/// use secrecy::SecretString;
///
/// let policy = PolicyConfig::default();
/// let password = SecretString::new("Abcdef1!".to_string().into());
/// let result = evaluate_password(&password, &policy);
///
/// assert!(result.is_valid);
/// assert_eq!(result.strength, 100);
/// assert_eq!(result.label(), StrengthLabel::Strong);
/// ```
pub fn evaluate_password(password: &SecretString, policy: &PolicyConfig) -> ValidationResult {
    let pwd = password.expose_secret();

    let mut failed = Vec::new();
    let mut strength: u8 = 0;

    // Length is mandatory and earns no partial credit for margin.
    if length_in_bounds(pwd, policy.min_length, policy.max_length) {
        strength += RULE_POINTS;
    } else {
        failed.push(RuleId::Length);
    }

    let checks = [
        (RuleId::Uppercase, has_uppercase(pwd)),
        (RuleId::Lowercase, has_lowercase(pwd)),
        (RuleId::Numbers, has_digit(pwd)),
        (RuleId::SpecialChars, policy.is_special(pwd)),
    ];

    for (rule, present) in checks {
        if policy.requires(rule) && !present {
            failed.push(rule);
        } else if present {
            strength += RULE_POINTS;
        }
    }

    ValidationResult {
        is_valid: failed.is_empty(),
        failed_rules: failed,
        warnings: pattern_warnings(pwd),
        strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StrengthLabel;
    use quickcheck_macros::quickcheck;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_short_lowercase_only() {
        let policy = PolicyConfig::default();
        let result = evaluate_password(&secret("abc"), &policy);

        assert!(!result.is_valid);
        assert_eq!(result.strength, 20);
        assert_eq!(result.label(), StrengthLabel::Weak);
        assert_eq!(
            result.failed_rules,
            vec![
                RuleId::Length,
                RuleId::Uppercase,
                RuleId::Numbers,
                RuleId::SpecialChars
            ]
        );
    }

    #[test]
    fn test_all_rules_satisfied() {
        let policy = PolicyConfig::default();
        let result = evaluate_password(&secret("Abcdef1!"), &policy);

        assert!(result.is_valid);
        assert!(result.failed_rules.is_empty());
        assert_eq!(result.strength, 100);
        assert_eq!(result.label(), StrengthLabel::Strong);
    }

    #[test]
    fn test_missing_digit_and_special() {
        let policy = PolicyConfig::default();
        let result = evaluate_password(&secret("Abcdefgh"), &policy);

        assert!(!result.is_valid);
        assert_eq!(result.strength, 60);
        assert_eq!(result.label(), StrengthLabel::Medium);
        assert_eq!(
            result.failed_rules,
            vec![RuleId::Numbers, RuleId::SpecialChars]
        );
    }

    #[test]
    fn test_empty_password() {
        let policy = PolicyConfig::default();
        let result = evaluate_password(&secret(""), &policy);

        assert!(!result.is_valid);
        assert_eq!(result.strength, 0);
        assert_eq!(result.label(), StrengthLabel::Weak);
        assert_eq!(result.failed_rules, policy.rules());
    }

    #[test]
    fn test_disabled_rule_does_not_fail_validity() {
        let policy = PolicyConfig::default().require_numbers(false);
        let result = evaluate_password(&secret("Abcdefg!"), &policy);

        assert!(result.is_valid);
        // No digit present, so the numbers bonus is not earned either.
        assert_eq!(result.strength, 80);
        assert_eq!(result.label(), StrengthLabel::Strong);
    }

    #[test]
    fn test_disabled_rule_still_earns_bonus_when_satisfied() {
        let policy = PolicyConfig::default().require_numbers(false);
        let result = evaluate_password(&secret("Abcdef1!"), &policy);

        assert!(result.is_valid);
        assert_eq!(result.strength, 100);
    }

    #[test]
    fn test_over_maximum_length_fails() {
        let policy = PolicyConfig::default().max_length(10);
        let result = evaluate_password(&secret("Abcdefgh1234!"), &policy);

        assert!(!result.is_valid);
        assert_eq!(result.failed_rules, vec![RuleId::Length]);
        // The four class bonuses still accrue.
        assert_eq!(result.strength, 80);
    }

    #[test]
    fn test_zero_minimum_accepts_empty_length() {
        let policy = PolicyConfig::default()
            .min_length(0)
            .require_uppercase(false)
            .require_lowercase(false)
            .require_numbers(false)
            .require_special_chars(false);
        let result = evaluate_password(&secret(""), &policy);

        assert!(result.is_valid);
        assert_eq!(result.strength, 20);
    }

    #[test]
    fn test_warnings_do_not_affect_validity_or_score() {
        let policy = PolicyConfig::default();
        // Valid password containing an ascending run.
        let result = evaluate_password(&secret("Abcd1234!x"), &policy);

        assert!(result.is_valid);
        assert_eq!(result.strength, 100);
        assert!(!result.warnings.is_empty());
    }

    #[quickcheck]
    fn prop_valid_iff_no_failed_rules(s: String) -> bool {
        let policy = PolicyConfig::default();
        let result = evaluate_password(&secret(&s), &policy);
        result.is_valid == result.failed_rules.is_empty()
    }

    #[quickcheck]
    fn prop_evaluation_is_idempotent(s: String) -> bool {
        let policy = PolicyConfig::default();
        let first = evaluate_password(&secret(&s), &policy);
        let second = evaluate_password(&secret(&s), &policy);
        first == second
    }

    #[quickcheck]
    fn prop_label_matches_thresholds(s: String) -> bool {
        let policy = PolicyConfig::default();
        let result = evaluate_password(&secret(&s), &policy);
        match result.label() {
            StrengthLabel::Strong => result.strength >= 80,
            StrengthLabel::Medium => (60..80).contains(&result.strength),
            StrengthLabel::Weak => result.strength < 60,
        }
    }

    #[quickcheck]
    fn prop_strength_is_bounded_in_rule_steps(s: String) -> bool {
        let policy = PolicyConfig::default();
        let result = evaluate_password(&secret(&s), &policy);
        result.strength <= 100 && result.strength % RULE_POINTS == 0
    }
}
