//! Core result types produced by password evaluation.

use std::fmt;

/// Score threshold at or above which a password is labeled strong.
pub const STRONG_THRESHOLD: u8 = 80;
/// Score threshold at or above which a password is labeled medium.
pub const MEDIUM_THRESHOLD: u8 = 60;

/// Identifies one policy rule.
///
/// Variant order is the canonical evaluation and display order; failure
/// lists and requirement checklists both follow it, so consumers can map
/// a failed rule back to its display row by identifier instead of by
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    Length,
    Uppercase,
    Lowercase,
    Numbers,
    SpecialChars,
}

impl RuleId {
    /// All rules in canonical order.
    pub const ALL: [RuleId; 5] = [
        RuleId::Length,
        RuleId::Uppercase,
        RuleId::Lowercase,
        RuleId::Numbers,
        RuleId::SpecialChars,
    ];

    /// The four character-class rules, in canonical order.
    pub const CLASSES: [RuleId; 4] = [
        RuleId::Uppercase,
        RuleId::Lowercase,
        RuleId::Numbers,
        RuleId::SpecialChars,
    ];
}

/// Coarse strength tier derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Maps a 0-100 score onto a tier.
    pub fn from_score(score: u8) -> Self {
        if score >= STRONG_THRESHOLD {
            StrengthLabel::Strong
        } else if score >= MEDIUM_THRESHOLD {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Weak
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Advisory finding that does not affect validity or score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// A run of consecutive ascending or descending characters.
    SequentialPattern,
    /// A run of three or more identical characters.
    RepeatedPattern,
}

/// Outcome of evaluating one password against one policy.
///
/// Recomputed from scratch on every evaluation; holds no state beyond the
/// input it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True iff every enabled rule passed.
    ///
    /// Invariant: equals `failed_rules.is_empty()`.
    pub is_valid: bool,
    /// Failed rules in canonical order.
    pub failed_rules: Vec<RuleId>,
    /// Advisory pattern findings; never affect validity or score.
    pub warnings: Vec<Warning>,
    /// Linear point score, 0-100 in steps of 20 when all five checks run.
    pub strength: u8,
}

impl ValidationResult {
    /// Strength tier for the current score.
    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(StrengthLabel::from_score(100), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(80), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(79), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(60), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(59), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::Weak);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::Strong.to_string(), "Strong");
        assert_eq!(StrengthLabel::Medium.to_string(), "Medium");
        assert_eq!(StrengthLabel::Weak.to_string(), "Weak");
    }

    #[test]
    fn test_canonical_order_starts_with_length() {
        assert_eq!(RuleId::ALL[0], RuleId::Length);
        assert_eq!(&RuleId::ALL[1..], &RuleId::CLASSES);
    }
}
