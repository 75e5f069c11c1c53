//! Policy configuration: length bounds, rule toggles, special character set.

use regex::Regex;

use crate::types::RuleId;

/// Special characters recognized by the default policy.
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

const DEFAULT_MIN_LENGTH: usize = 8;
const DEFAULT_MAX_LENGTH: usize = 128;

/// Immutable password policy.
///
/// Built once at startup and passed explicitly into the evaluator; there is
/// no process-wide policy state. The special character set is compiled into
/// a character-class matcher at construction time, with every member escaped
/// so that characters like `]`, `^` or `\` cannot corrupt the class.
///
/// # Example
///
/// ```rust
/// use pwd_policy::PolicyConfig;
///
/// let policy = PolicyConfig::default()
///     .min_length(12)
///     .require_numbers(false);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    pub(crate) min_length: usize,
    pub(crate) max_length: usize,
    pub(crate) require_uppercase: bool,
    pub(crate) require_lowercase: bool,
    pub(crate) require_numbers: bool,
    pub(crate) require_special_chars: bool,
    pub(crate) special_chars: String,
    pub(crate) special_class: Option<Regex>,
}

impl Default for PolicyConfig {
    /// Default policy: length 8-128, all four character-class rules enabled.
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_special_chars: true,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
            special_class: compile_special_class(DEFAULT_SPECIAL_CHARS),
        }
    }
}

impl PolicyConfig {
    /// Sets the minimum password length. Must not exceed the maximum.
    #[must_use]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the maximum password length. Must not be below the minimum.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn require_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    #[must_use]
    pub fn require_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    #[must_use]
    pub fn require_numbers(mut self, required: bool) -> Self {
        self.require_numbers = required;
        self
    }

    #[must_use]
    pub fn require_special_chars(mut self, required: bool) -> Self {
        self.require_special_chars = required;
        self
    }

    /// Replaces the special character set and recompiles its matcher.
    ///
    /// An empty set means no character ever counts as special.
    #[must_use]
    pub fn special_chars(mut self, set: impl Into<String>) -> Self {
        self.special_chars = set.into();
        self.special_class = compile_special_class(&self.special_chars);
        self
    }

    /// Whether a rule participates in validity for this policy.
    ///
    /// The length rule is mandatory; the class rules follow their toggles.
    pub fn requires(&self, rule: RuleId) -> bool {
        match rule {
            RuleId::Length => true,
            RuleId::Uppercase => self.require_uppercase,
            RuleId::Lowercase => self.require_lowercase,
            RuleId::Numbers => self.require_numbers,
            RuleId::SpecialChars => self.require_special_chars,
        }
    }

    /// Active rules in canonical order: length first, then each enabled
    /// character-class rule.
    pub fn rules(&self) -> Vec<RuleId> {
        RuleId::ALL
            .into_iter()
            .filter(|&rule| self.requires(rule))
            .collect()
    }

    /// Human-readable requirement text for one rule.
    ///
    /// The presenter maps rule identifiers to text through this table;
    /// nothing in the crate compares message strings.
    pub fn describe(&self, rule: RuleId) -> String {
        match rule {
            RuleId::Length => format!(
                "Must be between {} and {} characters",
                self.min_length, self.max_length
            ),
            RuleId::Uppercase => "Must contain at least one uppercase letter (A-Z)".to_string(),
            RuleId::Lowercase => "Must contain at least one lowercase letter (a-z)".to_string(),
            RuleId::Numbers => "Must contain at least one number (0-9)".to_string(),
            RuleId::SpecialChars => format!(
                "Must contain at least one special character ({})",
                self.special_chars
            ),
        }
    }

    /// HTML5 `pattern` attribute value for this policy.
    ///
    /// One lookahead per enabled class rule plus the length range. This is
    /// string generation for a host input element only; the crate never
    /// compiles the lookahead pattern itself.
    pub fn html_pattern(&self) -> String {
        let mut pattern = String::from("^");
        if self.require_lowercase {
            pattern.push_str("(?=.*[a-z])");
        }
        if self.require_uppercase {
            pattern.push_str("(?=.*[A-Z])");
        }
        if self.require_numbers {
            pattern.push_str("(?=.*\\d)");
        }
        if self.require_special_chars && !self.special_chars.is_empty() {
            pattern.push_str(&format!("(?=.*[{}])", escape_class(&self.special_chars)));
        }
        pattern.push_str(&format!(
            ".{{{},{}}}$",
            self.min_length, self.max_length
        ));
        pattern
    }

    /// HTML5 validation attributes for a host password input.
    pub fn html_attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("minlength", self.min_length.to_string()),
            ("maxlength", self.max_length.to_string()),
            ("pattern", self.html_pattern()),
        ]
    }

    /// Whether a character belongs to this policy's special set.
    pub(crate) fn is_special(&self, password: &str) -> bool {
        self.special_class
            .as_ref()
            .is_some_and(|class| class.is_match(password))
    }
}

/// Escapes every member of the set for use inside a `[...]` class.
fn escape_class(set: &str) -> String {
    let mut escaped = String::with_capacity(set.len() * 2);
    for c in set.chars() {
        escaped.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4])));
    }
    escaped
}

fn compile_special_class(set: &str) -> Option<Regex> {
    if set.is_empty() {
        return None;
    }
    let class = format!("[{}]", escape_class(set));
    // Every member is escaped, so the class always compiles.
    Some(Regex::new(&class).expect("escaped character class is valid"))
}
