//! Password policy validation library
//!
//! This library validates candidate passwords against a configurable policy,
//! computes a coarse linear strength score, and drives incremental visual
//! feedback through host-provided rendering handles.
//!
//! The evaluator is a pure function: no state, no I/O, no UI. The feedback
//! presenter consumes its results and talks to the page exclusively through
//! the [`PasswordField`] and [`FeedbackSurface`] traits, so the whole crate
//! is testable without any UI harness.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate_password, PolicyConfig};
//! use secrecy::SecretString;
//!
//! let policy = PolicyConfig::default();
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let result = evaluate_password(&password, &policy);
//! println!("Strength: {} ({})", result.strength, result.label());
//! assert!(result.is_valid);
//! ```

// Internal modules
mod evaluator;
mod feedback;
mod policy;
mod rules;
mod types;

// Public API
pub use evaluator::{RULE_POINTS, evaluate_password};
pub use feedback::{
    BindingError, ColorTier, FeedbackState, FeedbackSurface, FieldBinding, PasswordField,
    RequirementItem, StrengthIndicator, SubmitOutcome, requirement_items, strength_indicator,
};
pub use policy::{DEFAULT_SPECIAL_CHARS, PolicyConfig};
pub use types::{
    MEDIUM_THRESHOLD, STRONG_THRESHOLD, RuleId, StrengthLabel, ValidationResult, Warning,
};
