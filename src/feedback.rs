//! Feedback presenter - drives incremental visual feedback for a bound
//! password field.
//!
//! The presenter owns no rendering surface of its own. The host hands it two
//! handles at bind time: a [`PasswordField`] that exposes the current value
//! and accepts validity styling, and a [`FeedbackSurface`] that accepts
//! renderable fragments. All side effects of an evaluation go through those
//! two handles, which keeps the evaluator itself free of any UI concern and
//! makes the presenter testable against mocks.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::evaluate_password;
use crate::policy::PolicyConfig;
use crate::types::{RuleId, StrengthLabel, ValidationResult, MEDIUM_THRESHOLD, STRONG_THRESHOLD};

/// Non-fatal configuration errors at the host boundary.
///
/// A missing handle means the binding is skipped; it never aborts the host.
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("password field '{0}' not found")]
    FieldNotFound(String),
    #[error("feedback container '{0}' not found")]
    FeedbackTargetNotFound(String),
}

/// Presenter state for one bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackState {
    /// No input event seen yet; nothing rendered.
    Idle,
    /// At least one input event seen; re-entered on every keystroke.
    Live,
    /// The last submit attempt was cancelled as invalid.
    Blocked,
}

/// Outcome of a submit attempt.
///
/// An invalid submission is routine control flow, not an error: the host
/// cancels the native submission on [`SubmitOutcome::Blocked`] and does
/// nothing on [`SubmitOutcome::Proceed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed,
    Blocked,
}

/// Color tier for the strength indicator, mapped from the same thresholds
/// as the strength labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    Danger,
    Warning,
    Success,
}

impl ColorTier {
    pub fn from_score(score: u8) -> Self {
        if score >= STRONG_THRESHOLD {
            ColorTier::Success
        } else if score >= MEDIUM_THRESHOLD {
            ColorTier::Warning
        } else {
            ColorTier::Danger
        }
    }
}

/// Renderable strength fragment: fill percentage, tier label, color tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthIndicator {
    pub percent: u8,
    pub label: StrengthLabel,
    pub color: ColorTier,
}

/// One row of the requirement checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementItem {
    pub rule: RuleId,
    pub description: String,
    pub satisfied: bool,
}

/// Builds the strength fragment for a result.
pub fn strength_indicator(result: &ValidationResult) -> StrengthIndicator {
    StrengthIndicator {
        percent: result.strength,
        label: result.label(),
        color: ColorTier::from_score(result.strength),
    }
}

/// Builds the requirement checklist for a result: one row per active rule,
/// in canonical order.
pub fn requirement_items(result: &ValidationResult, policy: &PolicyConfig) -> Vec<RequirementItem> {
    policy
        .rules()
        .into_iter()
        .map(|rule| RequirementItem {
            rule,
            description: policy.describe(rule),
            satisfied: !result.failed_rules.contains(&rule),
        })
        .collect()
}

/// Host handle for the password input element.
pub trait PasswordField {
    /// Current field value, unnormalized.
    fn value(&self) -> SecretString;

    /// Applies validity styling: `Some(true)` valid, `Some(false)` invalid,
    /// `None` removes any validity styling.
    fn set_validity(&mut self, validity: Option<bool>);

    /// Moves input focus to the field.
    fn focus(&mut self);
}

/// Host handle for the feedback container.
pub trait FeedbackSurface {
    /// Replaces the container content with the strength indicator and the
    /// requirement checklist.
    fn render(&mut self, indicator: &StrengthIndicator, requirements: &[RequirementItem]);

    /// Replaces the container content with the requirement checklist only,
    /// used when a submit attempt is blocked.
    fn render_requirements(&mut self, requirements: &[RequirementItem]);

    /// Clears the container entirely.
    fn clear(&mut self);

    /// Surfaces one blocking notification after a cancelled submission.
    fn notify_blocked(&mut self);
}

/// One password field bound to one feedback target.
///
/// Bindings are fully independent: each owns its handles, its policy and
/// its state, and nothing is shared between two bindings on the same page.
pub struct FieldBinding<F, S> {
    field: F,
    surface: S,
    policy: PolicyConfig,
    state: FeedbackState,
}

impl<F: PasswordField, S: FeedbackSurface> FieldBinding<F, S> {
    /// Binds a field to a feedback target.
    ///
    /// The host passes its lookup results; a `None` handle is reported as a
    /// [`BindingError`] so the caller can skip the binding and carry on.
    pub fn bind(
        field: Option<F>,
        field_id: &str,
        surface: Option<S>,
        target_id: &str,
        policy: PolicyConfig,
    ) -> Result<Self, BindingError> {
        let Some(field) = field else {
            #[cfg(feature = "tracing")]
            tracing::error!("password field '{}' not found, binding skipped", field_id);
            return Err(BindingError::FieldNotFound(field_id.to_string()));
        };
        let Some(surface) = surface else {
            #[cfg(feature = "tracing")]
            tracing::error!(
                "feedback container '{}' not found, binding skipped",
                target_id
            );
            return Err(BindingError::FeedbackTargetNotFound(target_id.to_string()));
        };

        Ok(Self {
            field,
            surface,
            policy,
            state: FeedbackState::Idle,
        })
    }

    pub fn state(&self) -> FeedbackState {
        self.state
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Handles one input-change event.
    ///
    /// Re-evaluates the current value. An empty value suppresses all
    /// feedback rendering and removes validity styling, which is distinct
    /// from rendering a weak score. A non-empty value renders the strength
    /// indicator plus the checklist and mirrors `is_valid` onto the field.
    pub fn handle_input(&mut self) {
        let value = self.field.value();
        self.state = FeedbackState::Live;

        if value.expose_secret().is_empty() {
            self.surface.clear();
            self.field.set_validity(None);
            return;
        }

        let result = evaluate_password(&value, &self.policy);
        let indicator = strength_indicator(&result);
        let requirements = requirement_items(&result, &self.policy);
        self.surface.render(&indicator, &requirements);
        self.field.set_validity(Some(result.is_valid));
    }

    /// Handles one submit attempt.
    ///
    /// Re-evaluates synchronously. When invalid, forces the invalid visual
    /// state, re-renders the checklist, moves focus back to the field,
    /// surfaces the blocking notification and returns
    /// [`SubmitOutcome::Blocked`]; the host is expected to cancel the native
    /// submission. When valid, returns [`SubmitOutcome::Proceed`] with no
    /// side effects.
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        let value = self.field.value();
        let result = evaluate_password(&value, &self.policy);

        if result.is_valid {
            return SubmitOutcome::Proceed;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            failed_rules = result.failed_rules.len(),
            "submission blocked by password policy"
        );

        self.state = FeedbackState::Blocked;
        self.field.set_validity(Some(false));
        let requirements = requirement_items(&result, &self.policy);
        self.surface.render_requirements(&requirements);
        self.field.focus();
        self.surface.notify_blocked();
        SubmitOutcome::Blocked
    }
}
