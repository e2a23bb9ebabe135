//! Onboarding wizard: form state, steps and submission

mod form;
pub mod options;
mod wizard;

pub use form::{FieldValue, FormField, OnboardingForm};
pub use options::SelectOption;
pub use wizard::{OnboardingWizard, Submission, WizardMode, WizardStep};
