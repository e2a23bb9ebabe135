//! Onboarding service
//!
//! Serves the initial wizard snapshot and turns a submitted snapshot into a
//! profile upsert.

use chrono::Utc;
use cofounder_core::{
    FormField, Identity, OnboardingForm, OnboardingWizard, Profile, Route, UserId, WizardMode,
};
use tracing::{info, instrument, warn};

use crate::dto::{OptionsResponse, SubmissionResponse, SubmitOnboardingRequest, WizardSnapshot};

use super::context::ServiceContext;
use super::error::{persistence, ServiceResult};

/// Onboarding service
pub struct OnboardingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OnboardingService<'a> {
    /// Create a new OnboardingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Wizard on step 1; pre-filled when the caller is signed in
    #[instrument(skip(self, identity))]
    pub async fn load(&self, identity: Option<&Identity>) -> WizardSnapshot {
        let wizard = match identity {
            Some(identity) => {
                let existing = self.find_existing(identity.id).await;
                OnboardingWizard::for_identity(identity, existing.as_ref())
            }
            None => OnboardingWizard::new(WizardMode::Anonymous),
        };
        snapshot(&wizard)
    }

    /// Option catalogs the wizard renders
    pub fn options() -> OptionsResponse {
        OptionsResponse::catalog()
    }

    /// Validate a wizard snapshot and store the profile
    ///
    /// Nothing is written when the snapshot is not on the calendar step or
    /// misses required fields. A failed write leaves the client's snapshot
    /// valid for a retry.
    #[instrument(skip(self, identity, request), fields(step = %request.step))]
    pub async fn submit(
        &self,
        identity: Option<&Identity>,
        request: SubmitOnboardingRequest,
    ) -> ServiceResult<SubmissionResponse> {
        let mode = WizardMode::for_identity(identity);
        let mut form = request.form;

        if let Some(identity) = identity {
            let existing = self.find_existing(identity.id).await;
            lock_identity_fields(&mut form, identity, existing.as_ref());
        }

        let mut wizard = OnboardingWizard::resume(request.step, form, mode);
        let submission = wizard.prepare_submission(identity, Utc::now())?;

        let profile = self
            .ctx
            .profile_repo()
            .upsert(submission.profile_id, &submission.changes)
            .await
            .map_err(persistence)?;
        wizard.mark_submitted();

        info!(
            profile_id = %profile.id,
            mode = ?submission.mode,
            "Onboarding completed"
        );

        Ok(SubmissionResponse {
            step: wizard.step(),
            profile: profile.into(),
            redirect: Route::Directory.into(),
        })
    }

    async fn find_existing(&self, id: UserId) -> Option<Profile> {
        match self.ctx.profile_repo().find_by_id(id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(profile_id = %id, error = %e, "Profile lookup failed, pre-filling from identity only");
                None
            }
        }
    }
}

/// Serializable view of a wizard
pub fn snapshot(wizard: &OnboardingWizard) -> WizardSnapshot {
    let read_only_fields = match wizard.mode() {
        WizardMode::Authenticated => FormField::ALL
            .into_iter()
            .filter(|field| field.is_identity_bound())
            .collect(),
        WizardMode::Anonymous => Vec::new(),
    };

    WizardSnapshot {
        step: wizard.step(),
        title: wizard.step().title(),
        mode: wizard.mode(),
        form: wizard.form().clone(),
        read_only_fields,
        required_fields: wizard.mode().required_fields().to_vec(),
        missing_fields: wizard.missing_fields(),
    }
}

/// Signed-in users cannot edit step-1 fields; restore them from the provider
fn lock_identity_fields(form: &mut OnboardingForm, identity: &Identity, existing: Option<&Profile>) {
    let prefill = OnboardingForm::prefill(identity, existing);
    form.first_name = prefill.first_name;
    form.last_name = prefill.last_name;
    form.email = prefill.email;
    form.linkedin_url = prefill.linkedin_url;
}
