use crate::net::types::RegisterTeamResponse;

/// One-shot hand-off of a fresh team registration result.
///
/// The register page fills it; the password result page consumes it and
/// redirects back when it is empty (the issued passwords are shown once
/// and never persisted).
#[derive(Clone, Debug, Default)]
pub struct RegistrationState {
    pub result: Option<RegisterTeamResponse>,
}
