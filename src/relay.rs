use std::future::Future;

use crate::models::{ContactField, ContactSubmission, FieldError};

/// Hands a contact submission to the third-party email service
#[cfg_attr(test, mockall::automock)]
pub trait EmailRelay: Send + Sync + 'static {
    fn send(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), RelayError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("Email service unreachable: {0}")]
    Transport(String),
    #[error("Email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Invalid contact form: {}", describe(.0))]
    Invalid(Vec<(ContactField, FieldError)>),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

fn describe(errors: &[(ContactField, FieldError)]) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("{}: {error}", field.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Relays a submission, refusing anything that fails validation.
///
/// A valid submission produces exactly one relay call, with its fields
/// trimmed; an invalid one none.
pub async fn deliver<R: EmailRelay>(
    relay: &R,
    submission: ContactSubmission,
) -> Result<(), ContactError> {
    let errors = submission.errors();
    if !errors.is_empty() {
        tracing::warn!(fields = %describe(&errors), "refusing invalid contact submission");
        return Err(ContactError::Invalid(errors));
    }

    relay.send(submission.trimmed()).await.map_err(|e| {
        tracing::error!(error = %e, "email relay failed");
        ContactError::from(e)
    })
}
