use folio_domain::ContactMessage;
use tracing::{debug, info, warn};

use crate::{ApplicationError, ContactTransport, SubmissionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting {
        sequence: u64,
    },
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactMessage,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactMessage {
        &self.draft
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting { .. })
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.draft.name,
            ContactField::Email => &mut self.draft.email,
            ContactField::Message => &mut self.draft.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn submit(&mut self, transport: &dyn ContactTransport) -> Result<u64, ApplicationError> {
        if let FormStatus::Submitting { sequence } = self.status {
            return Err(ApplicationError::InvalidInput(format!(
                "submission {sequence} is still in flight"
            )));
        }
        self.draft.validate()?;

        let sequence = transport.submit(self.draft.clone())?;
        debug!(sequence, "contact message handed to transport");
        self.status = FormStatus::Submitting { sequence };
        Ok(sequence)
    }

    /// Applies a finished submission, if any. Returns `true` when the status
    /// changed. A transport error ends the submission as `Failed` before it is
    /// returned, so the form never stays stuck in `Submitting`.
    pub fn poll(&mut self, transport: &dyn ContactTransport) -> Result<bool, ApplicationError> {
        let FormStatus::Submitting { sequence } = self.status else {
            return Ok(false);
        };

        loop {
            let outcome = match transport.poll() {
                Ok(Some(outcome)) => outcome,
                Ok(None) => return Ok(false),
                Err(error) => {
                    warn!(sequence, %error, "contact transport failed");
                    self.status = FormStatus::Failed(error.to_string());
                    return Err(error);
                }
            };
            if outcome.sequence != sequence {
                debug!(stale = outcome.sequence, sequence, "dropping stale outcome");
                continue;
            }
            match outcome.result {
                SubmissionResult::Sent => {
                    info!(sequence, "contact message sent");
                    self.draft = ContactMessage::default();
                    self.status = FormStatus::Sent;
                }
                SubmissionResult::Failed(reason) => {
                    info!(sequence, %reason, "contact message failed");
                    self.status = FormStatus::Failed(reason);
                }
            }
            return Ok(true);
        }
    }

    pub fn cancel(&mut self, transport: &dyn ContactTransport) -> Result<(), ApplicationError> {
        if let FormStatus::Submitting { sequence } = self.status {
            transport.cancel(sequence)?;
            debug!(sequence, "contact submission canceled");
            self.status = FormStatus::Idle;
        }
        Ok(())
    }
}
