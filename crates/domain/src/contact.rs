use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingContactField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::MissingContactField("email"));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(DomainError::InvalidEmail(self.email.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(DomainError::MissingContactField("message"));
        }
        Ok(())
    }
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}
