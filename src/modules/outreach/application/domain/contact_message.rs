use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What the public contact form submits, relayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    #[schema(example = "Sam")]
    pub name: String,
    #[schema(example = "sam@example.com")]
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("email is required".to_string());
        }
        if !EmailAddress::is_valid(self.email.trim()) {
            return Err("email is not a valid address".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("message is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            message: body.into(),
        }
    }

    #[test]
    fn test_complete_message_is_valid() {
        assert!(message("Sam", "sam@example.com", "Hello").validate().is_ok());
    }

    #[test]
    fn test_each_field_is_checked() {
        assert!(message(" ", "sam@example.com", "Hi").validate().is_err());
        assert!(message("Sam", "not-an-email", "Hi").validate().is_err());
        assert!(message("Sam", "sam@example.com", "").validate().is_err());
    }
}
