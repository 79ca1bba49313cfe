use thiserror::Error;

use crate::toast::Toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required fields: {0:?}")]
    Missing(Vec<Field>),
}

/// The contact form's in-memory record. Nothing is sent anywhere; a
/// successful submit only acknowledges and clears the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Every field must be non-empty. Whitespace is accepted as content.
    pub fn validate(&self) -> Result<(), FormError> {
        let missing = Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect::<Vec<_>>();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::Missing(missing))
        }
    }

    /// On success the form is cleared and the acknowledgement is returned.
    /// On failure the form is left as it was.
    pub fn submit(&mut self) -> Result<Toast, Toast> {
        if let Err(e) = self.validate() {
            log::debug!("contact form rejected: {e}");
            return Err(Toast::destructive(
                "Missing Information",
                "Please fill in all fields before submitting.",
            ));
        }
        *self = Self::default();
        Ok(Toast::new(
            "Message Sent! 🚀",
            "Thanks for reaching out! I'll get back to you soon.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    #[test]
    fn test_submit_with_empty_field_keeps_form() {
        for field in Field::ALL {
            let mut form = filled();
            form.set(field, "");
            let before = form.clone();
            let toast = form.submit().unwrap_err();
            assert_eq!(toast.title, "Missing Information");
            assert!(toast.is_destructive());
            assert_eq!(form, before);
        }
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let mut form = ContactForm {
            name: "Ann".to_string(),
            email: "a@b.c".to_string(),
            message: "   ".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));
        let toast = form.submit().unwrap();
        assert_eq!(toast.title, "Message Sent! 🚀");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_validate_reports_all_missing() {
        let form = ContactForm::default();
        assert_eq!(
            form.validate(),
            Err(FormError::Missing(Field::ALL.to_vec()))
        );
    }

    #[test]
    fn test_complete_submit_clears_form() {
        let mut form = filled();
        let toast = form.submit().unwrap();
        assert_eq!(toast.title, "Message Sent! 🚀");
        assert!(!toast.is_destructive());
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.get(Field::Name), "");
    }
}
