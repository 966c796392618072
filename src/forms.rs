//! Form State
//!
//! Contact form and sign-in/sign-up form records. Submitting only
//! validates and logs; nothing is sent anywhere.

use serde::{Deserialize, Serialize};

/// Subjects offered by the contact form: (value, label)
pub const CONTACT_SUBJECTS: &[(&str, &str)] = &[
    ("general", "General Inquiry"),
    ("catering", "Catering Services"),
    ("feedback", "Feedback"),
    ("partnership", "Partnership"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Please fill in your {0}")]
    MissingField(&'static str),

    #[error("{0:?} does not look like an email address")]
    InvalidEmail(String),

    #[error("Unknown subject {0:?}")]
    UnknownSubject(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFormError {
    #[error("Please fill in your {0}")]
    MissingField(&'static str),

    #[error("{0:?} does not look like an email address")]
    InvalidEmail(String),
}

/// Minimal shape check: something@something.tld, no spaces
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !value.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn require(value: &str, label: &'static str) -> Result<(), ContactFormError> {
    if value.trim().is_empty() {
        Err(ContactFormError::MissingField(label))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Replace one field by its input `name`; unknown names are ignored
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "subject" => self.subject = value,
            "message" => self.message = value,
            other => log::debug!("[CONTACT] Ignoring unknown field {:?}", other),
        }
    }

    pub fn validate(&self) -> Result<(), ContactFormError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        if !looks_like_email(self.email.trim()) {
            return Err(ContactFormError::InvalidEmail(self.email.clone()));
        }
        require(&self.subject, "subject")?;
        if !CONTACT_SUBJECTS.iter().any(|(value, _)| *value == self.subject) {
            return Err(ContactFormError::UnknownSubject(self.subject.clone()));
        }
        require(&self.message, "message")?;
        Ok(())
    }

    /// Validate, log, and reset the form on success
    pub fn submit(&mut self) -> Result<(), ContactFormError> {
        self.validate()?;
        log::info!(
            "[CONTACT] Message from {} <{}> about {}",
            self.name,
            self.email.trim(),
            self.subject
        );
        *self = Self::default();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Join Us",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    /// Prompt and link text for switching to the other mode
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            AuthMode::SignIn => ("Don't have an account?", "Sign Up"),
            AuthMode::SignUp => ("Already have an account?", "Sign In"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl AuthForm {
    pub fn validate(&self, mode: AuthMode) -> Result<(), AuthFormError> {
        if mode == AuthMode::SignUp && self.name.trim().is_empty() {
            return Err(AuthFormError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(AuthFormError::MissingField("email"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(AuthFormError::InvalidEmail(self.email.clone()));
        }
        if self.password.is_empty() {
            return Err(AuthFormError::MissingField("password"));
        }
        Ok(())
    }

    /// Validate and log. The password never reaches the log.
    pub fn submit(&mut self, mode: AuthMode) -> Result<(), AuthFormError> {
        self.validate(mode)?;
        log::info!("[AUTH] {:?} requested for {}", mode, self.email.trim());
        *self = Self::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            subject: "catering".to_string(),
            message: "Coffee for forty, please".to_string(),
        }
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("hello@hipsterscafe.com"));
        assert!(looks_like_email("a.b@c.co.uk"));
        assert!(!looks_like_email("hello"));
        assert!(!looks_like_email("@cafe.com"));
        assert!(!looks_like_email("hello@cafe"));
        assert!(!looks_like_email("hello@.com"));
        assert!(!looks_like_email("he llo@cafe.com"));
        assert!(!looks_like_email("a@b@c.com"));
    }

    #[test]
    fn test_set_field_replaces_one_field() {
        let mut form = ContactForm::default();
        form.set_field("email", "ada@example.com".to_string());
        form.set_field("favourite", "flat white".to_string());
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_contact_requires_fields_in_order() {
        let mut form = filled_contact();
        form.name = "  ".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::MissingField("name")));

        let mut form = filled_contact();
        form.subject.clear();
        assert_eq!(form.validate(), Err(ContactFormError::MissingField("subject")));

        let mut form = filled_contact();
        form.message.clear();
        assert_eq!(form.validate(), Err(ContactFormError::MissingField("message")));
    }

    #[test]
    fn test_contact_phone_is_optional() {
        assert_eq!(filled_contact().validate(), Ok(()));
    }

    #[test]
    fn test_contact_rejects_bad_email_and_subject() {
        let mut form = filled_contact();
        form.email = "ada-at-example".to_string();
        assert!(matches!(form.validate(), Err(ContactFormError::InvalidEmail(_))));

        let mut form = filled_contact();
        form.subject = "complaints".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::UnknownSubject("complaints".to_string())));
    }

    #[test]
    fn test_contact_submit_resets_only_on_success() {
        let mut form = filled_contact();
        form.submit().unwrap();
        assert_eq!(form, ContactForm::default());

        let mut form = filled_contact();
        form.email.clear();
        assert!(form.submit().is_err());
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_auth_mode_toggle() {
        assert_eq!(AuthMode::default(), AuthMode::SignIn);
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.toggled().submit_label(), "Sign In");
    }

    #[test]
    fn test_auth_name_only_required_for_sign_up() {
        let form = AuthForm {
            name: String::new(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert_eq!(form.validate(AuthMode::SignIn), Ok(()));
        assert_eq!(form.validate(AuthMode::SignUp), Err(AuthFormError::MissingField("name")));
    }

    #[test]
    fn test_auth_requires_password() {
        let mut form = AuthForm {
            name: String::new(),
            email: "ada@example.com".to_string(),
            password: String::new(),
        };
        assert_eq!(form.submit(AuthMode::SignIn), Err(AuthFormError::MissingField("password")));
        assert_eq!(form.email, "ada@example.com");
    }

    #[test]
    fn test_password_not_serialized() {
        let form = AuthForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(!json.contains("hunter2"));
    }
}
