//! Contact form validation.

use quitanda_core::{Email, EmailError};

/// Contact form data as entered by the visitor.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validation failures reported back to the visitor.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    /// One or more required fields are blank.
    #[error("Por favor, preencha todos os campos!")]
    MissingFields,
    /// The email field does not hold a valid address.
    #[error("Por favor, insira um email válido!")]
    InvalidEmail(#[source] EmailError),
}

impl ContactForm {
    /// Validate the form, returning the normalized email address.
    ///
    /// All fields are required after trimming; the email is lowercased
    /// before validation. Failing validation mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is blank or the email is
    /// invalid.
    pub fn validate(&self) -> Result<Email, ContactFormError> {
        let email = self.email.trim().to_lowercase();

        if self.name.trim().is_empty() || email.is_empty() || self.message.trim().is_empty() {
            return Err(ContactFormError::MissingFields);
        }

        Email::parse(&email).map_err(ContactFormError::InvalidEmail)
    }

    /// Confirmation shown after a successful submission.
    #[must_use]
    pub const fn confirmation() -> &'static str {
        "Mensagem enviada com sucesso! Entraremos em contato em breve."
    }
}
