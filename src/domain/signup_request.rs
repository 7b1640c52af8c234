use super::SignupEmail;

pub const EMAIL_FIELD: &str = "email";

/// The fields posted to the signup endpoint. There is exactly one `email`
/// field and it carries an address that passed validation.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    email: SignupEmail,
    fields: Vec<(String, String)>,
}

impl SignupRequest {
    /// Builds a request from the host form's field set. The validated
    /// address takes the place of the first `email` entry (or is appended);
    /// any further `email` entries are dropped.
    pub fn new(email: SignupEmail, form_fields: Vec<(String, String)>) -> Self {
        let position = form_fields.iter().position(|(name, _)| name == EMAIL_FIELD);
        let mut fields: Vec<_> = form_fields
            .into_iter()
            .filter(|(name, _)| name != EMAIL_FIELD)
            .collect();
        let entry = (EMAIL_FIELD.to_owned(), email.as_ref().to_owned());
        match position {
            Some(position) => fields.insert(position, entry),
            None => fields.push(entry),
        }
        Self { email, fields }
    }

    pub fn email(&self) -> &SignupEmail {
        &self.email
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}
