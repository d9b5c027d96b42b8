use crate::contact::error::ContactError;

/// What a visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ContactSubmission {
    /// Required: name, email and message (after trimming); email must look like an address.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_email_shaped(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Company if given, otherwise the sender's name.
    pub fn display_sender(&self) -> &str {
        let company = self.company.trim();
        if company.is_empty() {
            self.name.trim()
        } else {
            company
        }
    }
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain.
pub fn is_email_shaped(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(dot) => dot > 0 && !domain.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/form.rs"]
mod tests;
