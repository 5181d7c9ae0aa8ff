//! Contact and login form state with synchronous validation

use regex::Regex;
use std::sync::LazyLock;

/// Simulated submission time for both forms
pub const SUBMIT_DELAY_MS: u32 = 1500;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Unanchored `\S+@\S+\.\S+`, the same loose check the forms have always used
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

// ============= Contact Form =============

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    /// `LicenseType::value()` of the selection, empty when none
    pub license_type: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    LicenseType,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub company: Option<&'static str>,
    pub license_type: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Company => self.company,
            ContactField::LicenseType => self.license_type,
            ContactField::Message => self.message,
        }
    }

    /// Editing a field clears only that field's error
    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Company => self.company = None,
            ContactField::LicenseType => self.license_type = None,
            ContactField::Message => self.message = None,
        }
    }
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::LicenseType => self.license_type = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::LicenseType => &self.license_type,
            ContactField::Message => &self.message,
        }
    }

    pub fn validate(&self) -> ContactErrors {
        let email = self.email.trim();

        ContactErrors {
            name: self.name.trim().is_empty().then_some("Name is required"),
            email: if email.is_empty() {
                Some("Email is required")
            } else if !is_valid_email(email) {
                Some("Email is invalid")
            } else {
                None
            },
            company: self.company.trim().is_empty().then_some("Company is required"),
            license_type: self
                .license_type
                .is_empty()
                .then_some("Please select a license type"),
            message: self.message.trim().is_empty().then_some("Message is required"),
        }
    }
}

// ============= Login Form =============

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self, field: LoginField) {
        match field {
            LoginField::Email => self.email = None,
            LoginField::Password => self.password = None,
        }
    }
}

impl LoginForm {
    /// Presence checks here are on the raw value, not the trimmed one
    pub fn validate(&self) -> LoginErrors {
        LoginErrors {
            email: if self.email.is_empty() {
                Some("Email is required")
            } else if !is_valid_email(&self.email) {
                Some("Email is invalid")
            } else {
                None
            },
            password: self.password.is_empty().then_some("Password is required"),
        }
    }
}
