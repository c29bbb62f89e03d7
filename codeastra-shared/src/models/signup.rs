//! Sign-up form state.
//!
//! The form accepts any input, including empty strings; nothing here
//! validates or persists values.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Every control on the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    FullName,
    Username,
    Email,
    Password,
    ConfirmPassword,
    Language,
    AcceptTerms,
}

impl FormField {
    /// Stable identifier, also used as the DOM id of the control.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.into()
    }
}

/// Languages offered by the "primary language" drop-down.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectLanguage {
    JavaScript,
    Python,
    TypeScript,
    Go,
    Rust,
    Java,
    Cpp,
}

impl ProjectLanguage {
    /// Human readable name shown in the drop-down.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::TypeScript => "TypeScript",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Java => "Java",
            Self::Cpp => "C++",
        }
    }
}

/// Account fields in the shape the backend's `/api/auth/signup` expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Transient state of the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub language: Option<ProjectLanguage>,
    pub accept_terms: bool,
    focused: Option<FormField>,
}

impl SignupForm {
    /// Create an empty form with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the value of `field` with user input.
    ///
    /// For [`FormField::Language`] the value is a language code; an empty or
    /// unknown code clears the selection. [`FormField::AcceptTerms`] is not a
    /// text control and is left unchanged, use
    /// [`toggle_accept_terms`](Self::toggle_accept_terms) instead.
    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Username => self.username = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
            FormField::Language => self.language = value.parse().ok(),
            FormField::AcceptTerms => {}
        }
    }

    /// The value a control displays for `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::FullName => self.full_name.clone(),
            FormField::Username => self.username.clone(),
            FormField::Email => self.email.clone(),
            FormField::Password => self.password.clone(),
            FormField::ConfirmPassword => self.confirm_password.clone(),
            FormField::Language => self
                .language
                .map(|language| language.to_string())
                .unwrap_or_default(),
            FormField::AcceptTerms => self.accept_terms.to_string(),
        }
    }

    pub fn set_language(&mut self, language: Option<ProjectLanguage>) {
        self.language = language;
    }

    /// Flip the terms-of-service consent flag.
    pub fn toggle_accept_terms(&mut self) {
        self.accept_terms = !self.accept_terms;
    }

    /// Mark `field` as the one holding input focus.
    pub fn focus(&mut self, field: FormField) {
        self.focused = Some(field);
    }

    /// Clear focus if `field` currently holds it.
    ///
    /// A late blur from a previous control must not steal focus from the
    /// control that was focused after it.
    pub fn blur(&mut self, field: FormField) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    #[must_use]
    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    #[must_use]
    pub fn is_focused(&self, field: FormField) -> bool {
        self.focused == Some(field)
    }

    /// Snapshot the account fields for submission.
    #[must_use]
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            full_name: self.full_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}
