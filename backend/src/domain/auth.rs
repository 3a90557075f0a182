//! Validated signup and login inputs.
//!
//! Inbound adapters hand raw strings to these constructors; services only ever
//! see normalised, non-blank values.

use zeroize::Zeroizing;

use super::required_fields::{MissingFieldsError, RequiredFields};
use super::EmailAddress;

/// Validated signup request.
///
/// ## Invariants
/// - `name` is trimmed and non-empty.
/// - `email` is normalised.
/// - `phone` is trimmed; blank input becomes `None`.
/// - `password` is non-blank but keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use chauffeur_backend::domain::SignupDetails;
///
/// let details = SignupDetails::try_from_parts(" Ada ", "ADA@example.com", Some(" "), "pw").unwrap();
/// assert_eq!(details.name(), "Ada");
/// assert_eq!(details.email().as_str(), "ada@example.com");
/// assert_eq!(details.phone(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    name: String,
    email: EmailAddress,
    phone: Option<String>,
    password: Zeroizing<String>,
}

impl SignupDetails {
    /// Validate raw signup fields.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        phone: Option<&str>,
        password: &str,
    ) -> Result<Self, MissingFieldsError> {
        let mut fields = RequiredFields::new();
        let name = fields.text("name", name);
        let email = fields.text("email", email);
        fields.require("password", !password.trim().is_empty());
        fields.finish()?;

        let phone = phone
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);

        Ok(Self {
            name,
            email: EmailAddress::parse(email)?,
            phone,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated login credentials.
///
/// # Examples
/// ```
/// use chauffeur_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" A@B.com", "secret").unwrap();
/// assert_eq!(creds.email().as_str(), "a@b.com");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw login fields.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, MissingFieldsError> {
        let mut fields = RequiredFields::new();
        let email = fields.text("email", email);
        fields.require("password", !password.trim().is_empty());
        fields.finish()?;

        Ok(Self {
            email: EmailAddress::parse(email)?,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "a@b.com", "pw", &["name"])]
    #[case("A", "  ", "pw", &["email"])]
    #[case("A", "a@b.com", "   ", &["password"])]
    #[case(" ", "", "", &["name", "email", "password"])]
    fn signup_reports_blank_fields(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: &[&str],
    ) {
        let err = SignupDetails::try_from_parts(name, email, None, password)
            .expect_err("blank fields must fail");
        assert_eq!(err.fields(), expected);
    }

    #[rstest]
    fn signup_trims_name_and_phone_but_keeps_password() {
        let details =
            SignupDetails::try_from_parts("  Grace  ", " G@X.io ", Some(" 0207 "), " pw ")
                .expect("valid signup");
        assert_eq!(details.name(), "Grace");
        assert_eq!(details.email().as_str(), "g@x.io");
        assert_eq!(details.phone(), Some("0207"));
        assert_eq!(details.password(), " pw ");
    }

    #[rstest]
    #[case("", "pw", &["email"])]
    #[case("a@b.com", "", &["password"])]
    #[case(" ", " ", &["email", "password"])]
    fn login_reports_blank_fields(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: &[&str],
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("blank fields must fail");
        assert_eq!(err.fields(), expected);
    }
}
