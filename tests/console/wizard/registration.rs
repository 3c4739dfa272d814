//! Tests for the single-step registration, profile and login forms.

use netroster::{
    console::{
        form::{LoginForm, ProfileField, ProfileForm, RegistrationField, RegistrationForm},
        wizard::Wizard,
    },
    error::FormError,
};

fn filled_registration() -> Wizard<RegistrationForm> {
    let mut wizard = Wizard::<RegistrationForm>::new();
    wizard.set(RegistrationField::Name, "Zee");
    wizard.set(RegistrationField::Email, "zee@example.org");
    wizard.set(RegistrationField::Password, "hunter2");
    wizard.set(RegistrationField::ConfirmPassword, "hunter2");
    wizard
}

/// Tests that mismatched passwords block registration before any request.
///
/// Expected: Err(PasswordMismatch)
#[test]
fn registration_requires_matching_passwords() {
    let mut wizard = filled_registration();
    wizard.set(RegistrationField::ConfirmPassword, "hunter3");

    assert_eq!(wizard.begin_submit(), Err(FormError::PasswordMismatch));
    assert!(!wizard.is_submitting());
}

/// Tests that registration creates a non-admin account.
///
/// Expected: NewSystemUser with is_admin false
#[test]
fn registration_builds_non_admin_account() {
    let mut wizard = filled_registration();

    let account = wizard.begin_submit().unwrap();

    assert_eq!(account.email, "zee@example.org");
    assert!(!account.is_admin);
    assert!(wizard.is_last_step());
}

/// Tests that a blank password leaves the stored password unchanged.
///
/// Expected: patch without a password
#[test]
fn profile_blank_password_is_omitted() {
    let mut wizard = Wizard::<ProfileForm>::new();
    wizard.set(ProfileField::Name, "Operator");
    wizard.set(ProfileField::Email, "operator@example.org");

    let patch = wizard.begin_submit().unwrap();

    assert_eq!(patch.password, None);
    let body = serde_json::to_value(&patch).unwrap();
    assert!(body.get("password").is_none());
}

/// Tests that login requires both fields.
///
/// Expected: Err(MissingFields) naming password
#[test]
fn login_requires_password() {
    let mut wizard = Wizard::with_form(LoginForm {
        email: "operator@example.org".to_string(),
        password: String::new(),
    });

    assert_eq!(
        wizard.begin_submit(),
        Err(FormError::MissingFields {
            step: 0,
            fields: vec!["password"],
        })
    );
}
