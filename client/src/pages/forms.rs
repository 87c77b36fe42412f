//! Input checks shared by the auth forms.
//!
//! These run before any request is sent. The backend repeats its own checks;
//! its messages surface through `AuthState::error`.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const EMAIL_REQUIRED: &str = "Enter your email.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Enter your password.";
pub const NAME_REQUIRED: &str = "Enter your name.";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match.";
pub const RESET_TOKEN_REQUIRED: &str = "Enter the reset token from your email.";

/// Trimmed email with a single `@` separating non-empty parts.
///
/// # Errors
///
/// A message suitable for display next to the form.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email.to_owned())
        }
        _ => Err(EMAIL_INVALID),
    }
}

/// Passwords are sent as typed; only emptiness is rejected.
fn require_password(raw: &str) -> Result<String, &'static str> {
    if raw.is_empty() { Err(PASSWORD_REQUIRED) } else { Ok(raw.to_owned()) }
}

/// # Errors
///
/// A display message for the first invalid field.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    Ok((validate_email(email)?, require_password(password)?))
}

/// # Errors
///
/// A display message for the first invalid field.
pub fn validate_register(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    let email = validate_email(email)?;
    let password = require_password(password)?;
    if password != confirm {
        return Err(PASSWORDS_DIFFER);
    }
    Ok((name.to_owned(), email, password))
}

/// # Errors
///
/// A display message for the first invalid field.
pub fn validate_reset(token: &str, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let token = token.trim();
    if token.is_empty() {
        return Err(RESET_TOKEN_REQUIRED);
    }
    let password = require_password(password)?;
    if password != confirm {
        return Err(PASSWORDS_DIFFER);
    }
    Ok((token.to_owned(), password))
}
