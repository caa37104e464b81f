use std::borrow::Cow;
use validator::ValidationError;

pub const REQUIRED: &str = "required";
pub const EMAIL: &str = "email";

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error(REQUIRED, "Value must not be blank"));
    }
    Ok(())
}

pub fn validate_email_shape(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    if !is_email_shape(value.trim()) {
        return Err(error(EMAIL, "Value must look like name@domain.tld"));
    }
    Ok(())
}

/// Loose `text@text.text` check. Anything stricter belongs to a mail server.
pub fn is_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}
