//! Input validation shared by the public-facing endpoints.

/// Loose email shape check: one `@` with a non-empty local part and a domain
/// that contains a dot. Real validation happens when mail is actually sent,
/// which this site never does itself.
pub fn valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

/// Reject blank or whitespace-only required fields.
pub fn required(value: &str, field: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(valid_email("a@b.co"));
        assert!(valid_email("  padded@example.org  "));
        assert!(!valid_email("missing-at.example.org"));
        assert!(!valid_email("@example.org"));
        assert!(!valid_email("a@nodot"));
        assert!(!valid_email("a@.leading"));
        assert!(!valid_email("spaced name@example.org"));
    }

    #[test]
    fn required_trims() {
        assert_eq!(required("  hi  ", "name").unwrap(), "hi");
        assert!(required("   ", "name").is_err());
    }
}
