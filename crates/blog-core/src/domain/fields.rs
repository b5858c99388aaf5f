//! Field-level checks shared by the blog and topic drafts.

use uuid::Uuid;

use crate::error::{DomainError, FieldErrors};

pub(crate) const MAX_TEXT_LENGTH: usize = 255;

pub(crate) const REQUIRED: &str = "This field is required.";
pub(crate) const BLANK: &str = "This field may not be blank.";
pub(crate) const INVALID_SLUG: &str =
    "Enter a valid “slug” consisting of letters, numbers, underscores or hyphens.";

/// Check a required text field, recording any problem against `field`.
///
/// Returns the value only when it passed.
pub(crate) fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    max_length: Option<usize>,
) -> Option<String> {
    let Some(value) = value else {
        errors.add(field, REQUIRED);
        return None;
    };

    if value.trim().is_empty() {
        errors.add(field, BLANK);
        return None;
    }

    if let Some(max) = max_length {
        if value.chars().count() > max {
            errors.add(
                field,
                format!("Ensure this field has no more than {} characters.", max),
            );
            return None;
        }
    }

    Some(value)
}

/// Derived slugs are checked like any submitted field.
pub(crate) fn check_slug(errors: &mut FieldErrors, slug: &str) {
    if slug.is_empty() {
        errors.add("slug", INVALID_SLUG);
    } else if slug.chars().count() > MAX_TEXT_LENGTH {
        errors.add(
            "slug",
            format!(
                "Ensure this field has no more than {} characters.",
                MAX_TEXT_LENGTH
            ),
        );
    }
}

pub(crate) fn invalid_uuid(value: &str) -> String {
    format!("“{}” is not a valid UUID.", value)
}

/// Parse a record id taken from a path segment or request body.
///
/// Absent, blank or malformed ids are all rejected as a bad request.
pub fn parse_id(raw: Option<&str>) -> Result<Uuid, DomainError> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| DomainError::BadRequest("Invalid request".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_missing_and_blank() {
        let mut errors = FieldErrors::new();
        assert!(required_text(&mut errors, "title", None, None).is_none());
        assert!(required_text(&mut errors, "description", Some("  ".into()), None).is_none());

        assert_eq!(errors.get("title"), Some(&[REQUIRED.to_string()][..]));
        assert_eq!(errors.get("description"), Some(&[BLANK.to_string()][..]));
    }

    #[test]
    fn test_required_text_too_long() {
        let mut errors = FieldErrors::new();
        let long = "x".repeat(MAX_TEXT_LENGTH + 1);
        assert!(required_text(&mut errors, "title", Some(long), Some(MAX_TEXT_LENGTH)).is_none());
        assert_eq!(
            errors.get("title").unwrap()[0],
            "Ensure this field has no more than 255 characters."
        );
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(Some(&id.to_string())).unwrap(), id);
        assert!(matches!(parse_id(None), Err(DomainError::BadRequest(_))));
        assert!(matches!(parse_id(Some("")), Err(DomainError::BadRequest(_))));
        assert!(matches!(parse_id(Some("42")), Err(DomainError::BadRequest(_))));
    }
}
